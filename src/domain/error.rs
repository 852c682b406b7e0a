use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid JSON request body")]
    PayloadParse,

    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch secret: {0}")]
    CredentialFetch(String),

    #[error("Timeout while calling the DeepL API")]
    ProviderTimeout,

    #[error("Error while calling the DeepL API: {0}")]
    Provider(String),

    #[error("Cache read error: {0}")]
    CacheRead(String),

    #[error("Cache write error: {0}")]
    CacheWrite(String),

    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TranslateError {
    /// HTTP status the error maps to when it terminates an invocation.
    pub fn status_code(&self) -> u16 {
        match self {
            TranslateError::PayloadParse | TranslateError::Validation(_) => 400,
            _ => 500,
        }
    }
}
