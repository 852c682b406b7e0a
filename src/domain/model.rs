use crate::domain::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Longest accepted input, counted in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Target languages accepted by the provider.
pub const SUPPORTED_LANGS: [&str; 29] = [
    "BG", "CS", "DA", "DE", "EL", "EN", "ES", "ET", "FI", "FR", "HU", "ID", "IT", "JA", "KO", "LT",
    "LV", "NB", "NL", "PL", "PT", "RO", "RU", "SK", "SL", "SV", "TR", "UK", "ZH",
];

pub const CACHE_KEY_SEPARATOR: &str = "-";

/// A validated request, alive for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: String,
}

/// Cache identity of a (text, target language) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(text: &str, target_lang: &str) -> Self {
        Self(format!(
            "{}{}{}",
            text,
            CACHE_KEY_SEPARATOR,
            target_lang.to_uppercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translation result; immutable once produced or read back from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub source_lang: String,
    pub original_text: String,
    pub target_lang: String,
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success {
        data: TranslationRecord,
        cached: bool,
    },
    ServerError {
        error: String,
        message: String,
    },
    ClientError {
        error: String,
    },
}

/// Transport-level response produced for every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded [`ResponseBody`].
    pub body: String,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, body: &ResponseBody) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        // ResponseBody only holds strings and a bool, serialization cannot fail
        let body = serde_json::to_string(body).unwrap_or_default();

        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn success(data: TranslationRecord, cached: bool) -> Self {
        Self::new(200, &ResponseBody::Success { data, cached })
    }

    pub fn client_error(error: impl Into<String>) -> Self {
        Self::new(
            400,
            &ResponseBody::ClientError {
                error: error.into(),
            },
        )
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(
            500,
            &ResponseBody::ServerError {
                error: "Internal server error".to_string(),
                message: message.into(),
            },
        )
    }

    /// Envelope for an error that terminated the invocation.
    pub fn from_error(err: &TranslateError) -> Self {
        match err.status_code() {
            400 => Self::client_error(err.to_string()),
            _ => Self::server_error(err.to_string()),
        }
    }

    /// Decode the body back into its structured form.
    pub fn parsed_body(&self) -> Result<ResponseBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
