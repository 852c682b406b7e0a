use crate::domain::error::TranslateError;
use crate::domain::traits::SecretStore;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the secret from the environment variable of the same name.
#[derive(Debug, Default, Clone)]
pub struct EnvSecretStore;

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn fetch(&self, name: &str) -> Result<String, TranslateError> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) => Err(TranslateError::CredentialFetch(format!(
                "environment variable '{}' is empty",
                name
            ))),
            Err(e) => Err(TranslateError::CredentialFetch(format!(
                "environment variable '{}': {}",
                name, e
            ))),
        }
    }
}

/// Reads the secret from `<dir>/<name>`, the layout used by mounted secret volumes.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    dir: PathBuf,
}

impl FileSecretStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SecretStore for FileSecretStore {
    async fn fetch(&self, name: &str) -> Result<String, TranslateError> {
        let path = self.dir.join(name);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            TranslateError::CredentialFetch(format!("{}: {}", path.display(), e))
        })?;

        let value = content.trim_end();
        if value.is_empty() {
            return Err(TranslateError::CredentialFetch(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(value.to_string())
    }
}
