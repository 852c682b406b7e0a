use crate::domain::error::TranslateError;
use crate::domain::traits::SecretStore;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Provider credential, fetched from the secret store on first use and then
/// held for the life of the process.
///
/// There is no refresh: a rotated secret is only picked up after a restart.
pub struct CredentialProvider {
    secret_name: String,
    store: Arc<dyn SecretStore>,
    value: OnceCell<String>,
}

impl CredentialProvider {
    pub fn new(secret_name: impl Into<String>, store: Arc<dyn SecretStore>) -> Self {
        Self {
            secret_name: secret_name.into(),
            store,
            value: OnceCell::new(),
        }
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    /// Return the credential, fetching it if this is the first call.
    ///
    /// A failed fetch leaves the cell empty, so the next call tries again.
    pub async fn get(&self) -> Result<&str, TranslateError> {
        let value = self
            .value
            .get_or_try_init(|| async {
                tracing::debug!(secret = %self.secret_name, "fetching provider credential");
                self.store.fetch(&self.secret_name).await.map_err(|e| {
                    tracing::error!(secret = %self.secret_name, "secret fetch failed: {}", e);
                    match e {
                        TranslateError::CredentialFetch(_) => e,
                        other => TranslateError::CredentialFetch(other.to_string()),
                    }
                })
            })
            .await?;
        Ok(value.as_str())
    }

    pub fn is_loaded(&self) -> bool {
        self.value.initialized()
    }
}
