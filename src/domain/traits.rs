use crate::domain::error::TranslateError;
use crate::domain::model::{CacheKey, TranslationRecord};
use async_trait::async_trait;

/// Remote translation service called on a cache miss.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into `target_lang` using `credential` for authentication.
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        credential: &str,
    ) -> Result<TranslationRecord, TranslateError>;
}

/// Key-value store holding translation records.
///
/// Implementations report their own failures; the request path goes through
/// [`TranslationCache`](crate::infrastructure::storage::cache::TranslationCache),
/// which decides what to do with them.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<TranslationRecord>, TranslateError>;

    /// Store `record` under `key`, replacing any previous value.
    async fn put(&self, key: &CacheKey, record: &TranslationRecord) -> Result<(), TranslateError>;

    /// Number of stored records
    async fn len(&self) -> Result<usize, TranslateError>;
}

/// Source of secret values, looked up by name.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, TranslateError>;
}
