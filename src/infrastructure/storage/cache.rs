// Cache adapter and in-memory backend
use crate::domain::error::TranslateError;
use crate::domain::model::{CacheKey, TranslationRecord};
use crate::domain::traits::CacheBackend;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Request-path view of the cache store.
///
/// Backend failures never reach the caller: a failed read is reported as a
/// miss and a failed write is only logged.
#[derive(Clone)]
pub struct TranslationCache {
    backend: Arc<dyn CacheBackend>,
}

impl TranslationCache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<TranslationRecord> {
        match self.backend.get(key).await {
            Ok(Some(record)) => {
                tracing::info!(cache_key = %key, "cache hit");
                Some(record)
            }
            Ok(None) => {
                tracing::debug!(cache_key = %key, "cache miss");
                None
            }
            Err(e) => {
                let e = TranslateError::CacheRead(e.to_string());
                tracing::warn!(cache_key = %key, "{}", e);
                None
            }
        }
    }

    /// Best-effort write. Returns whether the record was stored.
    pub async fn put(&self, key: &CacheKey, record: &TranslationRecord) -> bool {
        match self.backend.put(key, record).await {
            Ok(()) => {
                tracing::info!(cache_key = %key, "translation cached");
                true
            }
            Err(e) => {
                let e = TranslateError::CacheWrite(e.to_string());
                tracing::warn!(cache_key = %key, "{}", e);
                false
            }
        }
    }

    pub async fn len(&self) -> Result<usize, TranslateError> {
        self.backend.len().await
    }
}

/// Thread-safe in-memory backend, lost on restart.
#[derive(Default)]
pub struct MemoryCache {
    map: DashMap<String, TranslationRecord>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<TranslationRecord>, TranslateError> {
        Ok(self.map.get(key.as_str()).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &CacheKey, record: &TranslationRecord) -> Result<(), TranslateError> {
        self.map.insert(key.as_str().to_string(), record.clone());
        Ok(())
    }

    async fn len(&self) -> Result<usize, TranslateError> {
        Ok(self.map.len())
    }
}
