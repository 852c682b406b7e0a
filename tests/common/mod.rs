//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use transcache::application::credential::CredentialProvider;
use transcache::domain::error::TranslateError;
use transcache::domain::model::{CacheKey, TranslationRecord};
use transcache::domain::traits::{CacheBackend, SecretStore, TranslationProvider};
use transcache::infrastructure::config::Config;
use transcache::infrastructure::storage::cache::MemoryCache;
use transcache::AppState;

pub fn record(text: &str, lang: &str, translated: &str) -> TranslationRecord {
    TranslationRecord {
        source_lang: "EN".to_string(),
        original_text: text.to_string(),
        target_lang: lang.to_uppercase(),
        translated_text: translated.to_string(),
    }
}

pub enum Reply {
    Ok(TranslationRecord),
    Timeout,
    Fail(String),
}

/// Provider that answers with a fixed reply and records every call.
pub struct FakeProvider {
    reply: Reply,
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationProvider for FakeProvider {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        credential: &str,
    ) -> Result<TranslationRecord, TranslateError> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            target_lang.to_string(),
            credential.to_string(),
        ));
        match &self.reply {
            Reply::Ok(r) => Ok(r.clone()),
            Reply::Timeout => Err(TranslateError::ProviderTimeout),
            Reply::Fail(msg) => Err(TranslateError::Provider(msg.clone())),
        }
    }
}

/// Memory cache that records puts and can be told to fail.
#[derive(Default)]
pub struct RecordingCache {
    inner: MemoryCache,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub puts: Mutex<Vec<CacheKey>>,
}

impl RecordingCache {
    pub fn failing(fail_reads: bool, fail_writes: bool) -> Self {
        Self {
            fail_reads,
            fail_writes,
            ..Default::default()
        }
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.puts
            .lock()
            .unwrap()
            .iter()
            .map(|k| k.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<TranslationRecord>, TranslateError> {
        if self.fail_reads {
            return Err(TranslateError::Config("store unavailable".to_string()));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &CacheKey, record: &TranslationRecord) -> Result<(), TranslateError> {
        self.puts.lock().unwrap().push(key.clone());
        if self.fail_writes {
            return Err(TranslateError::Config("store unavailable".to_string()));
        }
        self.inner.put(key, record).await
    }

    async fn len(&self) -> Result<usize, TranslateError> {
        self.inner.len().await
    }
}

/// Secret store with a fixed answer that counts fetches.
pub struct StaticSecrets {
    value: Option<String>,
    pub fetches: AtomicUsize,
}

impl StaticSecrets {
    pub fn ok(value: &str) -> Arc<Self> {
        Arc::new(Self {
            value: Some(value.to_string()),
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn missing() -> Arc<Self> {
        Arc::new(Self {
            value: None,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for StaticSecrets {
    async fn fetch(&self, name: &str) -> Result<String, TranslateError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.value
            .clone()
            .ok_or_else(|| TranslateError::CredentialFetch(format!("secret '{}' not found", name)))
    }
}

pub fn state_with(
    cache: Arc<RecordingCache>,
    provider: Arc<FakeProvider>,
    secrets: Arc<StaticSecrets>,
) -> AppState {
    AppState::from_parts(
        cache,
        provider,
        CredentialProvider::new("DeepLAPIKey", secrets),
        Config::default(),
    )
}
