//! Credential caching and secret stores

mod common;

use common::StaticSecrets;
use std::sync::Arc;
use transcache::application::credential::CredentialProvider;
use transcache::domain::error::TranslateError;
use transcache::domain::traits::SecretStore;
use transcache::infrastructure::secrets::FileSecretStore;

#[tokio::test]
async fn test_credential_is_fetched_once() {
    let secrets = StaticSecrets::ok("abc123");
    let provider = CredentialProvider::new("DeepLAPIKey", secrets.clone());

    assert!(!provider.is_loaded());
    assert_eq!(provider.get().await.unwrap(), "abc123");
    assert_eq!(provider.get().await.unwrap(), "abc123");
    assert!(provider.is_loaded());
    assert_eq!(secrets.fetch_count(), 1);
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_fetch() {
    let secrets = StaticSecrets::ok("abc123");
    let provider = Arc::new(CredentialProvider::new("DeepLAPIKey", secrets.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = provider.clone();
            tokio::spawn(async move { provider.get().await.map(str::to_string) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "abc123");
    }
    assert_eq!(secrets.fetch_count(), 1);
}

#[tokio::test]
async fn test_failed_fetch_is_retried_next_call() {
    let secrets = StaticSecrets::missing();
    let provider = CredentialProvider::new("DeepLAPIKey", secrets.clone());

    let err = provider.get().await.unwrap_err();
    assert!(matches!(err, TranslateError::CredentialFetch(_)));
    assert_eq!(err.status_code(), 500);
    assert!(!provider.is_loaded());

    assert!(provider.get().await.is_err());
    assert_eq!(secrets.fetch_count(), 2);
}

#[tokio::test]
async fn test_file_secret_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("DeepLAPIKey"), "file-key:fx\n").unwrap();
    std::fs::write(dir.path().join("Blank"), "\n").unwrap();

    let store = FileSecretStore::new(dir.path());
    assert_eq!(store.fetch("DeepLAPIKey").await.unwrap(), "file-key:fx");

    let err = store.fetch("Blank").await.unwrap_err();
    assert!(matches!(err, TranslateError::CredentialFetch(_)));

    let err = store.fetch("Missing").await.unwrap_err();
    assert!(matches!(err, TranslateError::CredentialFetch(_)));
}
