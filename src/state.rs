use crate::application::credential::CredentialProvider;
use crate::domain::error::TranslateError;
use crate::domain::traits::{CacheBackend, SecretStore, TranslationProvider};
use crate::infrastructure::config::{CacheBackendKind, Config, SecretSource};
use crate::infrastructure::network::client::DeepLTranslator;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::secrets::{EnvSecretStore, FileSecretStore};
use crate::infrastructure::storage::cache::{MemoryCache, TranslationCache};
use crate::infrastructure::storage::db::{init_database, SqliteCache};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Everything an invocation needs, built once per process.
#[derive(Clone)]
pub struct AppState {
    pub cache: TranslationCache,
    pub provider: Arc<dyn TranslationProvider>,
    pub credentials: Arc<CredentialProvider>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, TranslateError> {
        let backend = open_cache_backend(&config).await;

        let secrets: Arc<dyn SecretStore> = match config.secrets.source {
            SecretSource::Env => Arc::new(EnvSecretStore),
            SecretSource::File => {
                let dir = config.secrets.dir.as_deref().ok_or_else(|| {
                    TranslateError::Config(
                        "secrets.dir is required when secrets.source = \"file\"".to_string(),
                    )
                })?;
                Arc::new(FileSecretStore::new(dir))
            }
        };

        let provider = DeepLTranslator::new(create_client()?)
            .with_endpoint(config.provider.endpoint.clone())
            .with_timeout(Duration::from_secs(config.provider.timeout_secs));

        let credentials = CredentialProvider::new(config.secrets.name.clone(), secrets);

        Ok(Self::from_parts(
            backend,
            Arc::new(provider),
            credentials,
            config,
        ))
    }

    /// Assemble a state from already-built collaborators.
    pub fn from_parts(
        backend: Arc<dyn CacheBackend>,
        provider: Arc<dyn TranslationProvider>,
        credentials: CredentialProvider,
        config: Config,
    ) -> Self {
        Self {
            cache: TranslationCache::new(backend),
            provider,
            credentials: Arc::new(credentials),
            config: Arc::new(config),
        }
    }
}

/// Open the configured cache store.
///
/// A SQLite store that cannot be opened is replaced by an in-memory one, so
/// requests still reach the provider.
pub async fn open_cache_backend(config: &Config) -> Arc<dyn CacheBackend> {
    match config.cache.backend {
        CacheBackendKind::Sqlite => {
            let db_path = crate::infrastructure::config::get_database_path(config);
            match open_sqlite(&db_path).await {
                Ok(cache) => {
                    tracing::debug!(path = %db_path.display(), "opened sqlite cache");
                    Arc::new(cache)
                }
                Err(e) => {
                    tracing::warn!(
                        path = %db_path.display(),
                        "cannot open sqlite cache, using memory cache: {}",
                        e
                    );
                    Arc::new(MemoryCache::new())
                }
            }
        }
        CacheBackendKind::Memory => Arc::new(MemoryCache::new()),
    }
}

async fn open_sqlite(db_path: &Path) -> Result<SqliteCache, TranslateError> {
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let conn = init_database(db_path).await?;
    Ok(SqliteCache::new(conn))
}
