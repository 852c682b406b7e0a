use crate::domain::error::TranslateError;
use crate::infrastructure::network::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `secrets.name`.
pub const SECRET_NAME_ENV: &str = "DEEPL_SECRET_NAME";
/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TRANSCACHE_CONFIG";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub secrets: SecretsConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    #[default]
    Env,
    File,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecretsConfig {
    #[serde(default = "default_secret_name")]
    pub name: String,
    #[serde(default)]
    pub source: SecretSource,
    /// Directory holding one file per secret, used with `source = "file"`
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackendKind,
    /// SQLite file; defaults to the config directory
    pub path: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            name: default_secret_name(),
            source: SecretSource::default(),
            dir: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Defaults
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "INFO".to_string()
}
fn default_secret_name() -> String {
    "DeepLAPIKey".to_string()
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|p| p.join("transcache").join("config.toml"))
}

/// Get database path (uses config directory by default)
pub fn get_database_path(config: &Config) -> PathBuf {
    if let Some(path) = config.cache.path.as_deref() {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    // ~/.config/transcache/translations.db (Linux)
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transcache")
        .join("translations.db")
}

/// Parse a config document and apply environment overrides.
pub fn parse_config(content: &str) -> Result<Config, TranslateError> {
    let mut config = toml::from_str::<Config>(content)?;
    apply_limits(&mut config);
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Smallest accepted provider timeout.
pub const MIN_TIMEOUT_SECS: u64 = 1;

fn apply_limits(config: &mut Config) {
    // Runs before logging is initialised
    if config.provider.timeout_secs < MIN_TIMEOUT_SECS {
        eprintln!(
            "Warning: provider.timeout_secs = {} is too small. Using {}.",
            config.provider.timeout_secs, MIN_TIMEOUT_SECS
        );
        config.provider.timeout_secs = MIN_TIMEOUT_SECS;
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(name) = std::env::var(SECRET_NAME_ENV) {
        if !name.is_empty() {
            config.secrets.name = name;
        }
    }
}

pub fn load_config() -> Result<Config, TranslateError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => {
            let mut config = Config::default();
            apply_env_overrides(&mut config);
            Ok(config)
        }
    }
}

/// Load `path`, falling back to defaults when the file does not parse.
pub fn load_config_from(path: &Path) -> Result<Config, TranslateError> {
    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            let mut config = Config::default();
            apply_env_overrides(&mut config);
            Ok(config)
        }
    }
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    let path = get_config_path()
        .ok_or_else(|| TranslateError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    write_config_sample(&path)?;
    println!("Generated config file at: {}", path.display());
    Ok(())
}

/// Write the default configuration to `path`, creating parent directories.
pub fn write_config_sample(path: &Path) -> Result<(), TranslateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(())
}
