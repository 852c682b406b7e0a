// HTTP client utilities
use crate::domain::error::TranslateError;
use reqwest::Client;

/// Create the shared HTTP client.
///
/// No client-wide timeout is set; each provider call carries its own.
pub fn create_client() -> Result<Client, TranslateError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("transcache/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
