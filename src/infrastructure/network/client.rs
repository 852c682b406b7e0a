use crate::domain::error::TranslateError;
use crate::domain::model::TranslationRecord;
use crate::domain::traits::TranslationProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// DeepL API Response structures
#[derive(Deserialize, Debug)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize, Debug)]
struct DeepLTranslation {
    detected_source_language: String,
    text: String,
}

/// DeepL translator. One attempt per call, bounded by `timeout`.
pub struct DeepLTranslator {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl DeepLTranslator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationProvider for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        credential: &str,
    ) -> Result<TranslationRecord, TranslateError> {
        let target_lang = target_lang.to_uppercase();
        let params = [
            ("text", text),
            ("target_lang", target_lang.as_str()),
            ("auth_key", credential),
        ];

        tracing::debug!(endpoint = %self.endpoint, target_lang = %target_lang, "calling DeepL");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_request_error)?
            .error_for_status()
            .map_err(map_request_error)?
            .json::<DeepLResponse>()
            .await
            .map_err(map_request_error)?;

        let first = response
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Provider("empty translations list".to_string()))?;

        Ok(TranslationRecord {
            source_lang: first.detected_source_language,
            original_text: text.to_string(),
            target_lang,
            translated_text: first.text,
        })
    }
}

fn map_request_error(e: reqwest::Error) -> TranslateError {
    if e.is_timeout() {
        TranslateError::ProviderTimeout
    } else {
        TranslateError::Provider(e.to_string())
    }
}
