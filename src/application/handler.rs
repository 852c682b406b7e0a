use crate::application::validate::{cache_key, validate_input};
use crate::domain::error::TranslateError;
use crate::domain::model::{CacheKey, ResponseEnvelope, TranslationRecord, TranslationRequest};
use crate::state::AppState;
use serde_json::{Map, Value};
use tracing::Instrument;
use uuid::Uuid;

/// Handle one invocation event and always produce a response envelope.
pub async fn handle_event(state: &AppState, event: &Value) -> ResponseEnvelope {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("invocation", %request_id);

    async {
        tracing::debug!(event = %event, "event received");

        let payload = match parse_event(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("{}", e);
                return ResponseEnvelope::from_error(&e);
            }
        };

        let request = match validate_input(payload.get("text"), payload.get("target_lang")) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("validation failed: {}", e);
                return ResponseEnvelope::from_error(&e);
            }
        };

        handle_request(state, &request).await
    }
    .instrument(span)
    .await
}

/// Run the cache-then-provider flow for an already validated request.
pub async fn handle_request(state: &AppState, request: &TranslationRequest) -> ResponseEnvelope {
    let key = cache_key(&request.text, &request.target_lang);

    if let Some(record) = state.cache.get(&key).await {
        return ResponseEnvelope::success(record, true);
    }

    match translate_and_store(state, request, &key).await {
        Ok(record) => ResponseEnvelope::success(record, false),
        Err(e) => {
            tracing::error!(cache_key = %key, "translation failed: {}", e);
            ResponseEnvelope::from_error(&e)
        }
    }
}

async fn translate_and_store(
    state: &AppState,
    request: &TranslationRequest,
    key: &CacheKey,
) -> Result<TranslationRecord, TranslateError> {
    let credential = state.credentials.get().await?;
    let record = state
        .provider
        .translate(&request.text, &request.target_lang, credential)
        .await?;

    // Outcome ignored: the translation is returned either way
    state.cache.put(key, &record).await;

    Ok(record)
}

/// Extract the request payload from a transport event.
///
/// A `body` string is decoded as JSON, a `body` object is used as is, and an
/// event without `body` is itself the payload.
pub fn parse_event(event: &Value) -> Result<Map<String, Value>, TranslateError> {
    let payload = match event.get("body") {
        Some(Value::String(raw)) => {
            serde_json::from_str::<Value>(raw).map_err(|_| TranslateError::PayloadParse)?
        }
        Some(body) => body.clone(),
        None => event.clone(),
    };

    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(TranslateError::PayloadParse),
    }
}
