use crate::domain::error::TranslateError;
use crate::domain::model::{CacheKey, TranslationRequest, MAX_TEXT_CHARS, SUPPORTED_LANGS};
use serde_json::Value;

/// Check the raw `text` / `target_lang` fields of a request.
///
/// Rules run in order and the first failing one wins:
/// `text` must be a non-empty string, `target_lang` must be a non-empty
/// string, `text` must fit in [`MAX_TEXT_CHARS`] characters, and the
/// uppercased `target_lang` must be one of [`SUPPORTED_LANGS`].
pub fn validate_input(
    text: Option<&Value>,
    target_lang: Option<&Value>,
) -> Result<TranslationRequest, TranslateError> {
    let text = match text {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => {
            return Err(TranslateError::Validation(
                "The 'text' parameter is required and must be a string".to_string(),
            ))
        }
    };

    let target_lang = match target_lang {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => {
            return Err(TranslateError::Validation(
                "The 'target_lang' parameter is required and must be a string".to_string(),
            ))
        }
    };

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TranslateError::Validation(format!(
            "Text must not exceed {} characters",
            MAX_TEXT_CHARS
        )));
    }

    if !is_supported_lang(target_lang) {
        return Err(TranslateError::Validation(format!(
            "Unsupported target language. Valid languages: {}",
            SUPPORTED_LANGS.join(", ")
        )));
    }

    Ok(TranslationRequest {
        text: text.clone(),
        target_lang: target_lang.clone(),
    })
}

/// Case-insensitive membership test against [`SUPPORTED_LANGS`].
pub fn is_supported_lang(target_lang: &str) -> bool {
    let upper = target_lang.to_uppercase();
    SUPPORTED_LANGS.contains(&upper.as_str())
}

/// Derive the cache key for a request.
///
/// Only the language code is normalized; `text` is used verbatim, so case or
/// whitespace variants of the same text are separate entries.
pub fn cache_key(text: &str, target_lang: &str) -> CacheKey {
    CacheKey::new(text, target_lang)
}
