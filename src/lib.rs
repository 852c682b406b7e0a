//! Cache-first translation request handling.
//!
//! An invocation event is validated, looked up in the translation cache and,
//! on a miss, sent to DeepL; the result is cached and returned inside a
//! uniform response envelope.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use application::handler::{handle_event, handle_request};
pub use domain::error::TranslateError;
pub use domain::model::{CacheKey, ResponseBody, ResponseEnvelope, TranslationRecord};
pub use state::AppState;
