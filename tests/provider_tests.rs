//! DeepL client against a mock server.

use std::time::Duration;
use transcache::domain::error::TranslateError;
use transcache::domain::traits::TranslationProvider;
use transcache::infrastructure::network::client::DeepLTranslator;
use transcache::infrastructure::network::http::create_client;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn translator(server: &MockServer) -> DeepLTranslator {
    DeepLTranslator::new(create_client().unwrap())
        .with_endpoint(format!("{}/v2/translate", server.uri()))
}

#[tokio::test]
async fn test_translate_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .and(body_string_contains("text=Hello"))
        .and(body_string_contains("target_lang=FR"))
        .and(body_string_contains("auth_key=test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translations": [
                {"detected_source_language": "EN", "text": "Bonjour"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = translator(&server)
        .translate("Hello", "fr", "test-key")
        .await
        .expect("translation should succeed");

    assert_eq!(record.source_lang, "EN");
    assert_eq!(record.original_text, "Hello");
    assert_eq!(record.target_lang, "FR");
    assert_eq!(record.translated_text, "Bonjour");
}

#[tokio::test]
async fn test_translate_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"translations": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = translator(&server)
        .with_timeout(Duration::from_millis(50))
        .translate("Hello", "fr", "test-key")
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::ProviderTimeout), "{:?}", err);
}

#[tokio::test]
async fn test_translate_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate("Hello", "fr", "bad-key")
        .await
        .unwrap_err();

    match err {
        TranslateError::Provider(msg) => assert!(msg.contains("403"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_translate_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
        )
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate("Hello", "fr", "key")
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::Provider(_)), "{:?}", err);
}

#[tokio::test]
async fn test_translate_empty_translations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"translations": []})),
        )
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate("Hello", "fr", "key")
        .await
        .unwrap_err();

    match err {
        TranslateError::Provider(msg) => assert!(msg.contains("empty")),
        other => panic!("unexpected error: {:?}", other),
    }
}
