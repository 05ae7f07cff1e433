/*!
 * Translation provider client tests against a local mock server
 */

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

use gh_translator::errors::ProviderError;
use gh_translator::providers::Provider;
use gh_translator::providers::google::{GoogleAuth, GoogleTranslate};
use gh_translator::providers::libretranslate::LibreTranslate;

fn google_with_key(server: &MockServer) -> GoogleTranslate {
    GoogleTranslate::new(
        server.base_url(),
        "",
        GoogleAuth::ApiKey("test-key".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_google_detect_withApiKey_shouldReturnCandidates() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/language/translate/v2/detect")
                .query_param("key", "test-key")
                .json_body(json!({ "q": "Found an issue" }));
            then.status(200).json_body(json!({
                "data": { "detections": [[
                    { "language": "en", "confidence": 0.98, "isReliable": false },
                    { "language": "de", "confidence": 0.01, "isReliable": false }
                ]] }
            }));
        })
        .await;

    let languages = google_with_key(&server).detect_language("Found an issue").await.unwrap();

    mock.assert_async().await;
    assert_eq!(languages, vec!["en".to_string(), "de".to_string()]);
}

#[tokio::test]
async fn test_google_translate_withTarget_shouldReturnTranslatedText() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/language/translate/v2")
                .query_param("key", "test-key")
                .json_body(json!({ "q": "Fix bug", "target": "ko", "format": "text" }));
            then.status(200).json_body(json!({
                "data": { "translations": [
                    { "translatedText": "버그 수정", "detectedSourceLanguage": "en" }
                ] }
            }));
        })
        .await;

    let translated = google_with_key(&server).translate("Fix bug", "ko").await.unwrap();

    mock.assert_async().await;
    assert_eq!(translated, "버그 수정");
}

#[tokio::test]
async fn test_google_translate_withAccessToken_shouldSendBearerAndProject() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/language/translate/v2")
                .header("authorization", "Bearer ya29.token")
                .header("x-goog-user-project", "my-project");
            then.status(200).json_body(json!({
                "data": { "translations": [{ "translatedText": "Hello" }] }
            }));
        })
        .await;

    let provider = GoogleTranslate::new(
        server.base_url(),
        "my-project",
        GoogleAuth::AccessToken("ya29.token".to_string()),
        Duration::from_secs(5),
    )
    .unwrap();
    let translated = provider.translate("안녕하세요", "en").await.unwrap();

    mock.assert_async().await;
    assert_eq!(translated, "Hello");
}

#[tokio::test]
async fn test_google_translate_withQuotaExceeded_shouldReturnRateLimitError() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/language/translate/v2");
            then.status(429)
                .json_body(json!({ "error": { "code": 429, "message": "Quota exceeded" } }));
        })
        .await;

    let result = google_with_key(&server).translate("Fix bug", "ko").await;

    assert!(matches!(result, Err(ProviderError::RateLimitExceeded(ref m)) if m.contains("Quota")));
}

#[tokio::test]
async fn test_google_translate_withMalformedResponse_shouldReturnParseError() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/language/translate/v2");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let result = google_with_key(&server).translate("Fix bug", "ko").await;

    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}

#[tokio::test]
async fn test_libretranslate_detect_shouldReturnLanguages() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/detect")
                .json_body(json!({ "q": "좋아요" }));
            then.status(200).json_body(json!([{ "confidence": 90.0, "language": "ko" }]));
        })
        .await;

    let provider = LibreTranslate::new(server.base_url(), "", Duration::from_secs(5)).unwrap();
    let languages = provider.detect_language("좋아요").await.unwrap();

    mock.assert_async().await;
    assert_eq!(languages, vec!["ko".to_string()]);
}

#[tokio::test]
async fn test_libretranslate_translate_withApiKey_shouldSendKeyInBody() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({
                    "q": "Looks good",
                    "source": "auto",
                    "target": "ko",
                    "format": "text",
                    "api_key": "libre-key"
                }));
            then.status(200).json_body(json!({ "translatedText": "좋아 보입니다" }));
        })
        .await;

    let provider = LibreTranslate::new(server.base_url(), "libre-key", Duration::from_secs(5)).unwrap();
    let translated = provider.translate("Looks good", "ko").await.unwrap();

    mock.assert_async().await;
    assert_eq!(translated, "좋아 보입니다");
}

#[tokio::test]
async fn test_libretranslate_translate_withBadKey_shouldReturnAuthenticationError() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/translate");
            then.status(403).json_body(json!({ "error": "Invalid API key" }));
        })
        .await;

    let provider = LibreTranslate::new(server.base_url(), "wrong", Duration::from_secs(5)).unwrap();
    let result = provider.translate("Looks good", "ko").await;

    assert!(matches!(result, Err(ProviderError::AuthenticationError(_))));
}
