/*!
 * Tests for error types and conversions
 */

use gh_translator::errors::{BotError, HostError, ProviderError, TranslationError};

#[test]
fn test_providerError_fromStatus_shouldClassifyByStatusCode() {
    assert!(matches!(
        ProviderError::from_status(401, "bad key".to_string()),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(403, "forbidden".to_string()),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(429, "quota".to_string()),
        ProviderError::RateLimitExceeded(_)
    ));
    assert!(matches!(
        ProviderError::from_status(400, "Bad language pair".to_string()),
        ProviderError::ApiError { status_code: 400, .. }
    ));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 500,
        message: "Backend error".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("500"));
    assert!(display.contains("Backend error"));
}

#[test]
fn test_translationError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::RateLimitExceeded("Daily limit".to_string());
    let translation_error: TranslationError = provider_error.into();
    let display = format!("{}", translation_error);
    assert!(display.contains("Provider error"));
    assert!(display.contains("Daily limit"));
}

#[test]
fn test_botError_fromTranslationError_shouldBeTranslationFailure() {
    let error: BotError = TranslationError::EmptyTranslation {
        target_language: "ko".to_string(),
    }
    .into();
    assert!(matches!(error, BotError::TranslationFailure(_)));
    assert!(error.to_string().starts_with("Translation failed"));
}

#[test]
fn test_botError_fromHostError_shouldBeUpdateFailure() {
    let error: BotError = HostError::ApiError {
        status_code: 403,
        message: "Resource not accessible by integration".to_string(),
    }
    .into();
    assert!(matches!(error, BotError::UpdateFailure(_)));
    let display = error.to_string();
    assert!(display.contains("403"));
    assert!(display.contains("Resource not accessible"));
}

#[test]
fn test_botError_unsupportedEventKind_shouldNameTheEvent() {
    let error = BotError::UnsupportedEventKind("push".to_string());
    assert_eq!(error.to_string(), "Unsupported trigger event: push");
}
