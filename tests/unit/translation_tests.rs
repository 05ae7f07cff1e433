/*!
 * Tests for the translator and the annotation formatter
 */

use std::sync::Arc;
use tokio_test::assert_ok;

use gh_translator::providers::mock::MockProvider;
use gh_translator::{AnnotationFormatter, LanguagePair, Translator};

fn translator(provider: &MockProvider) -> Translator {
    Translator::new(Arc::new(provider.clone()), LanguagePair::new("en", "ko"))
}

#[tokio::test]
async fn test_translate_withEitherLanguage_shouldTargetTheOther() {
    let english = MockProvider::detecting("en");
    let korean = MockProvider::detecting("ko");

    let to_korean = assert_ok!(translator(&english).translate("Hello").await);
    let to_english = assert_ok!(translator(&korean).translate("안녕하세요").await);

    assert_eq!(to_korean, "[ko] Hello");
    assert_eq!(to_english, "[en] 안녕하세요");
}

#[tokio::test]
async fn test_translate_withNoDetection_shouldTargetFirstLanguage() {
    let provider = MockProvider::undetected();

    let translated = assert_ok!(translator(&provider).translate("???").await);

    assert_eq!(translated, "[en] ???");
    assert_eq!(provider.detect_calls(), 1);
}

#[tokio::test]
async fn test_translate_withEmptyText_shouldSkipProvider() {
    let provider = MockProvider::failing();

    let translated = assert_ok!(translator(&provider).translate("").await);

    assert!(translated.is_empty());
    assert_eq!(provider.detect_calls(), 0);
}

#[test]
fn test_annotation_withFormattedBody_shouldBeRecognized() {
    let formatter = AnnotationFormatter::new("🌐");
    let body = formatter.format("Found an issue", "[ko] Found an issue", 7);

    assert!(AnnotationFormatter::already_annotated(&body, 7));
    assert!(!AnnotationFormatter::already_annotated("Found an issue", 7));
    assert_eq!(
        body,
        format!("Found an issue\n\n{}\n\n[ko] Found an issue", formatter.marker(7))
    );
}
