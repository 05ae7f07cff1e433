/*!
 * Controller lifecycle tests: event file loading, wiring and one full run
 */

use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

use gh_translator::app_config::{Config, ConfigOverrides, ForeignLanguagePolicy};
use gh_translator::github::mock::{HostCall, RecordingHost};
use gh_translator::providers::mock::MockProvider;
use gh_translator::{Controller, DispatchOutcome, Trigger};

use crate::common;

fn config() -> Config {
    let mut config = Config::default();
    config.apply_overrides(&ConfigOverrides {
        repo_token: Some("ghs_token".to_string()),
        api_key: Some("google-key".to_string()),
        translation_emoji: Some("🇰🇷".to_string()),
        ..Default::default()
    });
    config
}

#[tokio::test]
async fn test_run_withEventFile_shouldAnnotateComment() {
    common::init_logging();
    let dir = TempDir::new().unwrap();
    let event_path = dir.path().join("event.json");
    fs::write(
        &event_path,
        common::comment_payload("created", 42, Some("Hello")).to_string(),
    )
    .unwrap();

    let host = RecordingHost::new();
    let controller = Controller::with_collaborators(
        config(),
        Arc::new(MockProvider::detecting("en")),
        Arc::new(host.clone()),
    );
    let trigger = Trigger::load("issue_comment", &event_path).unwrap();

    let outcome = controller.run(trigger).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Updated);
    match host.calls().as_slice() {
        [HostCall::UpdateIssueComment { comment_id, body, .. }] => {
            assert_eq!(*comment_id, 42);
            assert!(body.contains("<!-- gh-translator:42 -->🇰🇷 *Translation*"));
            assert!(body.ends_with("[ko] Hello"));
        }
        calls => panic!("unexpected host calls: {:?}", calls),
    }
}

#[tokio::test]
async fn test_run_withForeignLanguageAndSkipPolicy_shouldLeaveCommentAlone() {
    let mut config = config();
    config.foreign_language_policy = ForeignLanguagePolicy::Skip;
    let provider = MockProvider::detecting("fr");
    let host = RecordingHost::new();
    let controller = Controller::with_collaborators(
        config,
        Arc::new(provider.clone()),
        Arc::new(host.clone()),
    );

    let outcome = controller
        .run(Trigger::new("issue_comment", common::comment_payload("created", 1, Some("Bonjour"))))
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Unchanged);
    assert_eq!(provider.translate_calls(), 0);
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_run_withForeignLanguage_shouldTranslateToFirstLanguage() {
    let provider = MockProvider::detecting("fr");
    let controller = Controller::with_collaborators(
        config(),
        Arc::new(provider.clone()),
        Arc::new(RecordingHost::new()),
    );

    controller
        .run(Trigger::new("issue_comment", common::comment_payload("created", 1, Some("Bonjour"))))
        .await
        .unwrap();

    assert_eq!(provider.targets(), vec!["en".to_string()]);
}

#[tokio::test]
async fn test_run_withUnsupportedEvent_shouldReturnError() {
    let controller = Controller::with_collaborators(
        config(),
        Arc::new(MockProvider::detecting("en")),
        Arc::new(RecordingHost::new()),
    );

    let err = controller
        .run(Trigger::new("push", json!({ "ref": "refs/heads/main" })))
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("Unsupported trigger event: push"));
}

#[test]
fn test_trigger_load_withMissingFile_shouldFail() {
    let dir = TempDir::new().unwrap();
    let result = Trigger::load("issue_comment", &dir.path().join("missing.json"));
    assert!(result.is_err());
}

#[test]
fn test_with_config_withMissingToken_shouldFailValidation() {
    let mut config = config();
    config.github.token.clear();

    let err = Controller::with_config(config).err().unwrap();

    assert!(err.to_string().contains("validation"));
}

#[test]
fn test_with_config_withValidConfig_shouldBuildClients() {
    let controller = Controller::with_config(config()).unwrap();
    assert_eq!(controller.config().translation_emoji, "🇰🇷");
}
