/*!
 * Common test utilities for the gh-translator test suite
 */

use serde_json::{Value, json};
use std::sync::Arc;

use gh_translator::github::mock::RecordingHost;
use gh_translator::providers::mock::MockProvider;
use gh_translator::{AnnotationFormatter, EventRouter, LanguagePair, Translator};

/// Route test logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A router over a mock provider and a recording host, translating en <-> ko
pub fn router_with(provider: MockProvider, host: RecordingHost) -> EventRouter {
    init_logging();
    let translator = Translator::new(Arc::new(provider), LanguagePair::new("en", "ko"));
    EventRouter::new(Arc::new(host), translator, AnnotationFormatter::new("🌐"))
}

pub fn repository() -> Value {
    json!({ "name": "repo", "owner": { "login": "octo" } })
}

pub fn pull_request_payload(action: &str, number: u64, title: &str, body: Option<&str>) -> Value {
    json!({
        "action": action,
        "number": number,
        "pull_request": { "number": number, "title": title, "body": body, "state": "open" },
        "repository": repository(),
    })
}

pub fn comment_payload(action: &str, id: u64, body: Option<&str>) -> Value {
    json!({
        "action": action,
        "comment": { "id": id, "body": body, "user": { "login": "someone" } },
        "issue": { "number": 1, "title": "Issue" },
        "repository": repository(),
    })
}

pub fn review_payload(action: &str, pull_number: u64, review_id: u64, body: Option<&str>) -> Value {
    json!({
        "action": action,
        "review": { "id": review_id, "body": body, "state": "commented" },
        "pull_request": { "number": pull_number, "title": "PR" },
        "repository": repository(),
    })
}
