/*!
 * Event router: picks the handler for a triggering event.
 */

use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::BotError;
use crate::events::Event;
use crate::github::RepositoryHost;
use crate::handlers::{DispatchOutcome, EventHandlers};
use crate::translation::{AnnotationFormatter, Translator};

/// Routes each event to its handler
#[derive(Debug, Clone)]
pub struct EventRouter {
    handlers: EventHandlers,
}

impl EventRouter {
    pub fn new(
        host: Arc<dyn RepositoryHost>,
        translator: Translator,
        formatter: AnnotationFormatter,
    ) -> Self {
        Self {
            handlers: EventHandlers::new(host, translator, formatter),
        }
    }

    /// Parse the payload of webhook `kind` and run its handler.
    ///
    /// Fails with `UnsupportedEventKind` before any collaborator is called
    /// when `kind` is not one of the four handled kinds.
    pub async fn dispatch(&self, kind: &str, payload: Value) -> Result<DispatchOutcome, BotError> {
        let event = Event::from_payload(kind, payload)?;
        self.route(&event).await
    }

    pub async fn route(&self, event: &Event) -> Result<DispatchOutcome, BotError> {
        if !event.is_handled_action() {
            info!(
                "Ignoring '{}' event with action '{}'",
                event.kind(),
                event.action()
            );
            return Ok(DispatchOutcome::Skipped);
        }
        debug!("Handling '{}' ({}) in {}", event.kind(), event.action(), event.repo());

        match event {
            Event::PullRequestOpened { repo, number, title, body, .. } => {
                self.handlers.pull_request_opened(repo, *number, title, body).await
            }
            Event::IssueComment { repo, comment_id, body, .. } => {
                self.handlers.issue_comment(repo, *comment_id, body).await
            }
            Event::ReviewComment { repo, comment_id, body, .. } => {
                self.handlers.review_comment(repo, *comment_id, body).await
            }
            Event::ReviewSubmission { repo, pull_number, review_id, body, .. } => {
                self.handlers.review_submission(repo, *pull_number, *review_id, body).await
            }
        }
    }
}
