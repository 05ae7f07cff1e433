/*!
 * Event handlers.
 *
 * Each handler reads the text of one object, translates it, appends the
 * translation under its marker and writes the result back with a single
 * host call. Text that is empty or already carries its marker is left alone
 * and no call is made.
 */

use log::{debug, info};
use std::sync::Arc;

use crate::errors::BotError;
use crate::github::{PullRequestUpdate, RepoRef, RepositoryHost};
use crate::translation::{AnnotationFormatter, Translator};

/// What a dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// One write was issued to the host
    Updated,
    /// Nothing to translate, or already annotated; no write issued
    Unchanged,
    /// The event action is not one the bot reacts to
    Skipped,
}

/// The four handlers and the collaborators they share
#[derive(Debug, Clone)]
pub struct EventHandlers {
    host: Arc<dyn RepositoryHost>,
    translator: Translator,
    formatter: AnnotationFormatter,
}

impl EventHandlers {
    pub fn new(
        host: Arc<dyn RepositoryHost>,
        translator: Translator,
        formatter: AnnotationFormatter,
    ) -> Self {
        Self { host, translator, formatter }
    }

    /// New body for object `id`, or `None` when it should stay as it is
    async fn annotated_body(&self, body: &str, id: u64) -> Result<Option<String>, BotError> {
        if body.trim().is_empty() {
            return Ok(None);
        }
        if AnnotationFormatter::already_annotated(body, id) {
            debug!("Body of {} already carries its translation", id);
            return Ok(None);
        }

        let translated = self.translator.translate(body).await?;
        if translated.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.formatter.format(body, &translated, id)))
    }

    /// New title, or `None` when it should stay as it is
    async fn annotated_title(&self, title: &str) -> Result<Option<String>, BotError> {
        if title.trim().is_empty() || AnnotationFormatter::title_already_annotated(title) {
            return Ok(None);
        }

        let translated = self.translator.translate(title).await?;
        if translated.is_empty() {
            return Ok(None);
        }

        Ok(Some(AnnotationFormatter::format_title(title, &translated)))
    }

    /// Translate the title and description of a pull request
    pub async fn pull_request_opened(
        &self,
        repo: &RepoRef,
        number: u64,
        title: &str,
        body: &str,
    ) -> Result<DispatchOutcome, BotError> {
        let (new_title, new_body) = futures::try_join!(
            self.annotated_title(title),
            self.annotated_body(body, number)
        )?;

        if new_title.is_none() && new_body.is_none() {
            info!("Pull request {}#{} needs no translation", repo, number);
            return Ok(DispatchOutcome::Unchanged);
        }

        let title = new_title.unwrap_or_else(|| title.to_string());
        let update = PullRequestUpdate {
            title: (!title.is_empty()).then_some(title),
            body: new_body.or_else(|| (!body.is_empty()).then(|| body.to_string())),
        };
        self.host.update_pull_request(repo, number, &update).await?;

        info!("Translated pull request {}#{}", repo, number);
        Ok(DispatchOutcome::Updated)
    }

    pub async fn issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<DispatchOutcome, BotError> {
        let Some(new_body) = self.annotated_body(body, comment_id).await? else {
            return Ok(DispatchOutcome::Unchanged);
        };

        self.host.update_issue_comment(repo, comment_id, &new_body).await?;

        info!("Translated issue comment {} in {}", comment_id, repo);
        Ok(DispatchOutcome::Updated)
    }

    pub async fn review_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<DispatchOutcome, BotError> {
        let Some(new_body) = self.annotated_body(body, comment_id).await? else {
            return Ok(DispatchOutcome::Unchanged);
        };

        self.host.update_review_comment(repo, comment_id, &new_body).await?;

        info!("Translated review comment {} in {}", comment_id, repo);
        Ok(DispatchOutcome::Updated)
    }

    pub async fn review_submission(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        review_id: u64,
        body: &str,
    ) -> Result<DispatchOutcome, BotError> {
        let Some(new_body) = self.annotated_body(body, review_id).await? else {
            return Ok(DispatchOutcome::Unchanged);
        };

        self.host.update_review(repo, pull_number, review_id, &new_body).await?;

        info!("Translated review {} on {}#{}", review_id, repo, pull_number);
        Ok(DispatchOutcome::Updated)
    }
}
