/*!
 * Recording repository host for tests.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::errors::HostError;
use super::{PullRequestUpdate, RepoRef, RepositoryHost};

/// A write the bot asked the host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    UpdatePullRequest { repo: RepoRef, number: u64, update: PullRequestUpdate },
    UpdateIssueComment { repo: RepoRef, comment_id: u64, body: String },
    UpdateReviewComment { repo: RepoRef, comment_id: u64, body: String },
    UpdateReview { repo: RepoRef, pull_number: u64, review_id: u64, body: String },
}

/// Host that records every call; clones share the record
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
    fail_with_status: Option<u16>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that records calls and then rejects them with `status_code`
    pub fn failing(status_code: u16) -> Self {
        Self {
            fail_with_status: Some(status_code),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: HostCall) -> Result<(), HostError> {
        self.calls.lock().push(call);
        match self.fail_with_status {
            Some(status_code) => Err(HostError::ApiError {
                status_code,
                message: "Simulated host failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RepositoryHost for RecordingHost {
    async fn update_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<(), HostError> {
        self.record(HostCall::UpdatePullRequest {
            repo: repo.clone(),
            number,
            update: update.clone(),
        })
    }

    async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        self.record(HostCall::UpdateIssueComment {
            repo: repo.clone(),
            comment_id,
            body: body.to_string(),
        })
    }

    async fn update_review_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        self.record(HostCall::UpdateReviewComment {
            repo: repo.clone(),
            comment_id,
            body: body.to_string(),
        })
    }

    async fn update_review(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        review_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        self.record(HostCall::UpdateReview {
            repo: repo.clone(),
            pull_number,
            review_id,
            body: body.to_string(),
        })
    }
}
