/*!
 * Repository host collaborator.
 *
 * The `RepositoryHost` trait is the write side of the bot: one call per
 * annotated object. `client` talks to the GitHub REST API, `mock` records
 * calls for tests.
 */

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::errors::HostError;

pub mod client;
pub mod mock;

pub use self::client::GitHubClient;

/// Owner login and repository name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Fields of a pull request edit; `None` fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Write operations on the repository host
#[async_trait]
pub trait RepositoryHost: Send + Sync + Debug {
    async fn update_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<(), HostError>;

    async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError>;

    /// Edit a comment on a pull request diff
    async fn update_review_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError>;

    /// Edit the summary body of a submitted review
    async fn update_review(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        review_id: u64,
        body: &str,
    ) -> Result<(), HostError>;
}
