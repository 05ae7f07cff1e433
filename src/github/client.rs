use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, RequestBuilder, header};
use serde_json::json;
use std::time::Duration;

use crate::errors::HostError;
use super::{PullRequestUpdate, RepoRef, RepositoryHost};

const USER_AGENT: &str = concat!("gh-translator/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// GitHub REST API client for the four edit endpoints
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// HTTP client carrying the auth and API headers
    client: Client,
    /// API base URL without trailing slash
    api_url: String,
}

impl GitHubClient {
    /// Create a new client authenticated with `token`
    pub fn new(api_url: impl Into<String>, token: &str, timeout: Duration) -> Result<Self, HostError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", header::HeaderValue::from_static(API_VERSION));
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|e| HostError::RequestFailed(format!("invalid authorization header: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn repo_url(&self, repo: &RepoRef, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, repo.owner, repo.name, path)
    }

    async fn execute(&self, action: &str, request: RequestBuilder) -> Result<(), HostError> {
        debug!("GitHub API: {}", action);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("GitHub API error during {} ({}): {}", action, status, error_text);
            return Err(HostError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn update_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<(), HostError> {
        let request = self.client
            .patch(self.repo_url(repo, &format!("pulls/{}", number)))
            .json(update);
        self.execute("update pull request", request).await
    }

    async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let request = self.client
            .patch(self.repo_url(repo, &format!("issues/comments/{}", comment_id)))
            .json(&json!({ "body": body }));
        self.execute("update issue comment", request).await
    }

    async fn update_review_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let request = self.client
            .patch(self.repo_url(repo, &format!("pulls/comments/{}", comment_id)))
            .json(&json!({ "body": body }));
        self.execute("update review comment", request).await
    }

    async fn update_review(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        review_id: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let request = self.client
            .put(self.repo_url(repo, &format!("pulls/{}/reviews/{}", pull_number, review_id)))
            .json(&json!({ "body": body }));
        self.execute("update review", request).await
    }
}
