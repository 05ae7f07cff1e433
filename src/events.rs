/*!
 * Triggering events.
 *
 * Webhook payloads are deserialized into the small slice of fields the
 * handlers need and folded into one `Event` value per run.
 */

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::BotError;
use crate::github::RepoRef;

/// The event kinds the bot handles, by webhook name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    IssueComment,
    ReviewComment,
    Review,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequest => "pull_request",
            Self::IssueComment => "issue_comment",
            Self::ReviewComment => "pull_request_review_comment",
            Self::Review => "pull_request_review",
        }
    }

    /// Payload actions that carry new human-written text
    fn handled_actions(&self) -> &'static [&'static str] {
        match self {
            Self::PullRequest => &["opened", "edited", "reopened"],
            Self::IssueComment | Self::ReviewComment => &["created", "edited"],
            Self::Review => &["submitted", "edited"],
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, BotError> {
        match s {
            "pull_request" => Ok(Self::PullRequest),
            "issue_comment" => Ok(Self::IssueComment),
            "pull_request_review_comment" => Ok(Self::ReviewComment),
            "pull_request_review" => Ok(Self::Review),
            other => Err(BotError::UnsupportedEventKind(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct User {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Repository {
    name: String,
    owner: User,
}

impl Repository {
    fn into_ref(self) -> RepoRef {
        RepoRef::new(self.owner.login, self.name)
    }
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PullRequestRef {
    number: u64,
}

/// Issue comments, review comments and reviews share this shape
#[derive(Debug, Deserialize)]
struct Authored {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    action: String,
    pull_request: PullRequest,
    repository: Repository,
}

#[derive(Debug, Deserialize)]
struct IssueCommentPayload {
    action: String,
    comment: Authored,
    repository: Repository,
}

#[derive(Debug, Deserialize)]
struct ReviewCommentPayload {
    action: String,
    comment: Authored,
    repository: Repository,
}

#[derive(Debug, Deserialize)]
struct ReviewPayload {
    action: String,
    review: Authored,
    pull_request: PullRequestRef,
    repository: Repository,
}

/// One triggering event with the fields its handler needs.
/// Missing or null text fields become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PullRequestOpened {
        repo: RepoRef,
        action: String,
        number: u64,
        title: String,
        body: String,
    },
    IssueComment {
        repo: RepoRef,
        action: String,
        comment_id: u64,
        body: String,
    },
    ReviewComment {
        repo: RepoRef,
        action: String,
        comment_id: u64,
        body: String,
    },
    ReviewSubmission {
        repo: RepoRef,
        action: String,
        pull_number: u64,
        review_id: u64,
        body: String,
    },
}

fn parse<T: DeserializeOwned>(kind: EventKind, payload: Value) -> Result<T, BotError> {
    serde_json::from_value(payload).map_err(|e| BotError::InvalidPayload {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}

impl Event {
    /// Build the event for webhook `kind` from its raw payload
    pub fn from_payload(kind: &str, payload: Value) -> Result<Self, BotError> {
        let kind: EventKind = kind.parse()?;

        let event = match kind {
            EventKind::PullRequest => {
                let p: PullRequestPayload = parse(kind, payload)?;
                Self::PullRequestOpened {
                    repo: p.repository.into_ref(),
                    action: p.action,
                    number: p.pull_request.number,
                    title: p.pull_request.title.unwrap_or_default(),
                    body: p.pull_request.body.unwrap_or_default(),
                }
            }
            EventKind::IssueComment => {
                let p: IssueCommentPayload = parse(kind, payload)?;
                Self::IssueComment {
                    repo: p.repository.into_ref(),
                    action: p.action,
                    comment_id: p.comment.id,
                    body: p.comment.body.unwrap_or_default(),
                }
            }
            EventKind::ReviewComment => {
                let p: ReviewCommentPayload = parse(kind, payload)?;
                Self::ReviewComment {
                    repo: p.repository.into_ref(),
                    action: p.action,
                    comment_id: p.comment.id,
                    body: p.comment.body.unwrap_or_default(),
                }
            }
            EventKind::Review => {
                let p: ReviewPayload = parse(kind, payload)?;
                Self::ReviewSubmission {
                    repo: p.repository.into_ref(),
                    action: p.action,
                    pull_number: p.pull_request.number,
                    review_id: p.review.id,
                    body: p.review.body.unwrap_or_default(),
                }
            }
        };

        Ok(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::PullRequestOpened { .. } => EventKind::PullRequest,
            Self::IssueComment { .. } => EventKind::IssueComment,
            Self::ReviewComment { .. } => EventKind::ReviewComment,
            Self::ReviewSubmission { .. } => EventKind::Review,
        }
    }

    pub fn action(&self) -> &str {
        match self {
            Self::PullRequestOpened { action, .. }
            | Self::IssueComment { action, .. }
            | Self::ReviewComment { action, .. }
            | Self::ReviewSubmission { action, .. } => action,
        }
    }

    pub fn repo(&self) -> &RepoRef {
        match self {
            Self::PullRequestOpened { repo, .. }
            | Self::IssueComment { repo, .. }
            | Self::ReviewComment { repo, .. }
            | Self::ReviewSubmission { repo, .. } => repo,
        }
    }

    /// Whether the payload action adds or changes human-written text
    pub fn is_handled_action(&self) -> bool {
        let action = self.action();
        self.kind().handled_actions().iter().any(|handled| *handled == action)
    }
}
