/*!
 * Error types for the gh-translator application.
 *
 * This module contains custom error types for the two external collaborators
 * (translation providers and the repository host) and the top-level error
 * reported when a triggering event fails, using the thiserror crate for
 * ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with translation provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to quota or rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Map a non-success HTTP status to the matching provider error
    pub fn from_status(status_code: u16, message: String) -> Self {
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::ApiError { status_code, message },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors that can occur when writing back to the repository host
#[derive(Error, Debug)]
pub enum HostError {
    /// Error when the request could not be sent
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}

impl From<reqwest::Error> for HostError {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(error.to_string())
    }
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider answered but returned nothing usable
    #[error("Provider returned an empty translation into '{target_language}'")]
    EmptyTranslation {
        /// Language the text was being translated into
        target_language: String,
    },
}

/// Failure of a single event dispatch
#[derive(Error, Debug)]
pub enum BotError {
    /// The trigger is not one of the handled event kinds
    #[error("Unsupported trigger event: {0}")]
    UnsupportedEventKind(String),

    /// The trigger payload does not have the expected shape
    #[error("Invalid '{kind}' payload: {message}")]
    InvalidPayload {
        /// Event kind the payload was parsed as
        kind: String,
        /// Deserialization failure
        message: String,
    },

    /// Detection or translation failed
    #[error("Translation failed: {0}")]
    TranslationFailure(#[from] TranslationError),

    /// The write back to the repository host failed
    #[error("Update failed: {0}")]
    UpdateFailure(#[from] HostError),
}
