//! Error types exposed by the GitHub gateway layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while building the client or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The authentication token was missing or blank.
    #[error("access token invalid")]
    InvalidToken,

    /// The API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// A path segment was empty where a value is required.
    #[error("{field} must not be empty")]
    EmptySegment {
        /// Name of the segment that was blank.
        field: &'static str,
    },

    /// The pull request number is not a positive integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// Octocrab refused to build a client.
    #[error("error creating GitHub client: {message}")]
    ClientConstruction {
        /// Builder failure detail.
        message: String,
    },

    /// A comment submission named no repository.
    #[error("repository is required to create a pull request comment")]
    MissingRepository,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    ///
    /// Displays the bare message so error envelopes carry GitHub's own text.
    #[error("{message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403 or 429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The listener could not be bound or the server stopped with an I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Details about the I/O failure.
        message: String,
    },
}
