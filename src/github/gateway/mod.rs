//! Gateway for the GitHub operations the HTTP façade forwards to.
//!
//! The trait keeps handlers independent of Octocrab so tests can substitute a
//! mock, while [`OctocrabGateway`] performs the real HTTP requests.

mod client;
mod error_mapping;
mod remote;

pub use remote::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::GatewayError;
use crate::github::locator::{RepositoryLocator, RepositoryOwner};
use crate::github::models::{
    CommitComment, CreatedComment, GitHubUser, PullRequestReviewComment, RepositorySummary,
};

/// Remote source-control operations used by the request handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceControlGateway: Send + Sync {
    /// List the repositories owned by `owner`.
    ///
    /// Only the first results page is requested.
    async fn list_repositories(
        &self,
        owner: &RepositoryOwner,
    ) -> Result<Vec<RepositorySummary>, GatewayError>;

    /// Resolve the account behind `login`.
    async fn user(&self, login: &RepositoryOwner) -> Result<GitHubUser, GatewayError>;

    /// Attach a comment to a commit in the given repository.
    async fn create_commit_comment(
        &self,
        locator: &RepositoryLocator,
        comment: &CommitComment,
    ) -> Result<CreatedComment, GatewayError>;

    /// Attach a review comment to a pull request diff.
    async fn create_pull_request_comment(
        &self,
        comment: &PullRequestReviewComment,
    ) -> Result<CreatedComment, GatewayError>;
}
