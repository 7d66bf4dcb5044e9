//! Data models exchanged with the GitHub API.
//!
//! Types prefixed with `Api` are internal (de)serialisation targets; they
//! convert into, or are built from, the public domain types.

use serde::{Deserialize, Serialize};

use super::locator::{
    CommitSha, PullRequestNumber, RepositoryLocator, RepositoryName, RepositoryOwner,
};

/// GitHub account resolved from a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubUser {
    /// Account login.
    pub login: String,
    /// Numeric account identifier.
    pub id: u64,
}

/// Repository entry returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository identifier.
    pub id: u64,
    /// Short repository name.
    pub name: String,
    /// `owner/name` form, when GitHub provides it.
    pub full_name: Option<String>,
}

/// Outbound comment attached to a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitComment {
    /// Commit the comment is attached to.
    pub commit: CommitSha,
    /// Account the comment is attributed to.
    pub author: GitHubUser,
    /// Comment body.
    pub body: String,
    /// Line index in the commit diff.
    pub position: u64,
}

/// Outbound review comment attached to a file position in a pull request diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestReviewComment {
    /// Owner of the repository holding the pull request.
    pub owner: RepositoryOwner,
    /// Repository holding the pull request, when the request named one.
    pub repository: Option<RepositoryName>,
    /// Pull request number.
    pub number: PullRequestNumber,
    /// Commit the comment refers to.
    pub commit: CommitSha,
    /// File path relative to the repository root.
    pub path: String,
    /// Line index in the file diff.
    pub position: u64,
    /// Comment body.
    pub body: String,
    /// Account the comment is attributed to.
    pub author: GitHubUser,
}

impl PullRequestReviewComment {
    /// Locator for the destination repository, if one was named.
    #[must_use]
    pub fn locator(&self) -> Option<RepositoryLocator> {
        self.repository
            .clone()
            .map(|repository| RepositoryLocator::new(self.owner.clone(), repository))
    }
}

/// Comment as acknowledged by GitHub after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedComment {
    /// Comment identifier.
    pub id: u64,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: String,
    pub(super) id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCreatedComment {
    pub(super) id: u64,
    pub(super) html_url: Option<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/commits/{sha}/comments`.
#[derive(Debug, Serialize)]
pub(super) struct ApiCommitCommentRequest<'comment> {
    pub(super) body: &'comment str,
    pub(super) position: u64,
}

/// Request body for `POST /repos/{owner}/{repo}/pulls/{number}/comments`.
#[derive(Debug, Serialize)]
pub(super) struct ApiReviewCommentRequest<'comment> {
    pub(super) body: &'comment str,
    pub(super) commit_id: &'comment str,
    pub(super) path: &'comment str,
    pub(super) position: u64,
}

impl From<ApiUser> for GitHubUser {
    fn from(value: ApiUser) -> Self {
        Self {
            login: value.login,
            id: value.id,
        }
    }
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
        }
    }
}

impl From<ApiCreatedComment> for CreatedComment {
    fn from(value: ApiCreatedComment) -> Self {
        Self {
            id: value.id,
            html_url: value.html_url,
        }
    }
}

impl<'comment> From<&'comment CommitComment> for ApiCommitCommentRequest<'comment> {
    fn from(value: &'comment CommitComment) -> Self {
        Self {
            body: value.body.as_str(),
            position: value.position,
        }
    }
}

impl<'comment> From<&'comment PullRequestReviewComment> for ApiReviewCommentRequest<'comment> {
    fn from(value: &'comment PullRequestReviewComment) -> Self {
        Self {
            body: value.body.as_str(),
            commit_id: value.commit.as_str(),
            path: value.path.as_str(),
            position: value.position,
        }
    }
}
