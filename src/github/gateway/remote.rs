//! Octocrab implementation of the source-control gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::GatewayError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator, RepositoryOwner};
use crate::github::models::{
    ApiCommitCommentRequest, ApiCreatedComment, ApiRepository, ApiReviewCommentRequest, ApiUser,
    CommitComment, CreatedComment, GitHubUser, PullRequestReviewComment, RepositorySummary,
};
use crate::github::rate_limit::RateLimitInfo;

use super::SourceControlGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};

/// Octocrab-backed gateway.
///
/// Built once at startup and shared read-only by every request handler.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base URL.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
    /// `GatewayError::ClientConstruction` when Octocrab fails to construct a
    /// client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, GatewayError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    /// Maps an Octocrab error to a [`GatewayError`], enriching rate limit
    /// failures with the quota reset time when GitHub reports it.
    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> GatewayError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!("{base_message} ({info})"),
                    None => base_message,
                };

                GatewayError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl SourceControlGateway for OctocrabGateway {
    async fn list_repositories(
        &self,
        owner: &RepositoryOwner,
    ) -> Result<Vec<RepositorySummary>, GatewayError> {
        match self
            .client
            .get::<Vec<ApiRepository>, _, _>(owner.repositories_path(), None::<&()>)
            .await
        {
            Ok(repositories) => Ok(repositories.into_iter().map(Into::into).collect()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("list repositories", &error)
                .await),
        }
    }

    async fn user(&self, login: &RepositoryOwner) -> Result<GitHubUser, GatewayError> {
        match self
            .client
            .get::<ApiUser, _, _>(login.user_path(), None::<&()>)
            .await
        {
            Ok(user) => Ok(user.into()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("user lookup", &error)
                .await),
        }
    }

    async fn create_commit_comment(
        &self,
        locator: &RepositoryLocator,
        comment: &CommitComment,
    ) -> Result<CreatedComment, GatewayError> {
        let request = ApiCommitCommentRequest::from(comment);
        let response: Result<ApiCreatedComment, octocrab::Error> = self
            .client
            .post(locator.commit_comments_path(&comment.commit), Some(&request))
            .await;

        match response {
            Ok(created) => Ok(created.into()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("create commit comment", &error)
                .await),
        }
    }

    async fn create_pull_request_comment(
        &self,
        comment: &PullRequestReviewComment,
    ) -> Result<CreatedComment, GatewayError> {
        let locator = comment.locator().ok_or(GatewayError::MissingRepository)?;
        let request = ApiReviewCommentRequest::from(comment);
        let response: Result<ApiCreatedComment, octocrab::Error> = self
            .client
            .post(locator.review_comments_path(comment.number), Some(&request))
            .await;

        match response {
            Ok(created) => Ok(created.into()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("create pull request comment", &error)
                .await),
        }
    }
}
