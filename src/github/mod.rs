//! GitHub access for the HTTP façade.
//!
//! This module wraps Octocrab behind the [`SourceControlGateway`] trait,
//! provides typed wrappers for the values taken from request paths, and maps
//! Octocrab failures into [`GatewayError`] so handlers never see Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::GatewayError;
pub use gateway::{OctocrabGateway, SourceControlGateway};
pub use locator::{
    CommitSha, PersonalAccessToken, PullRequestNumber, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::{
    CommitComment, CreatedComment, GitHubUser, PullRequestReviewComment, RepositorySummary,
};

#[cfg(test)]
pub use gateway::MockSourceControlGateway;
