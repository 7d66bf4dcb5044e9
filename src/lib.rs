//! Octofacade library crate: a small HTTP façade over the GitHub API.
//!
//! The façade exposes three routes. One counts an owner's repositories, one
//! attaches a comment to a commit, and one attaches a review comment to a
//! pull request. GitHub access goes through Octocrab behind the
//! [`SourceControlGateway`] trait so handlers can be exercised without a
//! network.

pub mod config;
pub mod github;
pub mod server;
pub mod telemetry;

pub use config::OctofacadeConfig;
pub use github::{
    GatewayError, OctocrabGateway, PersonalAccessToken, RepositoryOwner, SourceControlGateway,
};
pub use server::{AppState, ApiError, router, serve};
pub use telemetry::{LogFormat, init_tracing};
