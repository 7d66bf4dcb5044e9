//! HTTP surface of the façade.
//!
//! [`router`] wires the three routes to their handlers over a shared
//! [`AppState`]. Handlers report failures through [`ApiError`], which writes
//! the `{"error": "..."}` envelope.

mod error;
mod handlers;
mod path;

pub use error::{ApiError, ErrorEnvelope, JSON_CONTENT_TYPE, json_response};
pub use path::PullCommentPath;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::github::gateway::SourceControlGateway;
use crate::github::locator::RepositoryOwner;

/// Fixed port the service listens on.
pub const PORT: u16 = 5000;

/// Identity that created comments are attributed to.
///
/// Requests carry no caller identity, so the owner named in the path doubles
/// as the comment author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentAuthor {
    /// The `{owner}` path segment is the commenting user.
    #[default]
    PathOwner,
}

impl CommentAuthor {
    /// Login to resolve as the comment author for a request on `owner`.
    #[must_use]
    pub const fn login(self, owner: &RepositoryOwner) -> &RepositoryOwner {
        match self {
            Self::PathOwner => owner,
        }
    }
}

/// State shared by every handler; built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn SourceControlGateway>,
    comment_author: CommentAuthor,
}

impl AppState {
    /// Wraps the gateway used by all handlers.
    #[must_use]
    pub fn new(gateway: Arc<dyn SourceControlGateway>) -> Self {
        Self {
            gateway,
            comment_author: CommentAuthor::default(),
        }
    }

    /// Gateway to GitHub.
    #[must_use]
    pub fn gateway(&self) -> &dyn SourceControlGateway {
        self.gateway.as_ref()
    }

    /// Commenting identity policy.
    #[must_use]
    pub const fn comment_author(&self) -> CommentAuthor {
        self.comment_author
    }
}

/// Builds the request router.
///
/// Unknown paths fall through to axum's default 404; a known path with the
/// wrong method gets 405. The pull request comment route catches every path
/// under its prefix, so a wrong method there answers 405 only when the path
/// itself is well formed, and 404 otherwise.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{owner}/repos/count", get(handlers::repository_count))
        .route(
            "/{owner}/repos/{repo}/{commit}/comment",
            post(handlers::commit_comment),
        )
        .route(
            "/{owner}/pulls/{number}/{commit}/{*target}",
            post(handlers::pull_comment).fallback(handlers::pull_comment_wrong_method),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `app` on all interfaces at [`PORT`] until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error when the port cannot be bound or the server fails.
pub async fn serve<F>(app: Router, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests;
