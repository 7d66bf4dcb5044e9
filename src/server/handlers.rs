//! Request handlers for the three façade routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::ALLOW;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::github::locator::{
    CommitSha, PullRequestNumber, RepositoryLocator, RepositoryName, RepositoryOwner,
};
use crate::github::models::{CommitComment, PullRequestReviewComment};

use super::AppState;
use super::error::{ApiError, json_response};
use super::path::PullCommentPath;

/// Body of every commit comment until requests carry their own text.
pub const COMMIT_COMMENT_BODY: &str =
    "Commit message... replace me with message taken from request body.";

/// Diff position of every commit comment.
pub const COMMIT_COMMENT_POSITION: u64 = 1;

/// Body of every pull request review comment.
pub const PULL_REQUEST_COMMENT_BODY: &str = "hard coded comment message";

/// Optional query parameters of the pull request comment route.
#[derive(Debug, Deserialize)]
pub(super) struct PullCommentQuery {
    repo: Option<String>,
}

fn owner_segment(value: &str) -> Result<RepositoryOwner, ApiError> {
    RepositoryOwner::new(value).map_err(|error| ApiError::invalid_parameter("owner", error))
}

fn commit_segment(value: &str) -> Result<CommitSha, ApiError> {
    CommitSha::new(value).map_err(|error| ApiError::invalid_parameter("commit", error))
}

fn numeric_segment(name: &'static str, value: &str) -> Result<u64, ApiError> {
    value
        .parse::<u64>()
        .map_err(|error| ApiError::invalid_parameter(name, error))
}

/// `GET /{owner}/repos/count`
///
/// Answers with the number of repositories on the first listing page.
pub(super) async fn repository_count(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Response, ApiError> {
    let owner = owner_segment(&owner)?;
    let repositories = state.gateway().list_repositories(&owner).await?;
    json_response(StatusCode::OK, &repositories.len())
}

/// `POST /{owner}/repos/{repo}/{commit}/comment`
///
/// Only the user lookup can fail the request. A failed comment submission is
/// logged and the caller still receives 200.
pub(super) async fn commit_comment(
    State(state): State<AppState>,
    Path((owner, repo, commit)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    let locator = RepositoryLocator::new(
        owner_segment(&owner)?,
        RepositoryName::new(&repo).map_err(|error| ApiError::invalid_parameter("repo", error))?,
    );
    let commit = commit_segment(&commit)?;

    let login = state.comment_author().login(locator.owner());
    let author = state.gateway().user(login).await?;

    let comment = CommitComment {
        commit,
        author,
        body: COMMIT_COMMENT_BODY.to_owned(),
        position: COMMIT_COMMENT_POSITION,
    };
    match state
        .gateway()
        .create_commit_comment(&locator, &comment)
        .await
    {
        Ok(created) => tracing::debug!(
            comment_id = created.id,
            owner = locator.owner().as_str(),
            repo = locator.repository().as_str(),
            commit = comment.commit.as_str(),
            "created commit comment"
        ),
        Err(error) => tracing::warn!(
            %error,
            owner = locator.owner().as_str(),
            repo = locator.repository().as_str(),
            commit = comment.commit.as_str(),
            "commit comment was not created"
        ),
    }

    Ok(StatusCode::OK.into_response())
}

/// `POST /{owner}/pulls/{number}/{commit}/{path}/{position}/comment`
///
/// The route has no repository segment; the optional `repo` query parameter
/// names it. As with commit comments, only the user lookup is reported to the
/// caller.
pub(super) async fn pull_comment(
    State(state): State<AppState>,
    path: PullCommentPath,
    Query(query): Query<PullCommentQuery>,
) -> Result<Response, ApiError> {
    let owner = owner_segment(&path.owner)?;
    let number = PullRequestNumber::new(numeric_segment("number", &path.number)?)
        .map_err(|error| ApiError::invalid_parameter("number", error))?;
    let position = numeric_segment("position", &path.position)?;
    let commit = commit_segment(&path.commit)?;
    let repository = query
        .repo
        .filter(|name| !name.is_empty())
        .map(|name| RepositoryName::new(&name))
        .transpose()
        .map_err(|error| ApiError::invalid_parameter("repo", error))?;

    let login = state.comment_author().login(&owner);
    let author = state.gateway().user(login).await?;

    let comment = PullRequestReviewComment {
        owner,
        repository,
        number,
        commit,
        path: path.path,
        position,
        body: PULL_REQUEST_COMMENT_BODY.to_owned(),
        author,
    };
    match state.gateway().create_pull_request_comment(&comment).await {
        Ok(created) => tracing::info!(
            comment_id = created.id,
            html_url = created.html_url.as_deref().unwrap_or_default(),
            number = comment.number.get(),
            path = comment.path.as_str(),
            "created pull request comment"
        ),
        Err(error) => tracing::warn!(
            %error,
            owner = comment.owner.as_str(),
            number = comment.number.get(),
            path = comment.path.as_str(),
            "pull request comment was not created"
        ),
    }

    Ok(StatusCode::OK.into_response())
}

/// Any method other than `POST` on the pull request comment route.
///
/// Answers 405 for a well-formed path and 404 for a path that would not have
/// matched the route at all.
pub(super) async fn pull_comment_wrong_method(
    path: Result<PullCommentPath, StatusCode>,
) -> Response {
    match path {
        Ok(_) => (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, "POST")]).into_response(),
        Err(status) => status.into_response(),
    }
}
