//! Path extraction for the pull request comment route.
//!
//! The route is registered as `/{owner}/pulls/{number}/{commit}/{*target}` so
//! that file paths may contain `/`. The extractor splits `target` into
//! `{path}/{position}/comment` and insists that `number` and `position` are
//! digits; anything else is answered with 404, as if no route had matched.

use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::Deserialize;

const COMMENT_SUFFIX: &str = "comment";

#[derive(Debug, Deserialize)]
struct RawPullCommentPath {
    owner: String,
    number: String,
    commit: String,
    target: String,
}

/// Path values of `POST /{owner}/pulls/{number}/{commit}/{path}/{position}/comment`.
///
/// `number` and `position` are guaranteed to be non-empty ASCII digit strings;
/// they may still overflow when parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullCommentPath {
    /// Repository owner and commenting identity.
    pub owner: String,
    /// Pull request number, digits only.
    pub number: String,
    /// Commit identifier.
    pub commit: String,
    /// File path inside the repository.
    pub path: String,
    /// Diff position, digits only.
    pub position: String,
}

impl PullCommentPath {
    fn from_raw(raw: RawPullCommentPath) -> Option<Self> {
        let (rest, suffix) = raw.target.rsplit_once('/')?;
        if suffix != COMMENT_SUFFIX {
            return None;
        }
        let (path, position) = rest.rsplit_once('/')?;
        if path.is_empty() || !is_numeric_segment(position) || !is_numeric_segment(&raw.number) {
            return None;
        }

        Some(Self {
            path: path.to_owned(),
            position: position.to_owned(),
            owner: raw.owner,
            number: raw.number,
            commit: raw.commit,
        })
    }
}

fn is_numeric_segment(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

impl<S> FromRequestParts<S> for PullCommentPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawPullCommentPath>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        Self::from_raw(raw).ok_or(StatusCode::NOT_FOUND)
    }
}
