//! Identity wrappers for the values carried in request paths.

use url::form_urlencoded;

use super::error::GatewayError;

/// Percent-encodes one GitHub API path segment.
///
/// Path values arrive already decoded, so `/`, `?` and `#` must not reach the
/// request path verbatim.
fn encode_segment(value: &str) -> String {
    // `byte_serialize` writes spaces as `+` and a literal `+` as `%2B`.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Wraps a non-empty owner login.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::EmptySegment` when the value is empty.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        if value.is_empty() {
            return Err(GatewayError::EmptySegment { field: "owner" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn user_path(&self) -> String {
        format!("/users/{}", encode_segment(self.as_str()))
    }

    pub(crate) fn repositories_path(&self) -> String {
        format!("/users/{}/repos", encode_segment(self.as_str()))
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Wraps a non-empty repository name.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::EmptySegment` when the value is empty.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        if value.is_empty() {
            return Err(GatewayError::EmptySegment { field: "repository" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Commit identifier as given in the request path.
///
/// The value is passed to GitHub untouched; GitHub decides whether it names a
/// commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSha(String);

impl CommitSha {
    /// Wraps a non-empty commit identifier.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::EmptySegment` when the value is empty.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        if value.is_empty() {
            return Err(GatewayError::EmptySegment { field: "commit" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the commit identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a pull request number.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, GatewayError> {
        if value == 0 {
            return Err(GatewayError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GatewayError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GatewayError::InvalidToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Owner and repository pair addressed by the comment endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator from already validated parts.
    #[must_use]
    pub const fn new(owner: RepositoryOwner, repository: RepositoryName) -> Self {
        Self { owner, repository }
    }

    /// Creates a repository locator from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::EmptySegment` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, GatewayError> {
        Ok(Self::new(RepositoryOwner::new(owner)?, RepositoryName::new(repo)?))
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn commit_comments_path(&self, commit: &CommitSha) -> String {
        format!(
            "/repos/{}/{}/commits/{}/comments",
            encode_segment(self.owner.as_str()),
            encode_segment(self.repository.as_str()),
            encode_segment(commit.as_str())
        )
    }

    pub(crate) fn review_comments_path(&self, number: PullRequestNumber) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/comments",
            encode_segment(self.owner.as_str()),
            encode_segment(self.repository.as_str()),
            number.get()
        )
    }
}
