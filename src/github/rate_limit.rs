//! Rate limit quota reported by GitHub's `/rate_limit` endpoint.

use std::fmt;

/// Snapshot of the core API quota, read after a request was rate limited.
///
/// # Example
///
/// ```
/// use octofacade::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// assert_eq!(info.to_string(), "0/5000 requests left, resets at 1700000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true once no requests remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for RateLimitInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{remaining}/{limit} requests left, resets at {reset}",
            remaining = self.remaining,
            limit = self.limit,
            reset = self.reset_at
        )
    }
}
