//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::GatewayError;
use crate::github::locator::PersonalAccessToken;

/// Builds an Octocrab client for the given token and API base URL.
///
/// No request is sent; GitHub first sees the token on the first API call.
///
/// # Errors
///
/// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
/// `GatewayError::ClientConstruction` when Octocrab fails to construct a
/// client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, GatewayError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| GatewayError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| GatewayError::InvalidUrl(error.to_string()))?
        .build()
        .map_err(|error| GatewayError::ClientConstruction {
            message: error.to_string(),
        })
}
