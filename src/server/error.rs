//! JSON error envelope written by the request handlers.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::github::error::GatewayError;

/// Content type of every JSON body the service writes.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body written for failed requests: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// Human-readable failure description.
    pub error: String,
}

/// Failure that ends a request.
///
/// Handlers return `Result<_, ApiError>` and bail out with `?`, so the first
/// failing step writes the only error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A GitHub call failed.
    #[error(transparent)]
    Remote(#[from] GatewayError),

    /// A path or query value could not be used.
    #[error("invalid {name}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// A success body could not be serialised.
    #[error("failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds an [`ApiError::InvalidParameter`] from any displayable cause.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::InvalidParameter {
            name,
            message: cause.to_string(),
        }
    }

    /// HTTP status written for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Self::Remote(_) | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "request failed");

        let envelope = ErrorEnvelope {
            error: self.to_string(),
        };
        match serde_json::to_vec(&envelope) {
            Ok(body) => (status, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
            Err(_) => status.into_response(),
        }
    }
}

/// Serialises `value` as a JSON response with the service content type.
///
/// # Errors
///
/// Returns [`ApiError::Encoding`] when serialisation fails.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok((status, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}
