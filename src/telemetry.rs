//! Tracing subscriber setup for the service binary.

use std::str::FromStr;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::github::error::GatewayError;

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Configuration value naming this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = GatewayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(Self::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(GatewayError::Configuration {
                message: format!("unknown log format `{value}` (expected `pretty` or `json`)"),
            })
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
///
/// # Errors
///
/// Returns [`GatewayError::Configuration`] when a global subscriber is already
/// installed.
pub fn init_tracing(default_level: &str, format: LogFormat) -> Result<(), GatewayError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|error| GatewayError::Configuration {
        message: format!("failed to install tracing subscriber: {error}"),
    })
}
