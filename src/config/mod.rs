//! Service configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to highest
//! precedence:
//!
//! 1. **Defaults** – Built-in values
//! 2. **Configuration file** – `.octofacade.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `OCTOFACADE_TOKEN`, `OCTOFACADE_API_BASE`,
//!    `OCTOFACADE_LOG_LEVEL`, `OCTOFACADE_LOG_FORMAT`, or the legacy `TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--api-base`,
//!    `--log-level`, `--log-format`
//!
//! The listening port is fixed and not configurable.
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://ghe.example.com/api/v3"
//! log_level = "debug"
//! log_format = "json"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::GatewayError;
use crate::github::locator::PersonalAccessToken;
use crate::telemetry::LogFormat;

/// Environment variable read when no token is configured.
pub const LEGACY_TOKEN_VARIABLE: &str = "TOKEN";

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Service configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use octofacade::OctofacadeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = OctofacadeConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "OCTOFACADE",
    discovery(
        dotfile_name = ".octofacade.toml",
        config_file_name = "octofacade.toml",
        app_name = "octofacade"
    )
)]
pub struct OctofacadeConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `OCTOFACADE_TOKEN` or `TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    ///
    /// Point this at `https://<host>/api/v3` for GitHub Enterprise.
    #[ortho_config()]
    pub api_base: String,

    /// Default log filter, used when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_level: String,

    /// Log output format: `pretty` or `json`.
    #[ortho_config()]
    pub log_format: String,
}

impl Default for OctofacadeConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            log_format: LogFormat::Pretty.as_str().to_owned(),
        }
    }
}

impl OctofacadeConfig {
    /// Resolves the token from configuration or the legacy `TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, GatewayError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_VARIABLE).ok())
            .ok_or(GatewayError::InvalidToken)?;
        PersonalAccessToken::new(value)
    }

    /// Returns the validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when the value is not an absolute
    /// URL.
    pub fn api_base_url(&self) -> Result<Url, GatewayError> {
        Url::parse(&self.api_base).map_err(|error| GatewayError::InvalidUrl(error.to_string()))
    }

    /// Returns the configured log format.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] for anything other than
    /// `pretty` or `json`.
    pub fn log_format_kind(&self) -> Result<LogFormat, GatewayError> {
        self.log_format.parse()
    }
}
