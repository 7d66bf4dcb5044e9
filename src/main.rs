//! Octofacade service entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use octofacade::{
    AppState, GatewayError, OctocrabGateway, OctofacadeConfig, init_tracing, router, serve,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "service stopped");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = load_config()?;
    init_tracing(&config.log_level, config.log_format_kind()?)?;

    let token = config.resolve_token()?;
    let api_base = config.api_base_url()?;
    let gateway = OctocrabGateway::for_token(&token, &config.api_base)?;
    tracing::info!(api_base = %api_base, "GitHub client ready");

    let app = router(AppState::new(Arc::new(gateway)));
    serve(app, shutdown_signal())
        .await
        .map_err(|error| GatewayError::Io {
            message: error.to_string(),
        })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GatewayError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<OctofacadeConfig, GatewayError> {
    OctofacadeConfig::load().map_err(|error| GatewayError::Configuration {
        message: error.to_string(),
    })
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
