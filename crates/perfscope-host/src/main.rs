//! perfscope host binary.
//!
//! - Loads `perfscope.yaml` (or the path given as the first argument)
//! - Owns one timer registry for the process lifetime
//! - Serves the timer HTTP surface until Ctrl-C, then clears the registry

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use perfscope_core::error::{ProfilerError, Result};
use perfscope_host::{config, host_state::HostState, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "perfscope-host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;

    let state = HostState::new(cfg)?;
    let listen = state.listen_addr();
    let app = router::build_router(state.clone());

    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| ProfilerError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, config = %path, "perfscope module started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ProfilerError::Internal(format!("server failed: {e}")))?;

    state.registry().clear();
    tracing::info!("perfscope module shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; shutting down");
    }
}
