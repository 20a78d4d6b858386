//! notekeep server
//!
//! - Notes CRUD: /notes, /notes/:id
//! - Analytics: /analytics/summary, /analytics/notes/count, /analytics/notes/avg-length
//! - Ops: /healthz, /metrics
//! - Graceful shutdown on Ctrl+C / SIGTERM, then the store is closed

use std::future::IntoFuture;
use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use notekeep_core::Result;
use notekeep_server::{app_state::AppState, config, router, store::SqliteNotes};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "notekeep-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let notes = SqliteNotes::connect(&cfg.database).await?;
    let state = AppState::new(cfg, notes);

    let listen = state.cfg().server.listen_addr()?;
    let grace = state.cfg().server.shutdown_grace();
    tracing::info!(
        database = %state.cfg().database.url,
        max_connections = state.cfg().database.effective_max_connections(),
        ?grace,
        "effective config"
    );
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| notekeep_core::NotekeepError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "notekeep-server listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        wait_for_signal().await;
        tracing::info!("signal received, starting graceful shutdown");
    });
    let served = server.into_future();
    tokio::pin!(served);

    let result = tokio::select! {
        r = &mut served => r,
        _ = drain_deadline(grace) => {
            tracing::warn!(?grace, "connections did not drain in time");
            Ok(())
        }
    };

    state.notes().close().await;
    result.map_err(|e| notekeep_core::NotekeepError::Internal(format!("server failed: {e}")))
}

/// Resolves `grace` after a shutdown signal; never resolves otherwise.
async fn drain_deadline(grace: Duration) {
    wait_for_signal().await;
    tokio::time::sleep(grace).await;
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
