//! Listener lifecycle: bind, serve, graceful shutdown.

use thiserror::Error;
use tokio::net::TcpListener;

use riecount_core::RiecountError;

use crate::{app_state::AppState, config::ServerConfig, router};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("config: {0}")]
    Config(#[from] RiecountError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Serve until Ctrl-C / SIGTERM.
pub async fn run(cfg: ServerConfig) -> Result<(), ServeError> {
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let counter_file = state.cfg().store.counter_path();
    let app = router::build_router(state);

    let listener = TcpListener::bind(listen)
        .await
        .map_err(|source| ServeError::Bind { addr: listen, source })?;
    tracing::info!(%listen, counter_file = %counter_file.display(), "riecount-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
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
    tracing::info!("signal received, starting graceful shutdown");
}
