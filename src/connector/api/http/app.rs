use std::future::Future;
use std::sync::Arc;

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::application::OptimizeSearchUseCase;
use crate::connector::adapter::SEARCH_OPTIMIZATION_PATH;

use super::handler::search_optimization_handler;

/// Shared, read-only per-process state handed to every request.
pub struct AppState {
    pub optimize: OptimizeSearchUseCase,
}

/// The relay's HTTP surface: one route, any origin.
pub fn build_app(optimize: OptimizeSearchUseCase) -> Router {
    let state = Arc::new(AppState { optimize });

    Router::new()
        .route(SEARCH_OPTIMIZATION_PATH, post(search_optimization_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(address) = listener.local_addr() {
        info!("Server running on {address}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
