mod app;
mod error;
mod handler;

pub use app::{build_app, serve, shutdown_signal, AppState};
pub use error::{ApiError, RELAY_FAILURE_MESSAGE};
pub use handler::{search_optimization_handler, OptimizationPayload};
