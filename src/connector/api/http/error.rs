use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::DomainError;

/// The only thing a caller ever learns about a failed relay.
pub const RELAY_FAILURE_MESSAGE: &str = "Error processing the search optimization";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Search optimization failed: {0}")]
    Optimization(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{self}");

        let status = match self {
            ApiError::Optimization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, RELAY_FAILURE_MESSAGE).into_response()
    }
}
