use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Query;

use super::app::AppState;
use super::error::ApiError;

/// Body of `POST /search-optimization`. A missing or `null` query is relayed
/// as the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct OptimizationPayload {
    #[serde(default)]
    pub query: Option<String>,
}

impl OptimizationPayload {
    /// Decode regardless of `Content-Type`. An empty body, or one that is not
    /// a JSON object with a string `query`, carries no query.
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return Self::default();
        }

        serde_json::from_slice(body).unwrap_or_else(|e| {
            debug!("Request body is not a query payload, relaying an empty query: {e}");
            Self::default()
        })
    }

    pub fn into_query(self) -> Query {
        Query::new(self.query.unwrap_or_default())
    }
}

pub async fn search_optimization_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<String>, ApiError> {
    let query = OptimizationPayload::from_body(&body).into_query();
    debug!("Received search optimization request");

    let result = state.optimize.execute(&query).await?;

    Ok(Json(result.into_text()))
}
