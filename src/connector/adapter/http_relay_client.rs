use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::RelayClient;
use crate::domain::{DomainError, OptimizationResult, Query};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001";
pub const SEARCH_OPTIMIZATION_PATH: &str = "/search-optimization";

#[derive(Serialize)]
struct RelayRequest<'a> {
    query: &'a str,
}

/// [`RelayClient`] that POSTs to a running relay service.
///
/// The relay answers with a JSON-encoded string; a body that is not valid
/// JSON is taken as raw text instead.
pub struct HttpRelayClient {
    client: reqwest::Client,
    url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), SEARCH_OPTIMIZATION_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    fn decode_body(body: String) -> String {
        serde_json::from_str::<String>(&body).unwrap_or(body)
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn optimize(&self, query: &Query) -> Result<OptimizationResult, DomainError> {
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&RelayRequest {
                query: query.as_str(),
            })
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("relay unreachable: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::upstream(format!("failed to read relay response: {e}")))?;

        if !status.is_success() {
            warn!("Relay returned {status}: {body}");
            return Err(DomainError::upstream(format!("relay returned {status}")));
        }

        Ok(OptimizationResult::new(Self::decode_body(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_string_bodies() {
        assert_eq!(
            HttpRelayClient::decode_body("\"line one\\nline two\"".to_string()),
            "line one\nline two"
        );
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(
            HttpRelayClient::decode_body("plain text".to_string()),
            "plain text"
        );
    }

    #[test]
    fn endpoint_targets_search_optimization() {
        let client = HttpRelayClient::new("http://relay:3001/", Duration::from_secs(1));
        assert_eq!(client.endpoint(), "http://relay:3001/search-optimization");
    }
}
