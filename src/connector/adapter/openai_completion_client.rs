use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::CompletionProvider;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/completions";

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}

/// HTTP client for the OpenAI text-completion endpoint (and compatible
/// servers).
///
/// Sends `{ model, prompt, max_tokens }` to `{base_url}/v1/completions` with a
/// bearer token and returns `choices[0].text`. Status codes and bodies of
/// failed calls are logged here and reduced to a short [`DomainError`], so the
/// raw provider response never travels further than this adapter.
pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    timeout: Duration,
}

impl OpenAiCompletionClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::MissingCredential);
        }

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Timeout(self.timeout)
                } else {
                    DomainError::upstream(format!("OpenAiCompletionClient: request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiCompletionClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OpenAiCompletionClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::malformed(format!("OpenAiCompletionClient: failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| DomainError::malformed("OpenAiCompletionClient: response had no choices"))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
