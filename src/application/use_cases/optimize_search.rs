use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::CompletionProvider;
use crate::domain::{
    CompletionRequest, DomainError, OptimizationResult, PromptTemplate, Query, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};

/// Relays one query to the completion provider and returns the first
/// candidate's text untouched.
///
/// Stateless apart from immutable settings, so a single instance can serve
/// any number of concurrent requests. There are no retries; the optional
/// timeout is the only bound on how long a provider call may take.
#[derive(Clone)]
pub struct OptimizeSearchUseCase {
    provider: Arc<dyn CompletionProvider>,
    template: PromptTemplate,
    model: String,
    max_tokens: u32,
    timeout: Option<Duration>,
}

impl OptimizeSearchUseCase {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            template: PromptTemplate::default(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build_request(&self, query: &Query) -> CompletionRequest {
        CompletionRequest::new(&self.model, self.template.render(query))
            .with_max_tokens(self.max_tokens)
    }

    pub async fn execute(&self, query: &Query) -> Result<OptimizationResult, DomainError> {
        let request = self.build_request(query);
        debug!(
            "Relaying query ({} chars) to {} with model {}",
            query.as_str().len(),
            self.provider.provider_name(),
            request.model
        );

        let completion = self.provider.complete(&request);
        let text = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, completion)
                .await
                .map_err(|_| DomainError::Timeout(limit))??,
            None => completion.await?,
        };

        Ok(OptimizationResult::new(text))
    }
}
