use std::sync::Arc;

use tracing::debug;

use crate::application::{CompletionProvider, OptimizeSearchUseCase, QueryFormUseCase, RelayClient};
use crate::connector::adapter::{HttpRelayClient, MockCompletion, OpenAiCompletionClient};
use crate::domain::UpdatePolicy;

use super::config::RelayConfig;

/// Wires adapters to use cases from one resolved [`RelayConfig`].
pub struct Container {
    provider: Arc<dyn CompletionProvider>,
    relay_client: Arc<dyn RelayClient>,
    config: RelayConfig,
}

impl Container {
    pub fn new(config: RelayConfig) -> Self {
        let provider: Arc<dyn CompletionProvider> = if config.mock_provider {
            debug!("Using mock completion provider");
            Arc::new(MockCompletion::new())
        } else {
            let client = OpenAiCompletionClient::new(
                config.api_key.clone().unwrap_or_default(),
                &config.base_url,
                config.upstream_timeout,
            );
            debug!("Using completion endpoint {}", client.endpoint());
            Arc::new(client)
        };

        let relay_client: Arc<dyn RelayClient> =
            Arc::new(HttpRelayClient::new(&config.relay_url, config.relay_timeout));

        Self::with_parts(config, provider, relay_client)
    }

    /// Build around pre-made adapters, e.g. test doubles.
    pub fn with_parts(
        config: RelayConfig,
        provider: Arc<dyn CompletionProvider>,
        relay_client: Arc<dyn RelayClient>,
    ) -> Self {
        Self {
            provider,
            relay_client,
            config,
        }
    }

    pub fn optimize_use_case(&self) -> OptimizeSearchUseCase {
        OptimizeSearchUseCase::new(self.provider.clone())
            .with_model(&self.config.model)
            .with_max_tokens(self.config.max_tokens)
            .with_timeout(self.config.upstream_timeout)
    }

    pub fn query_form_use_case(&self, policy: UpdatePolicy) -> QueryFormUseCase {
        QueryFormUseCase::new(self.relay_client.clone(), policy)
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
