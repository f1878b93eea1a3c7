use async_trait::async_trait;

use crate::domain::{DomainError, OptimizationResult, Query};

/// Client side of the relay: what the Query Form calls when triggered.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn optimize(&self, query: &Query) -> Result<OptimizationResult, DomainError>;
}
