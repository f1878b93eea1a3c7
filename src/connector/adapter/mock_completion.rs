use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::application::CompletionProvider;
use crate::domain::{CompletionRequest, DomainError};

/// Offline stand-in for a completion provider. Output is a pure function of
/// the prompt, so local runs of the relay are reproducible.
pub struct MockCompletion;

impl MockCompletion {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let mut hasher = DefaultHasher::new();
        request.prompt.hash(&mut hasher);
        let fingerprint = hasher.finish() % 10000;

        let headline = request.prompt.lines().next().unwrap_or_default();
        Ok(format!(
            "\n\n[mock {fingerprint:04}] {headline}\n1. Refined result one\n2. Refined result two\n3. Refined result three"
        ))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
