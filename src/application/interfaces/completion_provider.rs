use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// A text-completion backend that turns a prompt into generated candidates.
///
/// Implementors own transport, authentication and response decoding.
/// Callers only ever see the first candidate's text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `request` and return the text of the first generated candidate.
    ///
    /// An empty candidate list is an error, not an empty string.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    fn provider_name(&self) -> &str;
}
