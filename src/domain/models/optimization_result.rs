use serde::{Deserialize, Serialize};

/// Text of the first candidate returned by the completion provider, kept
/// byte-for-byte as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimizationResult(String);

impl OptimizationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}
