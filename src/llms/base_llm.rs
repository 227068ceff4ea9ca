//! Text-generation capability used by the fallback classifier.
//!
//! The classifier never talks to a provider directly: it is handed an
//! `Arc<dyn TextGenerator>` at construction, so tests can substitute a stub
//! and hosts can choose (or omit) a provider.

use std::fmt;

use async_trait::async_trait;

use crate::utilities::errors::LlmError;

/// Something that turns a prompt into text.
///
/// Implementations must bound their own network latency; a call should
/// never hang indefinitely.
#[async_trait]
pub trait TextGenerator: Send + Sync + fmt::Debug {
    /// Model identifier.
    fn model(&self) -> &str;

    /// Provider name, for logs.
    fn provider(&self) -> &str {
        "unknown"
    }

    /// Generate a completion for a single user prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
