//! LlmClient trait

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// A provider-agnostic LLM client.
///
/// Implementations own their HTTP plumbing and retry policy; callers see one
/// request in, one response or typed error out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run a completion request to finish.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
