//! LLM client module
//!
//! Provider-agnostic completion requests plus the Gemini implementation.

use std::sync::Arc;

use tracing::debug;

mod client;
mod error;
mod gemini;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use types::{CompletionRequest, CompletionResponse, FinishReason, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown LLM provider: '{}'. Supported: gemini",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_unknown_provider() {
        let config = LlmConfig {
            provider: "carrier-pigeon".to_string(),
            ..LlmConfig::default()
        };

        let err = match create_client(&config) {
            Ok(_) => panic!("expected create_client to return an error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("carrier-pigeon"));
    }
}
