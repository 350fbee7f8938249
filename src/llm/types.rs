//! LLM request/response types
//!
//! These types model the Gemini generateContent API but stay small enough to
//! back other providers later.

use tracing::debug;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The user prompt (single turn)
    pub prompt: String,

    /// Optional JSON schema for structured output. When set, the provider is
    /// asked to respond with `application/json` matching the schema.
    pub response_schema: Option<serde_json::Value>,

    /// Max tokens for the response
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a plain-text request.
    pub fn text(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            max_tokens,
        }
    }

    /// Create a structured-JSON request.
    pub fn json(prompt: impl Into<String>, schema: serde_json::Value, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
            max_tokens,
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content (if any)
    pub content: Option<String>,

    /// Why the model stopped
    pub finish_reason: FinishReason,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl FinishReason {
    /// Parse from the Gemini API finishReason string
    pub fn from_gemini(s: &str) -> Self {
        debug!(%s, "FinishReason::from_gemini: called");
        match s {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" => FinishReason::Safety,
            _ => FinishReason::Other,
        }
    }
}

/// Token usage for cost tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    /// Total tokens billed for the call
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_has_no_schema() {
        let req = CompletionRequest::text("hello", 100);
        assert_eq!(req.prompt, "hello");
        assert!(req.response_schema.is_none());
        assert_eq!(req.max_tokens, 100);
    }

    #[test]
    fn test_json_request_carries_schema() {
        let schema = serde_json::json!({"type": "object"});
        let req = CompletionRequest::json("hello", schema.clone(), 100);
        assert_eq!(req.response_schema, Some(schema));
    }

    #[test]
    fn test_finish_reason_from_gemini() {
        assert_eq!(FinishReason::from_gemini("STOP"), FinishReason::Stop);
        assert_eq!(FinishReason::from_gemini("MAX_TOKENS"), FinishReason::MaxTokens);
        assert_eq!(FinishReason::from_gemini("SAFETY"), FinishReason::Safety);
        assert_eq!(FinishReason::from_gemini("RECITATION"), FinishReason::Other);
    }

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage {
            prompt_tokens: 120,
            completion_tokens: 80,
        };
        assert_eq!(usage.total(), 200);
    }
}
