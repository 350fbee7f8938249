//! Daily plan generation
//!
//! Turns a free-text objective into a short checklist of suggested tasks via
//! the LLM. This boundary is total: transport errors, malformed payloads and
//! a missing API key all degrade to a zero-XP placeholder or an empty plan.
//! Callers never see an error from here.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::domain::TaskDraft;
use crate::llm::{CompletionRequest, LlmClient};

/// Max tokens for a plan response. Plans are short; this is headroom.
const PLAN_MAX_TOKENS: u32 = 2048;

/// A generated plan: zero or more suggested tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyPlan {
    pub tasks: Vec<TaskDraft>,
}

impl DailyPlan {
    /// The single diagnostic entry used when generation fails. Zero XP, so
    /// toggling it never moves the ledger total.
    pub fn placeholder() -> Self {
        Self {
            tasks: vec![TaskDraft::new(
                "Plan Generation Failed",
                "Could not connect to AI. Try again later.",
                0,
            )],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Plan generator backed by an LLM client.
///
/// The client is optional: without one (e.g. no API key at startup) every
/// generation resolves to the placeholder immediately.
pub struct PlanGenerator {
    llm: Option<Arc<dyn LlmClient>>,
    config: GeneratorConfig,
}

impl PlanGenerator {
    /// Create a generator backed by the given client.
    pub fn new(llm: Arc<dyn LlmClient>, config: GeneratorConfig) -> Self {
        Self { llm: Some(llm), config }
    }

    /// Create a generator with no client; all generations fail soft.
    pub fn offline(config: GeneratorConfig) -> Self {
        Self { llm: None, config }
    }

    /// Generate a plan for the objective. Never fails: a blank objective
    /// yields an empty plan, and every other failure yields the placeholder.
    pub async fn generate(&self, objective: &str) -> DailyPlan {
        let objective = objective.trim();
        if objective.is_empty() {
            debug!("generate: empty objective, returning empty plan");
            return DailyPlan::default();
        }

        let Some(llm) = &self.llm else {
            warn!("generate: no LLM client configured");
            return DailyPlan::placeholder();
        };

        let request = CompletionRequest::json(self.build_prompt(objective), response_schema(), PLAN_MAX_TOKENS);

        let response = match llm.complete(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "generate: LLM call failed");
                return DailyPlan::placeholder();
            }
        };

        let Some(text) = response.content else {
            warn!("generate: response had no text content");
            return DailyPlan::placeholder();
        };

        match parse_plan(&text) {
            Ok(plan) => {
                debug!(task_count = plan.tasks.len(), "generate: parsed plan");
                plan
            }
            Err(e) => {
                warn!(error = %e, "generate: failed to parse plan payload");
                DailyPlan::placeholder()
            }
        }
    }

    /// Build the checklist prompt for the objective.
    fn build_prompt(&self, objective: &str) -> String {
        format!(
            "Create an actionable checklist of 3-{} specific, high-impact tasks to achieve \
             this primary objective: \"{}\".\n\
             The tasks should be geared towards a senior software engineer.\n\
             Assign realistic XP (Experience Points) between {} and {} based on difficulty.",
            self.config.max_tasks, objective, self.config.xp_min, self.config.xp_max
        )
    }
}

/// JSON schema for the structured plan response.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "tasks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "xp": { "type": "number" }
                    },
                    "required": ["title", "description", "xp"]
                }
            }
        },
        "required": ["tasks"]
    })
}

/// Wire shape of the plan payload. XP arrives as a JSON number and may be
/// fractional or negative; it is rounded and clamped to a non-negative
/// integer on conversion.
#[derive(Debug, Deserialize)]
struct RawPlan {
    tasks: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    xp: f64,
}

impl From<RawTask> for TaskDraft {
    fn from(raw: RawTask) -> Self {
        TaskDraft::new(raw.title, raw.description, raw.xp.max(0.0).round() as u32)
    }
}

/// Parse the plan JSON, tolerating a markdown code fence around the payload.
fn parse_plan(text: &str) -> Result<DailyPlan, serde_json::Error> {
    let raw: RawPlan = match serde_json::from_str(text) {
        Ok(raw) => raw,
        Err(e) => {
            // Some models fence the JSON despite the mime-type hint
            let stripped = strip_code_fence(text);
            if stripped == text.trim() {
                return Err(e);
            }
            serde_json::from_str(stripped)?
        }
    };

    Ok(DailyPlan {
        tasks: raw.tasks.into_iter().map(TaskDraft::from).collect(),
    })
}

/// Strip a surrounding ``` or ```json fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionResponse, FinishReason, LlmError, TokenUsage};
    use async_trait::async_trait;

    /// Mock client returning a canned outcome.
    struct FakeLlm {
        outcome: Result<Option<String>, ()>,
    }

    impl FakeLlm {
        fn text(s: &str) -> Arc<dyn LlmClient> {
            Arc::new(Self {
                outcome: Ok(Some(s.to_string())),
            })
        }

        fn empty() -> Arc<dyn LlmClient> {
            Arc::new(Self { outcome: Ok(None) })
        }

        fn failing() -> Arc<dyn LlmClient> {
            Arc::new(Self { outcome: Err(()) })
        }
    }

    #[async_trait]
    impl LlmClient for FakeLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            match &self.outcome {
                Ok(content) => Ok(CompletionResponse {
                    content: content.clone(),
                    finish_reason: FinishReason::Stop,
                    usage: TokenUsage::default(),
                }),
                Err(()) => Err(LlmError::InvalidResponse("simulated transport error".to_string())),
            }
        }
    }

    fn generator(llm: Arc<dyn LlmClient>) -> PlanGenerator {
        PlanGenerator::new(llm, GeneratorConfig::default())
    }

    #[tokio::test]
    async fn test_generate_parses_valid_plan() {
        let llm = FakeLlm::text(
            r#"{"tasks": [
                {"title": "Write RFC", "description": "Draft the design doc", "xp": 30},
                {"title": "Spike auth flow", "description": "Prototype OAuth", "xp": 45.0}
            ]}"#,
        );

        let plan = generator(llm).generate("ship the auth service").await;

        assert_eq!(plan.tasks.len(), 2);
        assert_eq!(plan.tasks[0].title, "Write RFC");
        assert_eq!(plan.tasks[0].xp, 30);
        assert_eq!(plan.tasks[1].xp, 45);
    }

    #[tokio::test]
    async fn test_generate_tolerates_code_fence() {
        let llm = FakeLlm::text(
            "```json\n{\"tasks\": [{\"title\": \"A\", \"description\": \"d\", \"xp\": 20}]}\n```",
        );

        let plan = generator(llm).generate("anything").await;

        assert_eq!(plan.tasks.len(), 1);
        assert_eq!(plan.tasks[0].xp, 20);
    }

    #[tokio::test]
    async fn test_generate_clamps_negative_xp() {
        let llm = FakeLlm::text(r#"{"tasks": [{"title": "A", "description": "d", "xp": -10}]}"#);

        let plan = generator(llm).generate("anything").await;

        assert_eq!(plan.tasks[0].xp, 0);
    }

    #[tokio::test]
    async fn test_transport_error_yields_placeholder() {
        let plan = generator(FakeLlm::failing()).generate("anything").await;

        assert_eq!(plan.tasks.len(), 1);
        assert_eq!(plan.tasks[0].title, "Plan Generation Failed");
        assert_eq!(plan.tasks[0].xp, 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_yields_placeholder() {
        let plan = generator(FakeLlm::text("not json at all")).generate("anything").await;

        assert_eq!(plan, DailyPlan::placeholder());
    }

    #[tokio::test]
    async fn test_empty_content_yields_placeholder() {
        let plan = generator(FakeLlm::empty()).generate("anything").await;

        assert_eq!(plan, DailyPlan::placeholder());
    }

    #[tokio::test]
    async fn test_empty_task_list_is_a_valid_empty_plan() {
        let plan = generator(FakeLlm::text(r#"{"tasks": []}"#)).generate("anything").await;

        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn test_blank_objective_short_circuits() {
        // A failing client proves the LLM is never consulted
        let plan = generator(FakeLlm::failing()).generate("   ").await;

        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn test_offline_generator_yields_placeholder() {
        let generator = PlanGenerator::offline(GeneratorConfig::default());

        let plan = generator.generate("anything").await;

        assert_eq!(plan, DailyPlan::placeholder());
    }

    #[test]
    fn test_prompt_mentions_objective_and_xp_range() {
        let generator = PlanGenerator::offline(GeneratorConfig::default());
        let prompt = generator.build_prompt("refactor the billing module");

        assert!(prompt.contains("refactor the billing module"));
        assert!(prompt.contains("between 10 and 50"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("{}"), "{}");
    }
}
