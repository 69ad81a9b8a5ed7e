//! LLM-backed input validator.
//!
//! Classifies (job role, optional context) with one auxiliary generation
//! call before a session is started. Sampling is pinned deterministic
//! (temperature 0) with a small token cap; the reply is parsed by the core's
//! line-oriented extractor, so a malformed reply degrades to "invalid"
//! rather than erroring.

use intervo_core::error::Result;
use intervo_core::session::{GenerationAgent, ModelConfig, Turn};
use intervo_core::validation::{self, ValidationOutcome};

const VALIDATION_MODEL: &str = "gpt-4o-mini";
const VALIDATION_MAX_TOKENS: u32 = 100;

/// Runs the pre-start validation check through a generation agent.
pub struct InputValidator<A: GenerationAgent> {
    agent: A,
    model_config: ModelConfig,
}

impl<A: GenerationAgent> InputValidator<A> {
    /// Creates a validator using the default validation model.
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            model_config: ModelConfig {
                model: VALIDATION_MODEL.to_string(),
                temperature: 0.0,
                max_tokens: VALIDATION_MAX_TOKENS,
                top_p: 1.0,
                frequency_penalty: 0.0,
                presence_penalty: 0.0,
            },
        }
    }

    /// Overrides the model used for validation calls.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_config.model = model.into();
        self
    }

    /// Classifies the job role and optional free-form context.
    ///
    /// # Errors
    ///
    /// Returns a `Generation` error only if the auxiliary call itself fails;
    /// an unparseable reply is not an error and yields a conservative
    /// "invalid" outcome.
    pub async fn validate(&self, role: &str, user_input: &str) -> Result<ValidationOutcome> {
        let prompt = validation_turns(role, user_input);
        let reply = self
            .agent
            .complete("", &prompt, &self.model_config)
            .await?;
        let outcome = validation::parse_reply(&reply);
        tracing::debug!(
            job_valid = outcome.job_role.valid,
            input_valid = outcome.context.valid,
            "validated interview inputs"
        );
        Ok(outcome)
    }
}

fn validation_turns(role: &str, user_input: &str) -> [Turn; 1] {
    [Turn::user(validation::validation_prompt(role, user_input))]
}
