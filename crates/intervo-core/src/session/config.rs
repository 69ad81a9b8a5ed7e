//! Session configuration types.
//!
//! A `SessionConfig` is built once at session start and is immutable for the
//! session's lifetime. Sampling ranges are validated here, in the core, since
//! this is the reusable contract boundary; UI widget bounds are not trusted.

use crate::error::{IntervoError, Result};
use crate::technique::TechniqueId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interview difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// Model identifier plus the sampling parameters passed through unmodified
/// to the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier (e.g. "gpt-4o-mini")
    pub model: String,
    /// Sampling temperature, 0.0–2.0
    pub temperature: f32,
    /// Maximum output tokens, positive
    pub max_tokens: u32,
    /// Nucleus sampling cutoff, 0.0–1.0
    pub top_p: f32,
    /// Frequency penalty, 0.0–2.0
    pub frequency_penalty: f32,
    /// Presence penalty, 0.0–2.0
    pub presence_penalty: f32,
}

impl ModelConfig {
    /// Checks every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(IntervoError::invalid_config("model identifier is empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(IntervoError::invalid_config(format!(
                "temperature {} outside 0.0..=2.0",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(IntervoError::invalid_config("max_tokens must be positive"));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(IntervoError::invalid_config(format!(
                "top_p {} outside 0.0..=1.0",
                self.top_p
            )));
        }
        if !(0.0..=2.0).contains(&self.frequency_penalty) {
            return Err(IntervoError::invalid_config(format!(
                "frequency_penalty {} outside 0.0..=2.0",
                self.frequency_penalty
            )));
        }
        if !(0.0..=2.0).contains(&self.presence_penalty) {
            return Err(IntervoError::invalid_config(format!(
                "presence_penalty {} outside 0.0..=2.0",
                self.presence_penalty
            )));
        }
        Ok(())
    }
}

/// Everything the caller supplies to `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartRequest {
    /// Job role being interviewed for (non-empty)
    pub role: String,
    /// Interview difficulty level
    pub difficulty: Difficulty,
    /// Prompt technique driving the interviewer persona
    pub technique: TechniqueId,
    /// Model identifier and sampling parameters
    pub model_config: ModelConfig,
    /// Optional job-description context grounding the interview (may be empty)
    #[serde(default)]
    pub job_description: String,
}

/// The immutable configuration of one in-progress interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub role: String,
    pub difficulty: Difficulty,
    pub technique: TechniqueId,
    pub model_config: ModelConfig,
    pub job_description: String,
}

impl StartRequest {
    /// Validates the request and freezes it into a `SessionConfig`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty role or out-of-range sampling
    /// parameters. Technique validity is guaranteed by the `TechniqueId` type.
    pub fn into_config(self) -> Result<SessionConfig> {
        if self.role.trim().is_empty() {
            return Err(IntervoError::invalid_config("job role is empty"));
        }
        self.model_config.validate()?;
        Ok(SessionConfig {
            role: self.role,
            difficulty: self.difficulty,
            technique: self.technique,
            model_config: self.model_config,
            job_description: self.job_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_model_config() -> ModelConfig {
        ModelConfig {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    #[test]
    fn in_range_config_is_accepted() {
        assert!(base_model_config().validate().is_ok());
    }

    #[test]
    fn out_of_range_parameters_fail_closed() {
        let cases: Vec<(&str, Box<dyn Fn(&mut ModelConfig)>)> = vec![
            ("temperature", Box::new(|c| c.temperature = 2.5)),
            ("top_p", Box::new(|c| c.top_p = 1.2)),
            ("frequency_penalty", Box::new(|c| c.frequency_penalty = -0.1)),
            ("presence_penalty", Box::new(|c| c.presence_penalty = 3.0)),
            ("max_tokens", Box::new(|c| c.max_tokens = 0)),
            ("model", Box::new(|c| c.model = "  ".to_string())),
        ];
        for (name, mutate) in cases {
            let mut config = base_model_config();
            mutate(&mut config);
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, IntervoError::InvalidConfig(_)),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn empty_role_is_rejected() {
        let request = StartRequest {
            role: "   ".to_string(),
            difficulty: Difficulty::Medium,
            technique: TechniqueId::RoleBased,
            model_config: base_model_config(),
            job_description: String::new(),
        };
        assert!(matches!(
            request.into_config(),
            Err(IntervoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn boundary_values_are_in_range() {
        let mut config = base_model_config();
        config.temperature = 2.0;
        config.top_p = 0.0;
        config.frequency_penalty = 2.0;
        config.presence_penalty = 0.0;
        assert!(config.validate().is_ok());
    }
}
