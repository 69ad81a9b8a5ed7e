//! Prompt technique domain model.
//!
//! A technique is a named prompting strategy (zero-shot, role-based, ...)
//! bundling the system prompt that shapes the interviewer persona together
//! with display metadata for the UI collaborator.

use crate::error::{IntervoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifiers for the built-in prompt techniques.
///
/// The string keys (`"Zero-Shot"`, `"JSON Basic"`, ...) are the contract with
/// the UI collaborator; an unknown key is rejected at the parse boundary
/// rather than producing a malformed prompt downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechniqueId {
    #[serde(rename = "Zero-Shot")]
    ZeroShot,
    #[serde(rename = "Few-Shot")]
    FewShot,
    #[serde(rename = "Role-Based")]
    RoleBased,
    #[serde(rename = "Chain-of-Thought")]
    ChainOfThought,
    #[serde(rename = "JSON Basic")]
    JsonBasic,
    #[serde(rename = "JSON Detailed")]
    JsonDetailed,
}

impl TechniqueId {
    /// All built-in techniques, in presentation order.
    pub const ALL: [TechniqueId; 6] = [
        TechniqueId::ZeroShot,
        TechniqueId::FewShot,
        TechniqueId::RoleBased,
        TechniqueId::ChainOfThought,
        TechniqueId::JsonBasic,
        TechniqueId::JsonDetailed,
    ];

    /// Returns the stable string key for this technique.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueId::ZeroShot => "Zero-Shot",
            TechniqueId::FewShot => "Few-Shot",
            TechniqueId::RoleBased => "Role-Based",
            TechniqueId::ChainOfThought => "Chain-of-Thought",
            TechniqueId::JsonBasic => "JSON Basic",
            TechniqueId::JsonDetailed => "JSON Detailed",
        }
    }
}

impl fmt::Display for TechniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechniqueId {
    type Err = IntervoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| IntervoError::unknown_technique(s))
    }
}

/// How a technique's replies are meant to be rendered.
///
/// Rendering itself belongs to the UI collaborator; the registry only
/// records which techniques promise machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Free-form conversational text, rendered as markdown.
    Markdown,
    /// The system prompt demands a fixed JSON structure.
    Json,
}

/// A prompt technique entry in the registry.
///
/// The label, description, and system prompt are display/behavior data
/// preserved verbatim; the model's persona and output shape depend on the
/// exact wording, so these strings must not be edited casually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technique {
    /// Stable technique identifier
    pub id: TechniqueId,
    /// Display label shown by the UI collaborator
    pub label: &'static str,
    /// One-line human-readable explanation of the technique
    pub description: &'static str,
    /// Full system prompt sent with every request of a session
    pub system_prompt: &'static str,
    /// Whether replies are free-form markdown or strict JSON
    pub output_format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technique_id_round_trips_through_str() {
        for id in TechniqueId::ALL {
            assert_eq!(id.as_str().parse::<TechniqueId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "Nonexistent".parse::<TechniqueId>().unwrap_err();
        assert!(matches!(err, IntervoError::UnknownTechnique { id } if id == "Nonexistent"));
    }

    #[test]
    fn serde_uses_stable_keys() {
        let json = serde_json::to_string(&TechniqueId::ChainOfThought).unwrap();
        assert_eq!(json, "\"Chain-of-Thought\"");
    }
}
