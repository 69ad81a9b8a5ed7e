//! Transcript turn types.
//!
//! A turn is one message in the interview transcript. Only the two
//! conversational roles exist here: the technique's system prompt is attached
//! at request time and is never stored as a turn.

use serde::{Deserialize, Serialize};

/// The author of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// The interviewer (model-authored).
    Assistant,
    /// The candidate (user-authored).
    User,
}

impl TurnRole {
    /// Returns the wire-format role tag used by the generation service.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::Assistant => "assistant",
            TurnRole::User => "user",
        }
    }
}

/// A single turn in the interview transcript.
///
/// Insertion order is the conversation order and is replayed verbatim on
/// every subsequent generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The author of the turn.
    pub role: TurnRole,
    /// The text content of the turn.
    pub content: String,
    /// Timestamp when the turn was recorded (ISO 8601 format).
    pub timestamp: String,
}

impl Turn {
    /// Creates a turn stamped with the current time.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Shorthand for an interviewer turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    /// Shorthand for a candidate turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }
}
