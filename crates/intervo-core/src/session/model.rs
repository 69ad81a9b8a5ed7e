//! Session domain model.
//!
//! A `Session` is the explicit, caller-owned record of one in-progress mock
//! interview. There is no process-wide session slot; the caller passes the
//! session into every controller operation.

use super::config::SessionConfig;
use super::message::{Turn, TurnRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The mutable state of one mock interview.
///
/// Lifecycle:
/// - created inactive with an empty transcript,
/// - activated by a successful `start` (config set, opening assistant turn),
/// - grown by two turns per `advance`,
/// - reset by `end` (config and transcript cleared, inactive).
///
/// While active, transcript roles strictly alternate starting with the
/// interviewer's opening question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the transcript last changed (ISO 8601 format)
    pub updated_at: String,
    /// Interview configuration; `None` while inactive
    pub config: Option<SessionConfig>,
    /// Ordered interview transcript
    pub transcript: Vec<Turn>,
    /// Whether an interview is currently in progress
    pub active: bool,
}

impl Session {
    /// Creates a fresh, inactive session.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            config: None,
            transcript: Vec::new(),
            active: false,
        }
    }

    /// Appends a turn and refreshes the updated timestamp.
    pub(crate) fn push_turn(&mut self, turn: Turn) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self.transcript.push(turn);
    }

    /// Clears config and transcript and marks the session inactive.
    pub(crate) fn reset(&mut self) {
        self.config = None;
        self.transcript.clear();
        self.active = false;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// The role expected for the next transcript turn while active.
    pub fn next_role(&self) -> TurnRole {
        match self.transcript.last() {
            Some(turn) if turn.role == TurnRole::Assistant => TurnRole::User,
            Some(_) => TurnRole::Assistant,
            None => TurnRole::Assistant,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_inactive_and_empty() {
        let session = Session::new();
        assert!(!session.active);
        assert!(session.transcript.is_empty());
        assert!(session.config.is_none());
        assert!(!session.id.is_empty());
    }

    #[test]
    fn sessions_get_unique_ids() {
        assert_ne!(Session::new().id, Session::new().id);
    }

    #[test]
    fn next_role_alternates() {
        let mut session = Session::new();
        assert_eq!(session.next_role(), TurnRole::Assistant);
        session.push_turn(Turn::assistant("opening question"));
        assert_eq!(session.next_role(), TurnRole::User);
        session.push_turn(Turn::user("an answer"));
        assert_eq!(session.next_role(), TurnRole::Assistant);
    }
}
