//! Session lifecycle controller.
//!
//! `InterviewController` orchestrates start / advance / end against a
//! generation backend. It owns no session state itself: the caller owns the
//! [`Session`] and passes it into every operation, which also serializes
//! advance calls by construction (`&mut` access, one outstanding request).

use super::config::{ModelConfig, StartRequest};
use super::message::Turn;
use super::model::Session;
use super::prompt::opening_prompt;
use crate::error::{IntervoError, Result};
use crate::technique;

// Forward declaration - intervo-interaction provides the HTTP-backed
// implementation. Declared here so the core has no dependency on it.
#[async_trait::async_trait]
pub trait GenerationAgent: Send + Sync {
    /// Requests one assistant completion for the given system prompt and
    /// ordered transcript, using the session's stored sampling parameters.
    ///
    /// Implementations must fail with a `Generation` error rather than
    /// returning empty content.
    async fn complete(
        &self,
        system_prompt: &str,
        transcript: &[Turn],
        model_config: &ModelConfig,
    ) -> Result<String>;
}

/// Drives the interview state machine: Inactive --start--> Active,
/// Active --advance--> Active (transcript grows by two), Active --end--> Inactive.
pub struct InterviewController<A: GenerationAgent> {
    agent: A,
}

impl<A: GenerationAgent> InterviewController<A> {
    /// Creates a controller backed by the given generation agent.
    pub fn new(agent: A) -> Self {
        Self { agent }
    }

    /// Starts an interview on an inactive session.
    ///
    /// Builds the opening prompt for the requested role and difficulty
    /// (optionally grounded in a job description), sends it as a single
    /// user-role message behind the technique's system prompt, and stores the
    /// reply as the first transcript turn. The opening prompt itself is never
    /// stored; the transcript begins with the interviewer's opening question.
    ///
    /// Start does not partially commit: if the generation call fails, the
    /// session keeps its empty transcript and stays inactive.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyActive` if the session is already running
    /// - `InvalidConfig` for an empty role or out-of-range sampling parameters
    /// - `Generation` if the backend call fails
    pub async fn start(&self, session: &mut Session, request: StartRequest) -> Result<()> {
        if session.active {
            return Err(IntervoError::SessionAlreadyActive);
        }

        let config = request.into_config()?;
        let strategy = technique::lookup(config.technique);

        let seed = [Turn::user(opening_prompt(&config))];
        let opening = self
            .agent
            .complete(strategy.system_prompt, &seed, &config.model_config)
            .await?;

        session.transcript.clear();
        session.push_turn(Turn::assistant(opening));
        session.config = Some(config);
        session.active = true;
        Ok(())
    }

    /// Sends one candidate answer and records the interviewer's reply.
    ///
    /// The entire transcript is resent behind the technique's system prompt on
    /// every call - no sliding window, no summarization - so the model keeps
    /// full memory of earlier answers.
    ///
    /// On a generation failure the already-appended user turn is kept rather
    /// than rolled back, preserving the candidate's answer for a retry.
    ///
    /// # Errors
    ///
    /// - `SessionNotActive` if no interview is running
    /// - `InvalidConfig` if the message is empty
    /// - `Generation` if the backend call fails
    pub async fn advance(&self, session: &mut Session, user_message: &str) -> Result<()> {
        if !session.active {
            return Err(IntervoError::SessionNotActive);
        }
        if user_message.trim().is_empty() {
            return Err(IntervoError::invalid_config("user message is empty"));
        }

        let config = session
            .config
            .clone()
            .ok_or(IntervoError::SessionNotActive)?;
        let strategy = technique::lookup(config.technique);

        session.push_turn(Turn::user(user_message));
        let reply = self
            .agent
            .complete(strategy.system_prompt, &session.transcript, &config.model_config)
            .await?;
        session.push_turn(Turn::assistant(reply));
        Ok(())
    }

    /// Ends the interview. Idempotent: calling it on an inactive session is
    /// a no-op.
    pub fn end(&self, session: &mut Session) {
        if !session.active {
            return;
        }
        session.reset();
    }
}
