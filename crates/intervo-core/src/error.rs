//! Error types for the Intervo interview core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the interview session core.
///
/// This provides typed, structured error variants so callers can branch on
/// the failure kind instead of matching on message strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum IntervoError {
    /// A technique identifier did not resolve in the registry
    #[error("Unknown prompt technique: '{id}'")]
    UnknownTechnique { id: String },

    /// Start was called while a session is already running
    #[error("An interview session is already active")]
    SessionAlreadyActive,

    /// Advance was called without an active session
    #[error("No interview session is active")]
    SessionNotActive,

    /// A session parameter was rejected before any request was sent
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    /// The generation service failed (transport, non-2xx, malformed or
    /// empty response). The core never retries; `is_retryable` is a hint
    /// for a wrapping collaborator that does.
    #[error("Generation request failed: {message}")]
    Generation {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },
}

impl IntervoError {
    /// Creates an UnknownTechnique error
    pub fn unknown_technique(id: impl Into<String>) -> Self {
        Self::UnknownTechnique { id: id.into() }
    }

    /// Creates an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Creates a non-retryable Generation error with no HTTP status
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            status_code: None,
            message: message.into(),
            is_retryable: false,
        }
    }

    /// Creates a Generation error carrying an HTTP status code
    pub fn generation_with_status(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
    ) -> Self {
        Self::Generation {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
        }
    }

    /// Check if this is a Generation error
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }

    /// Check if this is a session lifecycle misuse
    /// (Start while active, or Advance without a session)
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::SessionAlreadyActive | Self::SessionNotActive)
    }
}

/// A type alias for `Result<T, IntervoError>`.
pub type Result<T> = std::result::Result<T, IntervoError>;
