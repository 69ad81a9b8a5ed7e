//! Interview session domain module.
//!
//! # Module Structure
//!
//! - `model`: the caller-owned session entity (`Session`)
//! - `message`: transcript turn types (`TurnRole`, `Turn`)
//! - `config`: session/model configuration (`StartRequest`, `SessionConfig`,
//!   `ModelConfig`, `Difficulty`)
//! - `prompt`: opening-prompt assembly
//! - `controller`: lifecycle orchestration (`InterviewController`) and the
//!   `GenerationAgent` backend seam

mod config;
mod controller;
mod message;
mod model;
mod prompt;

// Re-export public API
pub use config::{Difficulty, ModelConfig, SessionConfig, StartRequest};
pub use controller::{GenerationAgent, InterviewController};
pub use message::{Turn, TurnRole};
pub use model::Session;
pub use prompt::opening_prompt;
