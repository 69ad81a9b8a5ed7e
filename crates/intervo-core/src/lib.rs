//! Intervo core - the session/state machine and prompt-assembly layer behind
//! an LLM-driven mock-interview practice tool.
//!
//! The core is a library invoked by a UI process. It owns:
//!
//! - the [`technique`] registry of prompting strategies,
//! - the [`session`] model and its lifecycle controller,
//! - the [`validation`] prompt/parse contract for the external input
//!   validator.
//!
//! Network I/O lives behind the [`session::GenerationAgent`] trait; the
//! `intervo-interaction` crate provides the HTTP-backed implementation.

pub mod error;
pub mod session;
pub mod technique;
pub mod validation;

// Re-export common error type
pub use error::{IntervoError, Result};
