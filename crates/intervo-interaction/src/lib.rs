//! HTTP-backed interaction layer for the Intervo interview core.
//!
//! Provides the OpenAI chat-completions implementation of
//! [`intervo_core::session::GenerationAgent`] and the LLM-backed input
//! validator invoked before a session starts.

pub mod openai_agent;
pub mod validator;

pub use openai_agent::OpenAiAgent;
pub use validator::InputValidator;
