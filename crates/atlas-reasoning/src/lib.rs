//! Atlas Reasoning - structured paragraph analysis through a hosted LLM.
//!
//! Sends a paragraph to an OpenAI-compatible chat-completion endpoint and
//! validates the reply against the [`Analysis`] schema.

pub mod analysis;
pub mod client;
pub mod error;
pub mod prompt;

pub use analysis::*;
pub use client::{ReasoningClient, ReasoningConfig};
pub use error::ReasoningError;
pub use prompt::build_prompt;
