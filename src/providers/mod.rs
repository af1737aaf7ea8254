//! AI provider abstraction for Re:Me
//!
//! This module defines the Provider trait used for every completion call the
//! journal pipeline makes (conversational reply, sentiment scoring, ability
//! scoring, weekly report), along with the concrete OpenAI-compatible
//! implementation.

pub mod base;
pub mod openai;

pub use base::{CompletionResponse, Message, Provider};
pub use openai::OpenAiProvider;
