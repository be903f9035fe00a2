//! Core chat proxy crate for the assist gateway
//!
//! Dispatches a conversation to one of two upstream LLM providers (Upstage
//! Solar, Google Gemini) and normalizes their provider-specific streaming
//! encodings into a single stream of plain-text fragments.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod handler;
pub mod protocol;
pub mod provider;
pub mod state;
pub mod stream;
pub mod types;

pub use error::LlmError;
pub use handler::chat_router;
pub use provider::{Provider, TextStream};
pub use state::{DEFAULT_MODEL, LlmState};
pub use types::{ChatMessage, Role};
