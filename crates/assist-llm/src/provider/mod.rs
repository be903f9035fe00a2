//! Provider adapters for the two upstream LLM backends
//!
//! An adapter translates a uniform request (model + conversation) into
//! exactly one upstream HTTP call and returns the response already
//! normalized into plain-text fragments. One call, one stream, one reader:
//! no negotiation, no fallback, no retry across providers.

pub mod gemini;
pub mod solar;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::error::LlmError;
use crate::types::ChatMessage;

/// Normalized fragment stream returned by every provider
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// Trait implemented by each upstream provider backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Issue one streaming chat call and normalize its response
    ///
    /// On upstream non-2xx this fails with `LlmError::Upstream` without
    /// ever starting a body stream.
    async fn stream_chat(&self, model: &str, messages: &[ChatMessage]) -> Result<TextStream, LlmError>;
}
