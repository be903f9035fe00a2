//! Upstage Solar (OpenAI-style) chat completion wire format

use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

// -- Request types --

/// Solar chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct SolarRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the response; always true for this gateway
    pub stream: bool,
}

impl SolarRequest {
    /// Build a streaming request from a conversation
    pub fn new(model: &str, messages: &[ChatMessage]) -> Self {
        Self {
            model: model.to_owned(),
            messages: messages.to_vec(),
            stream: true,
        }
    }
}

// -- Streaming response types --

/// One decoded SSE data payload from the Solar stream
#[derive(Debug, Deserialize)]
pub struct SolarStreamChunk {
    /// Completion choices; only the first is consulted
    #[serde(default)]
    pub choices: Vec<SolarStreamChoice>,
}

/// Choice within a streaming chunk
#[derive(Debug, Deserialize)]
pub struct SolarStreamChoice {
    /// Incremental update
    #[serde(default)]
    pub delta: SolarDelta,
}

/// Incremental content delta
#[derive(Debug, Default, Deserialize)]
pub struct SolarDelta {
    /// Incremental text content; absent on role/finish chunks
    #[serde(default)]
    pub content: Option<String>,
}

impl SolarStreamChunk {
    /// Text content of the first choice's delta, if any
    pub fn delta_content(self) -> Option<String> {
        self.choices.into_iter().next()?.delta.content
    }
}
