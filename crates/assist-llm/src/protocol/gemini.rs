//! Google Generative Language API wire format

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Role};

// -- Request types --

/// Gemini `streamGenerateContent` request
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,
}

/// Content object containing role and parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role ("user" or "model")
    pub role: String,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Text part within a content object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text string
    #[serde(default)]
    pub text: String,
}

/// Map an internal role onto Gemini's role vocabulary
///
/// Gemini has no `system` role in `contents`; system messages pass through
/// as `user`, matching the behavior this gateway has always had.
pub fn role_for_gemini(role: Role) -> &'static str {
    match role {
        Role::System | Role::User => "user",
        Role::Assistant => "model",
    }
}

impl GeminiRequest {
    /// Build a request from a conversation
    pub fn new(messages: &[ChatMessage]) -> Self {
        let contents = messages
            .iter()
            .map(|msg| GeminiContent {
                role: role_for_gemini(msg.role).to_owned(),
                parts: vec![GeminiPart {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        Self { contents }
    }
}

// -- Streaming response types --

/// One decoded top-level object from the Gemini stream
#[derive(Debug, Deserialize)]
pub struct GeminiStreamChunk {
    /// Response candidates; only the first is consulted
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Candidate within a streaming chunk
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Generated content; absent on metadata-only chunks
    #[serde(default)]
    pub content: Option<GeminiCandidateContent>,
}

/// Content of a candidate
#[derive(Debug, Default, Deserialize)]
pub struct GeminiCandidateContent {
    /// Ordered text parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiStreamChunk {
    /// Non-empty texts of the first candidate's parts, in array order
    pub fn part_texts(self) -> Vec<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .filter(|text| !text.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
