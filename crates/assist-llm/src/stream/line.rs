//! Line-delimited event framing (Upstage Solar)
//!
//! The upstream body is UTF-8 text where each logical line is independently
//! significant: `data: <json>` carries one delta, `data: [DONE]` terminates,
//! everything else is noise. Lines may be split across network chunks at any
//! byte, including mid-codepoint, so splitting happens in byte space — `\n`
//! is ASCII and never occurs inside a multi-byte UTF-8 sequence.

use super::FrameDecoder;
use crate::protocol::solar::SolarStreamChunk;

/// Event data prefix
const DATA_PREFIX: &str = "data: ";

/// End-of-stream sentinel; content-free, not an error
const DONE_SENTINEL: &str = "[DONE]";

/// Incremental decoder for line-delimited `data:` framing
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buf: Vec<u8>,
}

impl SseLineDecoder {
    /// Create a decoder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameDecoder for SseLineDecoder {
    fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut fragments = Vec::new();
        let mut consumed = 0;

        // A line is never processed until a newline terminates it; whatever
        // remains unterminated stays buffered for the next chunk.
        while let Some(offset) = self.buf[consumed..].iter().position(|&b| b == b'\n') {
            let line = &self.buf[consumed..consumed + offset];
            if let Some(text) = decode_line(line) {
                fragments.push(text);
            }
            consumed += offset + 1;
        }

        self.buf.drain(..consumed);
        fragments
    }
}

/// Decode one complete line into a fragment, if it carries content
///
/// Malformed JSON is expected here: the provider may split an event across
/// packets and a line can also be a comment or blank keep-alive. Anything
/// that does not decode is dropped, never surfaced as an error.
fn decode_line(line: &[u8]) -> Option<String> {
    let line = std::str::from_utf8(line).ok()?;
    let line = line.strip_suffix('\r').unwrap_or(line);
    let data = line.strip_prefix(DATA_PREFIX)?;

    if data == DONE_SENTINEL {
        return None;
    }

    let chunk = match serde_json::from_str::<SolarStreamChunk>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::debug!(error = %e, "skipping undecodable event line");
            return None;
        }
    };

    chunk.delta_content().filter(|content| !content.is_empty())
}
