//! Concatenated-object framing (Google Gemini)
//!
//! The upstream body is a sequence of top-level JSON objects with no
//! delimiters the gateway can rely on (the surrounding array brackets and
//! commas of the wire form are noise). Objects are delimited with an
//! explicit scanner over {string-mode, escape-pending, brace-depth}: a
//! naive brace counter would desynchronize on any text content containing
//! literal `{` or `}` characters.

use super::FrameDecoder;
use crate::protocol::gemini::GeminiStreamChunk;

/// Incremental decoder for concatenated top-level JSON objects
#[derive(Debug, Default)]
pub struct JsonObjectDecoder {
    buf: Vec<u8>,
    /// Scan cursor into `buf`; everything before it has been classified
    pos: usize,
    /// Byte offset of the current top-level object's opening brace
    start: Option<usize>,
    /// Brace depth outside of strings
    depth: u32,
    in_string: bool,
    escaped: bool,
}

impl JsonObjectDecoder {
    /// Create a decoder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract fragments from one complete object slice, then drop it
    ///
    /// Parse failure drops the slice silently; single-object corruption is
    /// recoverable and later objects must still be emitted.
    fn take_object(&mut self, end: usize, fragments: &mut Vec<String>) {
        let start = self.start.take().unwrap_or(0);

        match serde_json::from_slice::<GeminiStreamChunk>(&self.buf[start..end]) {
            Ok(chunk) => fragments.extend(chunk.part_texts()),
            Err(e) => tracing::debug!(error = %e, "skipping undecodable stream object"),
        }

        // Drop the object and everything before it; scanning resumes from
        // the start of the remaining buffer, never from stale offsets.
        self.buf.drain(..end);
        self.pos = 0;
    }
}

impl FrameDecoder for JsonObjectDecoder {
    fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut fragments = Vec::new();

        while self.pos < self.buf.len() {
            let byte = self.buf[self.pos];

            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if byte == b'\\' {
                    self.escaped = true;
                } else if byte == b'"' {
                    self.in_string = false;
                }
            } else {
                match byte {
                    b'"' if self.depth > 0 => self.in_string = true,
                    b'{' => {
                        if self.depth == 0 {
                            self.start = Some(self.pos);
                        }
                        self.depth += 1;
                    }
                    b'}' if self.depth > 0 => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            self.take_object(self.pos + 1, &mut fragments);
                            continue;
                        }
                    }
                    // Inter-object bytes: array brackets, commas, whitespace
                    _ => {}
                }
            }

            self.pos += 1;
        }

        fragments
    }
}
