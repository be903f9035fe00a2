//! Streaming response normalization
//!
//! Converts an upstream byte stream in one of the two known provider
//! framings into a uniform stream of plain-text fragments. The consumer
//! never learns which provider produced the bytes: it only sees text,
//! end-of-stream, or an error.

mod line;
mod object;

pub use line::SseLineDecoder;
pub use object::JsonObjectDecoder;

use futures_util::{Stream, StreamExt};

use crate::error::LlmError;

/// Incremental frame decoder for one provider framing
///
/// A decoder owns the parser state for exactly one upstream call: an
/// accumulation buffer plus whatever scan cursor the framing needs. Each
/// `feed` accepts one raw chunk (with no alignment guarantee — chunks may
/// split mid-UTF-8-codepoint or mid-JSON-token) and returns every fragment
/// that became decodable, in order. Empty fragments are never returned.
pub trait FrameDecoder {
    /// Consume one raw chunk, returning newly completed text fragments
    fn feed(&mut self, chunk: &[u8]) -> Vec<String>;
}

/// Lift a frame decoder over a fallible byte stream
///
/// Yields zero or more fragments per upstream chunk. A transport error is
/// propagated into the output stream; normal end-of-stream closes the
/// output cleanly regardless of unconsumed buffer content.
pub fn fragment_stream<S, B, E, D>(bytes: S, decoder: D) -> impl Stream<Item = Result<String, LlmError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
    D: FrameDecoder + Send + 'static,
{
    let mut decoder = decoder;
    bytes
        .map(move |result| match result {
            Ok(chunk) => decoder.feed(chunk.as_ref()).into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(LlmError::Streaming(e.to_string()))],
        })
        .flat_map(futures_util::stream::iter)
}
