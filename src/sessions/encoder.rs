//! Text encoding of a pair's response blocks.
//!
//! Each block is written as one compact JSON record. Compact JSON never
//! contains a raw newline, so records joined by [`SEGMENT_SEPARATOR`] can be
//! split back apart unambiguously. Decoding is lenient: a segment that no
//! longer parses (e.g. a log captured from interrupted output) becomes a
//! [`ContentBlock::Raw`] holding the trimmed text.

use tracing::debug;

use crate::models::ContentBlock;

/// Separator between encoded blocks of one response
pub const SEGMENT_SEPARATOR: &str = "\n\n";

pub fn encode_block(block: &ContentBlock) -> String {
    serde_json::to_string(block).unwrap_or_else(|_| match block {
        ContentBlock::Text { content }
        | ContentBlock::Thinking { content }
        | ContentBlock::Raw { content } => content.clone(),
        other => format!("{other:?}"),
    })
}

/// Encode a block buffer into the response text stored on a pair
pub fn encode_blocks(blocks: &[ContentBlock]) -> String {
    blocks.iter().map(encode_block).collect::<Vec<_>>().join(SEGMENT_SEPARATOR)
}

/// Split response text into trimmed, non-empty segments
pub fn split_segments(response: &str) -> Vec<&str> {
    response.split(SEGMENT_SEPARATOR).map(str::trim).filter(|s| !s.is_empty()).collect()
}

pub fn decode_segment(segment: &str) -> ContentBlock {
    let segment = segment.trim();
    serde_json::from_str(segment).unwrap_or_else(|e| {
        debug!(error = %e, "Response segment did not re-parse; keeping raw text");
        ContentBlock::Raw { content: segment.to_string() }
    })
}

/// Decode response text back into blocks, never failing
pub fn decode_response(response: &str) -> Vec<ContentBlock> {
    split_segments(response).into_iter().map(decode_segment).collect()
}
