use serde::{Deserialize, Serialize};

use super::ContentBlock;
use crate::sessions::encoder::{decode_response, split_segments};

/// One reconstructed request/response turn.
///
/// The response is kept in its encoded text form so that renderers can both
/// decode it into blocks and dump the raw segments verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPair {
    pub user_prompt: String,
    pub claude_response: Option<String>,
    pub timestamp: String,
}

impl ConversationPair {
    /// Decoded response blocks; empty when no assistant activity was recorded
    pub fn blocks(&self) -> Vec<ContentBlock> {
        self.claude_response.as_deref().map(decode_response).unwrap_or_default()
    }

    /// Raw encoded segments, untouched by decoding
    pub fn segments(&self) -> Vec<&str> {
        self.claude_response.as_deref().map(split_segments).unwrap_or_default()
    }

    pub fn has_response(&self) -> bool {
        self.claude_response.is_some()
    }
}
