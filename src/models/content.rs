use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized unit of assistant-side activity within a conversation pair.
///
/// Serialized with an internal `type` tag so each block is a self-describing
/// JSON record. [`ContentBlock::Raw`] is never produced by reconstruction; it
/// only appears when a stored segment fails to parse back into a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        content: String,
    },
    ToolUse {
        tool: String,
        input: Value,
    },
    Thinking {
        content: String,
    },
    System {
        content: Value,
        #[serde(rename = "isMeta", default)]
        is_meta: bool,
        #[serde(default)]
        level: String,
    },
    Summary {
        summary: Value,
    },
    Raw {
        content: String,
    },
}

impl ContentBlock {
    /// Variant tag as written in the encoded record
    pub fn tag(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::ToolUse { .. } => "tool_use",
            ContentBlock::Thinking { .. } => "thinking",
            ContentBlock::System { .. } => "system",
            ContentBlock::Summary { .. } => "summary",
            ContentBlock::Raw { .. } => "raw",
        }
    }
}

/// Render a JSON payload as display text: strings verbatim, anything else as compact JSON
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
