use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::deserializers::{deserialize_event_kind, deserialize_lenient as lenient};

/// Top-level `type` of a session log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    User,
    Assistant,
    System,
    Summary,
    #[default]
    #[serde(other)]
    Other,
}

/// Body of a message: either a bare string or an ordered list of content items.
///
/// Items stay as raw JSON so a single malformed item never rejects the line;
/// they are interpreted lazily through [`ContentItem::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventContent {
    Text(String),
    Items(Vec<Value>),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<EventContent>,
}

/// One parsed line of a session log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type", default, deserialize_with = "deserialize_event_kind")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<EventMessage>,
    /// Top-level body used by `system` events
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_meta: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<String>,
    /// Payload of `summary` events
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub uuid: Option<String>,
}

impl RawEvent {
    pub fn role(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.role.as_deref())
    }

    /// Message body, if the event carries one
    pub fn body(&self) -> Option<&EventContent> {
        self.message.as_ref().and_then(|m| m.content.as_ref())
    }

    /// Point in time of this event; missing or unparseable timestamps sort as the epoch
    pub fn time(&self) -> DateTime<Utc> {
        self.timestamp
            .as_deref()
            .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Prompt text carried by a user event: a plain string body, or the first
    /// `text` item of an item array. Empty text counts as none.
    pub fn prompt_text(&self) -> Option<&str> {
        let text = match self.body()? {
            EventContent::Text(text) => Some(text.as_str()),
            EventContent::Items(items) => items
                .iter()
                .find(|item| item.get("type").and_then(Value::as_str) == Some("text"))
                .and_then(|item| item.get("text"))
                .and_then(Value::as_str),
            EventContent::Other(_) => None,
        }?;
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Typed view of one assistant content item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    #[serde(other)]
    Unsupported,
}

impl ContentItem {
    pub fn from_value(value: &Value) -> Self {
        ContentItem::deserialize(value).unwrap_or(ContentItem::Unsupported)
    }
}
