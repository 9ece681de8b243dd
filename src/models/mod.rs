//! Data models for Claude Code session logs and report output.
//!
//! - [`RawEvent`] - One line of a per-session `.jsonl` log
//! - [`ContentBlock`] - Tagged unit of assistant activity inside a reconstructed turn
//! - [`ConversationPair`] - A user prompt plus the aggregated response that followed it
//! - [`ProjectRecord`] - Size metrics and legacy history for one project
//!
//! Session lines are deserialized leniently: every field is optional and the
//! `timestamp` field goes through a custom deserializer in `parsers::deserializers`.

pub mod content;
pub mod conversation;
pub mod event;
pub mod project;

pub use content::{ContentBlock, value_text};
pub use conversation::ConversationPair;
pub use event::{ContentItem, EventContent, EventKind, EventMessage, RawEvent};
pub use project::{HistoryItem, ProjectRecord};
