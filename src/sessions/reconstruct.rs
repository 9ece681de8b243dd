//! Regrouping of a merged event stream into conversation pairs.
//!
//! The algorithm is a fold over events with an explicit [`Reconstructor`]
//! state: the currently open prompt with its response buffer, and a
//! `collecting` flag that is set once assistant activity has been seen since
//! that prompt. System and summary events only join a response while
//! collecting.

use crate::models::{
    ContentBlock, ContentItem, ConversationPair, EventContent, EventKind, RawEvent,
};
use crate::sessions::encoder::encode_blocks;

#[derive(Debug, Clone, Default)]
struct OpenPair {
    prompt: String,
    timestamp: Option<String>,
    blocks: Vec<ContentBlock>,
}

/// Reconstruction state threaded through the event fold
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    open: Option<OpenPair>,
    collecting: bool,
    last_timestamp: Option<String>,
    pairs: Vec<ConversationPair>,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs emitted so far, in prompt order
    pub fn pairs(&self) -> &[ConversationPair] {
        &self.pairs
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    /// Prompt of the pair still being collected, if any
    pub fn open_prompt(&self) -> Option<&str> {
        self.open.as_ref().map(|p| p.prompt.as_str())
    }

    /// Apply one event and return the next state
    pub fn step(mut self, event: &RawEvent) -> Self {
        match event.kind {
            EventKind::User => {
                if let Some(prompt) = event.prompt_text() {
                    self.open_pair(prompt, event.timestamp.clone());
                }
            }
            EventKind::Assistant => {
                self.collecting = true;
                let blocks = assistant_blocks(event);
                if let Some(open) = self.open.as_mut() {
                    open.blocks.extend(blocks);
                }
            }
            EventKind::System => {
                if self.collecting {
                    self.push(ContentBlock::System {
                        content: event.content.clone().unwrap_or_default(),
                        is_meta: event.is_meta.unwrap_or(false),
                        level: event.level.clone().unwrap_or_default(),
                    });
                }
            }
            EventKind::Summary => {
                if self.collecting {
                    self.push(ContentBlock::Summary {
                        summary: event.summary.clone().unwrap_or_default(),
                    });
                }
            }
            EventKind::Other => {}
        }

        if event.timestamp.is_some() {
            self.last_timestamp.clone_from(&event.timestamp);
        }
        self
    }

    /// Flush the trailing pair and return every reconstructed pair
    pub fn finish(mut self) -> Vec<ConversationPair> {
        if let Some(open) = self.open.take() {
            let pair = self.close(open);
            self.pairs.push(pair);
        }
        self.pairs
    }

    fn open_pair(&mut self, prompt: &str, timestamp: Option<String>) {
        // A prompt that never received a response is superseded by this one.
        if let Some(open) = self.open.take().filter(|open| !open.blocks.is_empty()) {
            let pair = self.close(open);
            self.pairs.push(pair);
        }
        self.collecting = false;
        self.open = Some(OpenPair { prompt: prompt.to_string(), timestamp, blocks: Vec::new() });
    }

    fn push(&mut self, block: ContentBlock) {
        if let Some(open) = self.open.as_mut() {
            open.blocks.push(block);
        }
    }

    fn close(&self, open: OpenPair) -> ConversationPair {
        let timestamp =
            open.timestamp.or_else(|| self.last_timestamp.clone()).unwrap_or_default();
        let claude_response =
            if open.blocks.is_empty() { None } else { Some(encode_blocks(&open.blocks)) };
        ConversationPair { user_prompt: open.prompt, claude_response, timestamp }
    }
}

/// Blocks contributed by one assistant event, in content order
fn assistant_blocks(event: &RawEvent) -> Vec<ContentBlock> {
    match event.body() {
        Some(EventContent::Text(text)) => vec![ContentBlock::Text { content: text.clone() }],
        Some(EventContent::Items(items)) => items
            .iter()
            .filter_map(|item| match ContentItem::from_value(item) {
                ContentItem::Text { text } => Some(ContentBlock::Text { content: text }),
                ContentItem::ToolUse { name, input } => {
                    Some(ContentBlock::ToolUse { tool: name, input })
                }
                ContentItem::Thinking { thinking } => {
                    Some(ContentBlock::Thinking { content: thinking })
                }
                ContentItem::Unsupported => None,
            })
            .collect(),
        Some(EventContent::Other(_)) | None => Vec::new(),
    }
}

/// Reconstruct conversation pairs from a chronologically ordered event stream
pub fn reconstruct_conversations<'a, I>(events: I) -> Vec<ConversationPair>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    events.into_iter().fold(Reconstructor::new(), Reconstructor::step).finish()
}
