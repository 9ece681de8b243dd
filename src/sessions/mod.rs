//! Session log loading and conversation reconstruction
//!
//! Data flows strictly downward through this module:
//!
//! 1. [`discovery`] lists the `.jsonl` session files for a project path
//! 2. [`parsers::session`](crate::parsers::session) turns each file into raw events
//! 3. [`timeline`] merges all files into one chronologically ordered stream
//! 4. [`reconstruct`] folds the stream into [`ConversationPair`]s, using
//!    [`encoder`] to store each response as text
//!
//! Nothing in this module fails: missing directories, unreadable files and
//! malformed lines all degrade to fewer events.

pub mod discovery;
pub mod encoder;
pub mod reconstruct;
pub mod timeline;

use std::path::Path;

pub use discovery::{discover_session_files, session_dir};
pub use encoder::{SEGMENT_SEPARATOR, decode_response, encode_blocks};
pub use reconstruct::{Reconstructor, reconstruct_conversations};
pub use timeline::merge_timeline;

use crate::models::{ConversationPair, RawEvent};
use crate::parsers::parse_session_file;

/// Load every session file of a project and merge them into one timeline
pub fn load_project_events(projects_dir: &Path, project_path: &str) -> Vec<RawEvent> {
    let files = discover_session_files(projects_dir, project_path)
        .iter()
        .map(|path| parse_session_file(path))
        .collect();
    merge_timeline(files)
}

/// Reconstruct the conversation pairs of a project from its session logs
pub fn load_conversations(projects_dir: &Path, project_path: &str) -> Vec<ConversationPair> {
    reconstruct_conversations(&load_project_events(projects_dir, project_path))
}
