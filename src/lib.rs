//! AI History Report - Project history and conversation reports for Claude Code
//!
//! This library reads Claude Code's home data file (`~/.claude.json`) and the
//! per-project session logs under `~/.claude/projects/`. It supports:
//!
//! - Aggregating and sorting projects with their legacy prompt history
//! - Tolerant parsing and time-ordered merging of session log files
//! - Reconstructing request/response conversation pairs from the event stream
//! - Rendering reports to the terminal, JSON or Markdown
//!
//! # Example
//!
//! ```no_run
//! use ai_history_report::{ReportConfig, load_report};
//!
//! let mut config = ReportConfig::new("/Users/alice", "/Users/alice/src/app");
//! config.with_ai = true;
//! if let Some(projects) = load_report(&config)? {
//!     println!("Loaded {} projects", projects.len());
//! }
//! # Ok::<(), ai_history_report::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod projects;
pub mod render;
pub mod report;
pub mod sessions;
pub mod utils;

// Re-export commonly used types
pub use config::ReportConfig;
pub use error::ReportError;
pub use models::{ContentBlock, ConversationPair};
pub use report::{ReportProject, load_report};
pub use sessions::reconstruct_conversations;
pub use utils::paths::{encode_project_dir, format_path_with_tilde};
pub use utils::terminal::strip_ansi_codes;
