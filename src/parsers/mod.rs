//! JSON parsers for the Claude Code home data file and per-session logs
//!
//! # Error Handling Strategy
//!
//! The two inputs sit on opposite sides of the fatal/soft line:
//!
//! - **Home data file**: a missing or malformed `~/.claude.json` is a setup error and is
//!   returned as a [`ReportError`](crate::error::ReportError).
//!
//! - **Session logs**: an unreadable file contributes zero events and an unparseable line
//!   is dropped on its own. Nothing below file granularity is ever propagated; skips are
//!   reported through `tracing` at debug level.

pub mod deserializers;
pub mod home_data;
pub mod session;

pub use home_data::{HomeData, load_home_data};
pub use session::{parse_session_file, parse_session_lines};
