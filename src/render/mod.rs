//! Report renderers
//!
//! Three independent consumers of the same [`ReportProject`](crate::report::ReportProject)
//! list: a plain terminal report, a JSON export and a Markdown export. Each applies its
//! own truncation and detail policy; none of them fails on a malformed response segment,
//! which is shown as raw text instead.

pub mod json;
pub mod markdown;
pub mod terminal;
pub mod text;
pub mod tools;

pub use json::render_json;
pub use markdown::render_markdown;
pub use terminal::render_terminal;
