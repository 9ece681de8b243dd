//! Tool call summaries and per-tool salient parameters

use std::path::Path;

use serde_json::Value;

use super::text::{single_line, truncate};
use crate::models::ContentBlock;

/// Longest command string shown for a shell tool call
const COMMAND_DETAIL_LIMIT: usize = 60;

/// Singular and plural phrasing per known tool
const TOOL_PHRASES: &[(&str, &str, &str)] = &[
    ("Read", "read", "reads"),
    ("Write", "write", "writes"),
    ("Edit", "edit", "edits"),
    ("MultiEdit", "multi-edit", "multi-edits"),
    ("NotebookEdit", "notebook edit", "notebook edits"),
    ("Bash", "command", "commands"),
    ("Grep", "search", "searches"),
    ("Glob", "glob", "globs"),
    ("LS", "listing", "listings"),
    ("WebFetch", "web fetch", "web fetches"),
    ("WebSearch", "web search", "web searches"),
    ("TodoWrite", "todo update", "todo updates"),
    ("Task", "subtask", "subtasks"),
];

/// Count tool calls by name, in order of first appearance
pub fn count_tools<'a, I>(blocks: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a ContentBlock>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for block in blocks {
        if let ContentBlock::ToolUse { tool, .. } = block {
            match counts.iter_mut().find(|(name, _)| *name == tool.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((tool.as_str(), 1)),
            }
        }
    }
    counts
}

pub fn tool_phrase(tool: &str, count: usize) -> String {
    match TOOL_PHRASES.iter().find(|(name, _, _)| *name == tool) {
        Some((_, one, many)) => format!("{} {}", count, if count == 1 { one } else { many }),
        None => format!("used {} {} {}", tool, count, if count == 1 { "time" } else { "times" }),
    }
}

/// Comma-separated per-tool counts, e.g. `3 reads, 1 edit, 2 commands`
pub fn summarize_tools(blocks: &[ContentBlock]) -> Option<String> {
    let counts = count_tools(blocks);
    if counts.is_empty() {
        return None;
    }
    Some(counts.iter().map(|(tool, count)| tool_phrase(tool, *count)).collect::<Vec<_>>().join(", "))
}

fn str_field<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// The salient parameter of a known tool call; `None` for unknown tools
pub fn tool_detail(tool: &str, input: &Value) -> Option<String> {
    match tool {
        "Read" | "Write" | "Edit" | "MultiEdit" => str_field(input, "file_path").map(basename),
        "NotebookEdit" => str_field(input, "notebook_path").map(basename),
        "Bash" => str_field(input, "command")
            .map(|command| truncate(&single_line(command), COMMAND_DETAIL_LIMIT)),
        "Grep" | "Glob" => str_field(input, "pattern").map(str::to_string),
        _ => None,
    }
}

/// `Tool: detail`, or just the tool name when nothing salient is known
pub fn describe_tool_call(tool: &str, input: &Value) -> String {
    match tool_detail(tool, input) {
        Some(detail) => format!("{tool}: {detail}"),
        None => tool.to_string(),
    }
}
