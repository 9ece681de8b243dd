//! Text shaping shared by the renderers

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Short alias the product name is folded to in displayed prompts
pub const PRODUCT_ALIAS: &str = "CC";

/// The product name (or its alias) plus any parenthesized qualifier right after it
static PRODUCT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Claude Code|CC)\b(?:\s*\([^)]*\))?").expect("product name pattern is valid")
});

/// Fold the product name to its alias and drop a trailing parenthesized qualifier
pub fn fold_product_name(prompt: &str) -> Cow<'_, str> {
    PRODUCT_NAME.replace_all(prompt, PRODUCT_ALIAS)
}

/// Collapse all whitespace runs, including newlines, into single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clip text to at most `max_chars` characters, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut clipped: String = text.chars().take(max_chars - 3).collect();
    clipped.push_str("...");
    clipped
}

/// Single-line text clipped to `limit` when one is given
pub fn clip(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(max) => truncate(&single_line(text), max),
        None => text.to_string(),
    }
}

/// Human-readable byte count
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// `YYYY-MM-DD HH:MM:SS` for parseable timestamps, otherwise the text as stored
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "unknown time".to_string();
    }
    timestamp
        .parse::<DateTime<Utc>>()
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
