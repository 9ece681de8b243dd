//! Terminal output sanitization
//!
//! Prompts and responses come straight from session logs. Before they are
//! printed to a terminal, escape sequences that could move the cursor, clear
//! the screen or recolour output are removed.

use std::sync::LazyLock;

use regex::Regex;

/// CSI sequences (`ESC [ params letter`) and OSC sequences (`ESC ] ... BEL|ST`)
static ESCAPE_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("escape sequence pattern is valid")
});

/// Strips ANSI escape sequences and control characters other than tab and newlines
///
/// # Examples
///
/// ```
/// use ai_history_report::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mRed text\x1b[0m"), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    ESCAPE_SEQUENCE
        .replace_all(text, "")
        .chars()
        .filter(|&ch| !ch.is_control() || matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}
