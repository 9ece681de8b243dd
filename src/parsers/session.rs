use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::models::RawEvent;

/// Parse a session log file into raw events.
///
/// Never fails: an unreadable file contributes zero events and a line that is
/// not valid JSON is skipped without affecting any other line.
pub fn parse_session_file(path: &Path) -> Vec<RawEvent> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unreadable session file");
            return Vec::new();
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let events = parse_session_lines(&text);
    debug!(path = %path.display(), events = events.len(), "Parsed session file");
    events
}

/// Parse line-delimited JSON text into raw events, dropping unparseable lines
pub fn parse_session_lines(text: &str) -> Vec<RawEvent> {
    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<RawEvent>(line) {
            Ok(event) => events.push(event),
            Err(e) => {
                skipped += 1;
                debug!(line = line_num + 1, error = %e, "Dropping unparseable session line");
            }
        }
    }

    if skipped > 0 {
        debug!(parsed = events.len(), skipped, "Session lines skipped");
    }

    events
}
