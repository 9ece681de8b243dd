//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ai_history_report::encode_project_dir;
use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for a fake home directory holding `.claude.json` and session logs
pub struct HomeDirBuilder {
    temp_dir: TempDir,
    projects: Map<String, Value>,
    with_mapping: bool,
}

impl HomeDirBuilder {
    /// Create a builder whose data file has an empty `projects` mapping
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, projects: Map::new(), with_mapping: true }
    }

    /// Get the path to the home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Omit the `projects` mapping from the data file entirely
    pub fn without_projects_mapping(mut self) -> Self {
        self.with_mapping = false;
        self
    }

    /// Add a project entry with legacy history prompts
    pub fn with_project(mut self, path: &str, history: &[&str]) -> Self {
        let history: Vec<Value> = history.iter().map(|display| json!({ "display": display })).collect();
        self.projects.insert(path.to_string(), json!({ "history": history }));
        self
    }

    /// Add a raw project entry value
    pub fn with_project_value(mut self, path: &str, value: Value) -> Self {
        self.projects.insert(path.to_string(), value);
        self
    }

    /// Write a session file into the project's session directory
    pub fn with_session(self, project_path: &str, session: SessionFileBuilder) -> Self {
        let dir = self.session_dir(project_path);
        fs::create_dir_all(&dir).expect("Failed to create session dir");
        session.create_in(&dir);
        self
    }

    /// Session directory for a project path
    pub fn session_dir(&self, project_path: &str) -> PathBuf {
        self.temp_dir.path().join(".claude").join("projects").join(encode_project_dir(project_path))
    }

    /// Write the data file and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        let document = if self.with_mapping {
            json!({ "numStartups": 1, "projects": self.projects })
        } else {
            json!({ "numStartups": 1 })
        };
        fs::write(
            self.temp_dir.path().join(".claude.json"),
            serde_json::to_string_pretty(&document).expect("Failed to serialize data file"),
        )
        .expect("Failed to write .claude.json");
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a `.jsonl` session file
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session file with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Append an event line
    pub fn with_event(mut self, event: EventBuilder) -> Self {
        self.lines.push(event.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Render the file contents
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.contents()).expect("Failed to write session file");
    }
}

/// Builder for a single session log event
pub struct EventBuilder {
    value: Value,
}

impl EventBuilder {
    /// A user prompt with plain string content
    pub fn user(text: &str) -> Self {
        Self { value: json!({ "type": "user", "message": { "role": "user", "content": text } }) }
    }

    /// A user event carrying tool results only
    pub fn tool_result(tool_use_id: &str) -> Self {
        Self {
            value: json!({
                "type": "user",
                "message": {
                    "role": "user",
                    "content": [{ "type": "tool_result", "tool_use_id": tool_use_id, "content": "ok" }]
                }
            }),
        }
    }

    /// An assistant event with a single text item
    pub fn assistant_text(text: &str) -> Self {
        Self::assistant(json!([{ "type": "text", "text": text }]))
    }

    /// An assistant event with the given content items
    pub fn assistant(items: Value) -> Self {
        Self { value: json!({ "type": "assistant", "message": { "role": "assistant", "content": items } }) }
    }

    /// A system notice
    pub fn system(content: &str, level: &str) -> Self {
        Self { value: json!({ "type": "system", "content": content, "level": level, "isMeta": false }) }
    }

    /// A summary event
    pub fn summary(summary: &str) -> Self {
        Self { value: json!({ "type": "summary", "summary": summary }) }
    }

    /// Set the timestamp
    pub fn at(mut self, timestamp: &str) -> Self {
        self.value["timestamp"] = json!(timestamp);
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        self.value.to_string()
    }
}
