use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ExportFormat;
use crate::error::ReportError;

/// Which projects an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Current,
    All,
}

impl ExportScope {
    pub fn marker(&self) -> &'static str {
        match self {
            ExportScope::Current => "current",
            ExportScope::All => "all",
        }
    }
}

/// What each exported project carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Conversations,
    History,
}

impl ContentMode {
    pub fn marker(&self) -> &'static str {
        match self {
            ContentMode::Conversations => "conversations",
            ContentMode::History => "history",
        }
    }
}

/// Whether the target names a directory: an existing one, or a path ending in a separator
fn is_directory_target(target: &Path) -> bool {
    if target.is_dir() {
        return true;
    }
    let text = target.as_os_str().to_string_lossy();
    !target.exists() && (text.ends_with('/') || text.ends_with(MAIN_SEPARATOR))
}

/// Generated export file name, e.g. `claude-history-all-conversations-20240301-120000.json`
pub fn export_file_name(
    scope: ExportScope,
    mode: ContentMode,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> String {
    format!(
        "claude-history-{}-{}-{}.{}",
        scope.marker(),
        mode.marker(),
        now.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Decide the final export file path.
///
/// A directory target (existing, or a non-existent path ending in a separator)
/// gets an auto-generated file name and is created if missing. Any other
/// target is used as a literal file path.
pub fn resolve_export_path(
    target: &Path,
    scope: ExportScope,
    mode: ContentMode,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    if !is_directory_target(target) {
        return Ok(target.to_path_buf());
    }

    if !target.exists() {
        debug!(dir = %target.display(), "Creating export directory");
        fs::create_dir_all(target)
            .map_err(|source| ReportError::ExportWrite { path: target.to_path_buf(), source })?;
    }

    Ok(target.join(export_file_name(scope, mode, format, now)))
}
