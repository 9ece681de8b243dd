//! Writing JSON and Markdown exports to disk

pub mod path;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

pub use path::{ContentMode, ExportScope, export_file_name, resolve_export_path};

use crate::config::{ExportFormat, ReportConfig};
use crate::error::ReportError;
use crate::render::{render_json, render_markdown};
use crate::report::ReportProject;

/// Render the export document for the configured format
pub fn render_export(
    projects: &[ReportProject],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> Result<String, ReportError> {
    match config.format {
        ExportFormat::Json => render_json(projects, config, now).map_err(ReportError::ExportSerialize),
        ExportFormat::Markdown => Ok(render_markdown(projects, config, now)),
    }
}

/// Open, fully write and close the destination file
fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let to_error = |source| ReportError::ExportWrite { path: path.to_path_buf(), source };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    Ok(())
}

/// Render and write an export to `target`, returning the path written
pub fn write_export(
    projects: &[ReportProject],
    config: &ReportConfig,
    target: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let document = render_export(projects, config, now)?;

    let scope = if config.current_only { ExportScope::Current } else { ExportScope::All };
    let mode = if config.with_ai { ContentMode::Conversations } else { ContentMode::History };
    let path = resolve_export_path(target, scope, mode, config.format, now)?;

    write_file(&path, &document)?;
    info!(path = %path.display(), bytes = document.len(), "Export written");
    Ok(path)
}
