//! Report configuration injected into loading and rendering.
//!
//! Library code never reads the environment, the working directory or the
//! command line; the binary assembles a [`ReportConfig`] once and passes it down.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ReportError;
use crate::projects::SortSpec;
use crate::utils::{data_file_path, projects_dir};

pub const DEFAULT_WIDTH: usize = 80;

/// Width reserved for index and indentation on terminal prompt lines
pub const PROMPT_CHROME: usize = 10;
/// Width reserved for indentation and markers on terminal response lines
pub const RESPONSE_CHROME: usize = 12;
/// Width reserved on legacy history lines
pub const HISTORY_CHROME: usize = 6;
/// Width reserved for list markers in Markdown summary mode
pub const MARKDOWN_CHROME: usize = 4;

/// Order in which conversations and history items are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HistoryOrder {
    Chronological,
    /// Newest first
    #[default]
    Reverse,
}

impl HistoryOrder {
    /// Reorder a chronological sequence for display
    pub fn arrange<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if *self == HistoryOrder::Reverse {
            items.reverse();
        }
        items
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryOrder::Chronological => "chronological",
            HistoryOrder::Reverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Home directory holding `.claude.json` and `.claude/projects`
    pub home_dir: PathBuf,
    /// Working directory used by the current-project filter
    pub cwd: PathBuf,
    pub width: usize,
    pub sort: SortSpec,
    pub order: HistoryOrder,
    pub current_only: bool,
    pub full: bool,
    pub with_ai: bool,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
}

impl ReportConfig {
    pub fn new(home_dir: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            cwd: cwd.into(),
            width: DEFAULT_WIDTH,
            sort: SortSpec::default(),
            order: HistoryOrder::default(),
            current_only: false,
            full: false,
            with_ai: false,
            output: None,
            format: ExportFormat::default(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        data_file_path(&self.home_dir)
    }

    pub fn projects_dir(&self) -> PathBuf {
        projects_dir(&self.home_dir)
    }

    /// Project key used by the current-project filter
    pub fn current_project(&self) -> Option<String> {
        self.current_only.then(|| self.cwd.to_string_lossy().into_owned())
    }

    /// Truncation limit for a line with the given chrome allowance; `None` in full mode
    pub fn limit(&self, chrome: usize) -> Option<usize> {
        (!self.full).then(|| self.width.saturating_sub(chrome).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::new("/home/u", "/work/repo");
        assert_eq!(config.width, 80);
        assert_eq!(config.order, HistoryOrder::Reverse);
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.sort.to_string(), "+name");
        assert_eq!(config.data_file(), PathBuf::from("/home/u/.claude.json"));
        assert_eq!(config.projects_dir(), PathBuf::from("/home/u/.claude/projects"));
    }

    #[test]
    fn test_current_project_only_when_filtered() {
        let mut config = ReportConfig::new("/home/u", "/work/repo");
        assert_eq!(config.current_project(), None);

        config.current_only = true;
        assert_eq!(config.current_project().as_deref(), Some("/work/repo"));
    }

    #[test]
    fn test_limit() {
        let mut config = ReportConfig::new("/h", "/c");
        assert_eq!(config.limit(PROMPT_CHROME), Some(70));
        assert_eq!(config.limit(RESPONSE_CHROME), Some(68));

        config.width = 5;
        assert_eq!(config.limit(PROMPT_CHROME), Some(1));

        config.full = true;
        assert_eq!(config.limit(PROMPT_CHROME), None);
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("Markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!(matches!("xml".parse::<ExportFormat>(), Err(ReportError::UnsupportedFormat(f)) if f == "xml"));
    }

    #[test]
    fn test_order_arrange() {
        assert_eq!(HistoryOrder::Reverse.arrange(vec![1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(HistoryOrder::Chronological.arrange(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
