use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the assistant's home data file
pub const DATA_FILE_NAME: &str = ".claude.json";

/// Resolve the user's home directory: `$HOME`, then the platform default
pub fn get_home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("Could not determine home directory (HOME not set)")
}

/// Path of the home data file (`~/.claude.json`)
pub fn data_file_path(home: &Path) -> PathBuf {
    home.join(DATA_FILE_NAME)
}

/// Path of the per-project session log root (`~/.claude/projects`)
pub fn projects_dir(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}
