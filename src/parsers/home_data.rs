use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ReportError;

/// Contents of the assistant's home data file that this crate reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeData {
    /// Project mapping keyed by absolute project path; `None` when absent
    #[serde(default)]
    pub projects: Option<Map<String, Value>>,
}

/// Load and parse the home data file.
///
/// A missing file or malformed document is a fatal setup error.
pub fn load_home_data(path: &Path) -> Result<HomeData, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ReportError::DataFileNotFound(path.to_path_buf())
        } else {
            ReportError::DataFileRead { path: path.to_path_buf(), source }
        }
    })?;

    serde_json::from_str(&text)
        .map_err(|source| ReportError::DataFileParse { path: path.to_path_buf(), source })
}
