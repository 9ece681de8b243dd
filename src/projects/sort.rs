use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;
use crate::models::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    /// Lexicographic by project path
    #[default]
    Name,
    /// By serialized size of the project record
    Size,
}

/// Project ordering: a method plus a direction
///
/// Parsed from `name`, `size` or `path`, optionally prefixed with `+`
/// (ascending) or `-` (descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub method: SortMethod,
    pub descending: bool,
}

impl SortSpec {
    pub fn compare(&self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        let ordering = match self.method {
            SortMethod::Name => a.path.cmp(&b.path),
            SortMethod::Size => a.total_size.cmp(&b.total_size),
        };
        if self.descending { ordering.reverse() } else { ordering }
    }

    pub fn apply(&self, projects: &mut [ProjectRecord]) {
        projects.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortSpec {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (descending, name) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let method = match name.to_ascii_lowercase().as_str() {
            "name" | "path" => SortMethod::Name,
            "size" => SortMethod::Size,
            _ => return Err(ReportError::InvalidSort(s.to_string())),
        };

        Ok(SortSpec { method, descending })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.descending { '-' } else { '+' };
        let name = match self.method {
            SortMethod::Name => "name",
            SortMethod::Size => "size",
        };
        write!(f, "{sign}{name}")
    }
}
