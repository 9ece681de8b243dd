use std::borrow::Cow;
use std::path::Path;

/// Character substituted for path separators and dots in session directory names
const DIR_MARKER: char = '-';

/// Encodes a project path into Claude's session directory name
///
/// Every path separator and literal dot becomes a hyphen.
///
/// # Examples
///
/// ```
/// use ai_history_report::encode_project_dir;
///
/// assert_eq!(encode_project_dir("/Users/foo/bar"), "-Users-foo-bar");
/// assert_eq!(encode_project_dir("/srv/site.io"), "-srv-site-io");
/// ```
pub fn encode_project_dir(project_path: &str) -> String {
    project_path
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '.') { DIR_MARKER } else { c })
        .collect()
}

/// Formats a path with ~ substitution for the given home directory
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ai_history_report::format_path_with_tilde;
///
/// let formatted = format_path_with_tilde(Path::new("/Users/alice/Documents"), Path::new("/Users/alice"));
/// assert_eq!(formatted, "~/Documents");
/// ```
pub fn format_path_with_tilde(path: &Path, home: &Path) -> String {
    let path_str = path.to_string_lossy();
    let home_str = home.to_string_lossy();

    if !home_str.is_empty()
        && let Some(rest) = path_str.strip_prefix(home_str.as_ref())
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return format!("~{}", rest);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_encode_project_dir() {
        assert_eq!(encode_project_dir("/Users/foo/bar"), "-Users-foo-bar");
    }

    #[test]
    fn test_encode_replaces_dots() {
        assert_eq!(encode_project_dir("/home/me/.config/app.rs"), "-home-me--config-app-rs");
    }

    #[test]
    fn test_encode_windows_separators() {
        assert_eq!(encode_project_dir(r"C:\work\proj"), "C:-work-proj");
    }

    #[test]
    fn test_encode_keeps_other_characters() {
        assert_eq!(encode_project_dir("/tmp/my project_v2"), "-tmp-my project_v2");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let home = PathBuf::from("/Users/testuser");

        let path = PathBuf::from("/Users/testuser/Documents/project");
        assert_eq!(format_path_with_tilde(&path, &home), "~/Documents/project");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        assert_eq!(format_path_with_tilde(&path2, &home), "/opt/local/bin");

        // Sibling directory sharing a prefix
        let path3 = PathBuf::from("/Users/testuser2/code");
        assert_eq!(format_path_with_tilde(&path3, &home), "/Users/testuser2/code");

        assert_eq!(format_path_with_tilde(&home, &home), "~");
    }
}
