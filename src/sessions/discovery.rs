use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::utils::encode_project_dir;

/// File extension identifying a session log
const SESSION_EXTENSION: &str = "jsonl";

/// Directory holding the session logs of one project
///
/// `projects_dir` is `~/.claude/projects`; the per-project directory name is
/// derived from the raw project path with [`encode_project_dir`].
pub fn session_dir(projects_dir: &Path, project_path: &str) -> PathBuf {
    projects_dir.join(encode_project_dir(project_path))
}

/// Find the session log files of a project, in filename order.
///
/// A missing or unreadable project directory yields an empty list; this is not
/// an error. Only regular files with a `.jsonl` extension are returned.
pub fn discover_session_files(projects_dir: &Path, project_path: &str) -> Vec<PathBuf> {
    let dir = session_dir(projects_dir, project_path);

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "No session directory for project");
        return Vec::new();
    }

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to read session directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == SESSION_EXTENSION))
        .collect();
    files.sort();

    debug!(dir = %dir.display(), files = files.len(), "Discovered session files");
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Helper to create a project session directory with the given files
    fn create_session_dir(projects_dir: &Path, project_path: &str, files: &[&str]) -> PathBuf {
        let dir = session_dir(projects_dir, project_path);
        fs::create_dir_all(&dir).expect("Failed to create session dir");
        for name in files {
            fs::write(dir.join(name), "{}").expect("Failed to write session file");
        }
        dir
    }

    #[test]
    fn test_session_dir_name_is_encoded_path() {
        let dir = session_dir(Path::new("/home/u/.claude/projects"), "/Users/test/my.app");
        assert_eq!(dir, PathBuf::from("/home/u/.claude/projects/-Users-test-my-app"));
    }

    #[test]
    fn test_discover_session_files_sorted() {
        let temp = TempDir::new().unwrap();
        create_session_dir(temp.path(), "/repo", &["b.jsonl", "a.jsonl", "c.jsonl"]);

        let files = discover_session_files(temp.path(), "/repo");
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        assert_eq!(names, vec!["a.jsonl", "b.jsonl", "c.jsonl"]);
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_discover_skips_non_session_files() {
        let temp = TempDir::new().unwrap();
        let dir = create_session_dir(temp.path(), "/repo", &["s1.jsonl", "notes.txt", "s2.json"]);
        fs::create_dir(dir.join("nested.jsonl")).unwrap();

        let files = discover_session_files(temp.path(), "/repo");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("s1.jsonl"));
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(discover_session_files(temp.path(), "/not/there").is_empty());
        assert!(discover_session_files(&temp.path().join("absent"), "/repo").is_empty());
    }
}
