use serde_json::{Map, Value};

use crate::models::{HistoryItem, ProjectRecord};
use crate::projects::sort::SortSpec;

/// Length in bytes of a value's compact JSON form
fn serialized_len(value: &Value) -> usize {
    serde_json::to_string(value).map(|s| s.len()).unwrap_or(0)
}

/// Build the record for one project entry of the data file
pub fn project_record(path: &str, entry: &Value) -> ProjectRecord {
    let history_items = entry
        .get("history")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| HistoryItem {
                    display: item
                        .get("display")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    size: serialized_len(item),
                })
                .collect()
        })
        .unwrap_or_default();

    ProjectRecord { path: path.to_string(), total_size: serialized_len(entry), history_items }
}

/// Aggregate the project mapping into sorted records.
///
/// With `current` set, only the entry whose key equals that path survives.
pub fn aggregate_projects(
    projects: &Map<String, Value>,
    current: Option<&str>,
    sort: SortSpec,
) -> Vec<ProjectRecord> {
    let mut records: Vec<ProjectRecord> = projects
        .iter()
        .filter(|(path, _)| current.is_none_or(|cwd| cwd == path.as_str()))
        .map(|(path, entry)| project_record(path, entry))
        .collect();

    sort.apply(&mut records);
    records
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mapping(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn test_project_record_sizes() {
        let entry = json!({"history": [{"display": "fix bug", "pastedContents": {}}], "allowedTools": []});
        let record = project_record("/repo", &entry);

        assert_eq!(record.path, "/repo");
        assert_eq!(record.total_size, entry.to_string().len());
        assert_eq!(record.history_items.len(), 1);
        assert_eq!(record.history_items[0].display, "fix bug");
        assert_eq!(
            record.history_items[0].size,
            r#"{"display":"fix bug","pastedContents":{}}"#.len()
        );
    }

    #[test]
    fn test_missing_history_is_empty() {
        let record = project_record("/repo", &json!({"allowedTools": []}));
        assert!(record.history_items.is_empty());

        let record = project_record("/repo", &json!({"history": "not a list"}));
        assert!(record.history_items.is_empty());
    }

    #[test]
    fn test_history_item_without_display() {
        let record = project_record("/repo", &json!({"history": [{"other": 1}]}));
        assert_eq!(record.history_items[0].display, "");
    }

    #[test]
    fn test_current_filter_keeps_exact_match_only() {
        let projects = mapping(json!({"/repo": {}, "/repo2": {}, "/other": {}}));

        let records = aggregate_projects(&projects, Some("/repo"), SortSpec::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "/repo");

        let records = aggregate_projects(&projects, Some("/missing"), SortSpec::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_sorted_by_size_descending() {
        let projects = mapping(json!({
            "/small": {},
            "/large": {"history": [{"display": "a much longer entry"}]},
            "/medium": {"history": []}
        }));
        let sort = "-size".parse().unwrap();

        let records = aggregate_projects(&projects, None, sort);
        let order: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["/large", "/medium", "/small"]);
    }
}
