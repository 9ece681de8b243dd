use crate::models::RawEvent;

/// Concatenate per-file event lists and order them by timestamp.
///
/// Events whose timestamp is missing or unparseable sort as the Unix epoch.
/// Relative order of equal timestamps is unspecified.
pub fn merge_timeline(files: Vec<Vec<RawEvent>>) -> Vec<RawEvent> {
    let mut events: Vec<RawEvent> = files.into_iter().flatten().collect();
    events.sort_by_cached_key(RawEvent::time);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    fn event(ts: Option<&str>, id: &str) -> RawEvent {
        RawEvent {
            kind: EventKind::User,
            timestamp: ts.map(str::to_string),
            uuid: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn ids(events: &[RawEvent]) -> Vec<&str> {
        events.iter().filter_map(|e| e.uuid.as_deref()).collect()
    }

    #[test]
    fn test_interleaves_two_sorted_files() {
        let a = vec![
            event(Some("2024-01-01T00:00:00Z"), "a1"),
            event(Some("2024-01-01T00:00:02Z"), "a2"),
        ];
        let b = vec![
            event(Some("2024-01-01T00:00:01Z"), "b1"),
            event(Some("2024-01-01T00:00:03Z"), "b2"),
        ];

        let merged = merge_timeline(vec![a, b]);
        assert_eq!(ids(&merged), vec!["a1", "b1", "a2", "b2"]);
        assert!(merged.windows(2).all(|w| w[0].time() <= w[1].time()));
    }

    #[test]
    fn test_compares_points_in_time_not_strings() {
        let merged = merge_timeline(vec![vec![
            event(Some("2024-01-01T01:00:00+01:00"), "offset-midnight"),
            event(Some("2024-01-01T00:30:00Z"), "utc-half-past"),
        ]]);
        assert_eq!(ids(&merged), vec!["offset-midnight", "utc-half-past"]);
    }

    #[test]
    fn test_unparseable_timestamps_sort_first() {
        let merged = merge_timeline(vec![
            vec![event(Some("2024-01-01T00:00:00Z"), "dated")],
            vec![event(None, "missing"), event(Some("garbage"), "garbage")],
        ]);
        assert_eq!(merged.last().and_then(|e| e.uuid.as_deref()), Some("dated"));
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_timeline(Vec::new()).is_empty());
        assert!(merge_timeline(vec![Vec::new(), Vec::new()]).is_empty());
    }
}
