use serde::{Deserialize, Serialize};

/// One entry of the legacy per-project `history` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub display: String,
    /// Length in bytes of the item's serialized form
    pub size: usize,
}

/// Aggregated view of one project from the home data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Project path exactly as keyed in the data file
    pub path: String,
    /// Length in bytes of the full serialized project record
    pub total_size: usize,
    pub history_items: Vec<HistoryItem>,
}
