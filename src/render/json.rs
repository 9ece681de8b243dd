//! JSON export
//!
//! Content is never truncated here. Each project carries either its
//! conversations or its legacy history items, selected by the conversation
//! mode switch, never both.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::text::fold_product_name;
use crate::config::ReportConfig;
use crate::models::ContentBlock;
use crate::report::ReportProject;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExport<'a> {
    pub exported_at: String,
    pub project_count: usize,
    pub filters: JsonFilters,
    pub projects: Vec<JsonProject<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFilters {
    pub current_only: bool,
    pub sort: String,
    pub order: &'static str,
    pub with_ai: bool,
    pub full_messages: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonProject<'a> {
    pub path: &'a str,
    pub total_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversations: Option<Vec<JsonConversation<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_items: Option<Vec<JsonHistoryItem<'a>>>,
}

#[derive(Debug, Serialize)]
pub struct JsonConversation<'a> {
    pub index: usize,
    pub timestamp: &'a str,
    pub prompt: String,
    pub response: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
pub struct JsonHistoryItem<'a> {
    pub index: usize,
    pub display: &'a str,
    pub size: usize,
}

fn json_project<'a>(project: &'a ReportProject, config: &ReportConfig) -> JsonProject<'a> {
    let record = &project.record;
    let mut entry = JsonProject {
        path: &record.path,
        total_size: record.total_size,
        conversations: None,
        history_items: None,
    };

    if config.with_ai {
        let pairs = config.order.arrange(project.conversations.iter().collect());
        entry.conversations = Some(
            pairs
                .into_iter()
                .enumerate()
                .map(|(idx, pair)| JsonConversation {
                    index: idx + 1,
                    timestamp: &pair.timestamp,
                    prompt: fold_product_name(&pair.user_prompt).into_owned(),
                    response: pair.blocks(),
                })
                .collect(),
        );
    } else {
        let items = config.order.arrange(record.history_items.iter().collect());
        entry.history_items = Some(
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| JsonHistoryItem {
                    index: idx + 1,
                    display: &item.display,
                    size: item.size,
                })
                .collect(),
        );
    }

    entry
}

/// Build the export document for the given projects
pub fn build_json_export<'a>(
    projects: &'a [ReportProject],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> JsonExport<'a> {
    JsonExport {
        exported_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        project_count: projects.len(),
        filters: JsonFilters {
            current_only: config.current_only,
            sort: config.sort.to_string(),
            order: config.order.as_str(),
            with_ai: config.with_ai,
            full_messages: config.full,
        },
        projects: projects.iter().map(|project| json_project(project, config)).collect(),
    }
}

/// Render the export document as pretty-printed JSON
pub fn render_json(
    projects: &[ReportProject],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_json_export(projects, config, now))
}
