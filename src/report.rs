//! Assembly of the report model from the home data file and session logs.
//!
//! Projects are processed one at a time in sorted order. Session logs are only
//! read when conversation detail is requested; legacy history comes straight
//! from the data file.

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::models::{ConversationPair, ProjectRecord};
use crate::parsers::load_home_data;
use crate::projects::aggregate_projects;
use crate::sessions::load_conversations;

/// One project as consumed by the renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportProject {
    pub record: ProjectRecord,
    /// Reconstructed pairs in chronological order; empty unless conversation mode is on
    pub conversations: Vec<ConversationPair>,
}

/// Load the report model.
///
/// Returns `Ok(None)` when the data file has no `projects` mapping.
pub fn load_report(config: &ReportConfig) -> Result<Option<Vec<ReportProject>>, ReportError> {
    let data_file = config.data_file();
    let home_data = load_home_data(&data_file)?;

    let Some(mapping) = home_data.projects else {
        info!(path = %data_file.display(), "Data file has no projects mapping");
        return Ok(None);
    };

    let current = config.current_project();
    let records = aggregate_projects(&mapping, current.as_deref(), config.sort);
    debug!(projects = records.len(), total = mapping.len(), "Aggregated projects");

    let projects_dir = config.projects_dir();
    let projects = records
        .into_iter()
        .map(|record| {
            let conversations = if config.with_ai {
                load_conversations(&projects_dir, &record.path)
            } else {
                Vec::new()
            };
            ReportProject { record, conversations }
        })
        .collect();

    Ok(Some(projects))
}
