//! Project-level metrics from the home data file, independent of session logs

pub mod aggregate;
pub mod sort;

pub use aggregate::{aggregate_projects, project_record};
pub use sort::{SortMethod, SortSpec};
