pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_FILE_NAME, data_file_path, get_home_dir, projects_dir};
pub use paths::{encode_project_dir, format_path_with_tilde};
pub use terminal::strip_ansi_codes;
