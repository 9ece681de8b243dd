use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use clap::builder::TypedValueParser;

use crate::config::{DEFAULT_WIDTH, ExportFormat, HistoryOrder, ReportConfig};
use crate::export::write_export;
use crate::logging::init_tracing;
use crate::projects::SortSpec;
use crate::render::render_terminal;
use crate::report::load_report;
use crate::utils::get_home_dir;

#[derive(Parser, Debug)]
#[command(name = "ai-history-report")]
#[command(version = "0.1.0")]
#[command(
    about = "Report Claude Code project history and reconstructed conversations",
    long_about = None
)]
pub struct Cli {
    /// Terminal width used for truncation
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u64).range(1..).map(|w| w as usize))]
    pub width: usize,

    /// Project sort: [+|-]name or [+|-]size
    #[arg(long, default_value = "+name", allow_hyphen_values = true)]
    pub sort: SortSpec,

    /// Listing order for conversations and history
    #[arg(long, value_enum, default_value_t = HistoryOrder::Reverse)]
    pub order: HistoryOrder,

    /// Only report the project matching the current directory
    #[arg(long)]
    pub current: bool,

    /// Show complete messages instead of truncated summaries
    #[arg(long)]
    pub full: bool,

    /// Reconstruct conversations from session logs
    #[arg(long)]
    pub ai: bool,

    /// Export to this file or directory instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format: json or markdown
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the report configuration for the given environment
    pub fn into_config(self, home_dir: PathBuf, cwd: PathBuf) -> ReportConfig {
        let mut config = ReportConfig::new(home_dir, cwd);
        config.width = self.width;
        config.sort = self.sort;
        config.order = self.order;
        config.current_only = self.current;
        config.full = self.full;
        config.with_ai = self.ai;
        config.output = self.output;
        config.format = self.format;
        config
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let home_dir = get_home_dir()?;
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = cli.into_config(home_dir, cwd);

    let stdout = io::stdout();
    execute(&config, &mut stdout.lock())
}

/// Load the report and either export it or print it to `out`
pub fn execute<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    let Some(projects) = load_report(config).context("Failed to load project history")? else {
        writeln!(out, "No projects found in {}", config.data_file().display())?;
        return Ok(());
    };

    match &config.output {
        Some(target) => {
            let path = write_export(&projects, config, target, Utc::now())
                .context("Failed to export report")?;
            writeln!(out, "Exported {} project(s) to {}", projects.len(), path.display())?;
        }
        None => {
            render_terminal(out, &projects, config).context("Failed to write report")?;
        }
    }

    out.flush()?;
    Ok(())
}
