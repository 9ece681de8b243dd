//! Plain-text report for the terminal
//!
//! Each project is preceded by a separator rule and a header; entries are
//! numbered with a zero-padded index. All log-derived text is stripped of
//! escape sequences before it is written.

use std::io::{self, Write};
use std::path::Path;

use super::text::{clip, fold_product_name, format_size, format_timestamp};
use super::tools::{describe_tool_call, summarize_tools};
use crate::config::{HISTORY_CHROME, PROMPT_CHROME, RESPONSE_CHROME, ReportConfig};
use crate::models::{ContentBlock, ConversationPair, HistoryItem, value_text};
use crate::report::ReportProject;
use crate::utils::{format_path_with_tilde, strip_ansi_codes};

/// Indentation under the `[NNN] ` index column
const INDENT: &str = "      ";

/// Widest separator rule drawn, whatever the configured width
pub const MAX_RULE_WIDTH: usize = 500;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width.min(MAX_RULE_WIDTH))
}

pub fn render_terminal<W: Write>(
    out: &mut W,
    projects: &[ReportProject],
    config: &ReportConfig,
) -> io::Result<()> {
    if projects.is_empty() {
        writeln!(out, "No matching projects.")?;
        return Ok(());
    }

    for project in projects {
        render_project(out, project, config)?;
    }

    writeln!(out, "{}", rule('=', config.width))?;
    writeln!(
        out,
        "{} project{}",
        projects.len(),
        if projects.len() == 1 { "" } else { "s" }
    )?;
    Ok(())
}

fn render_project<W: Write>(
    out: &mut W,
    project: &ReportProject,
    config: &ReportConfig,
) -> io::Result<()> {
    let record = &project.record;
    let display_path = format_path_with_tilde(Path::new(&record.path), &config.home_dir);

    writeln!(out, "{}", rule('=', config.width))?;
    writeln!(out, "Project: {}", strip_ansi_codes(&display_path))?;
    if config.with_ai {
        writeln!(
            out,
            "Size: {} | Conversations: {}",
            format_size(record.total_size),
            project.conversations.len()
        )?;
    } else {
        writeln!(
            out,
            "Size: {} | History items: {}",
            format_size(record.total_size),
            record.history_items.len()
        )?;
    }
    writeln!(out, "{}", rule('-', config.width))?;

    if config.with_ai {
        if project.conversations.is_empty() {
            writeln!(out, "(no conversations)")?;
        }
        let pairs: Vec<&ConversationPair> = config.order.arrange(project.conversations.iter().collect());
        for (idx, pair) in pairs.into_iter().enumerate() {
            render_pair(out, idx + 1, pair, config)?;
        }
    } else {
        if record.history_items.is_empty() {
            writeln!(out, "(no history)")?;
        }
        let items: Vec<&HistoryItem> = config.order.arrange(record.history_items.iter().collect());
        for (idx, item) in items.into_iter().enumerate() {
            let display = clip(&strip_ansi_codes(&item.display), config.limit(HISTORY_CHROME));
            writeln!(out, "[{:03}] {} ({})", idx + 1, display, format_size(item.size))?;
        }
    }

    writeln!(out)?;
    Ok(())
}

fn render_pair<W: Write>(
    out: &mut W,
    index: usize,
    pair: &ConversationPair,
    config: &ReportConfig,
) -> io::Result<()> {
    let prompt = strip_ansi_codes(&fold_product_name(&pair.user_prompt));
    let prompt = clip(&prompt, config.limit(PROMPT_CHROME));

    let mut prompt_lines = prompt.lines();
    writeln!(out, "[{:03}] {}", index, prompt_lines.next().unwrap_or_default())?;
    for line in prompt_lines {
        writeln!(out, "{INDENT}{line}")?;
    }
    writeln!(out, "{INDENT}{}", format_timestamp(&pair.timestamp))?;

    let blocks = pair.blocks();
    if blocks.is_empty() {
        writeln!(out, "{INDENT}-> (no response)")?;
    } else if config.full {
        for block in &blocks {
            render_block_full(out, block)?;
        }
    } else {
        render_summary(out, &blocks, config)?;
    }
    Ok(())
}

fn render_summary<W: Write>(
    out: &mut W,
    blocks: &[ContentBlock],
    config: &ReportConfig,
) -> io::Result<()> {
    let limit = config.limit(RESPONSE_CHROME);

    let first_text = blocks.iter().find_map(|block| match block {
        ContentBlock::Text { content } | ContentBlock::Raw { content } => Some(content.as_str()),
        _ => None,
    });
    if let Some(text) = first_text {
        writeln!(out, "{INDENT}-> {}", clip(&strip_ansi_codes(text), limit))?;
    }
    if let Some(tools) = summarize_tools(blocks) {
        writeln!(out, "{INDENT}-> {}", clip(&tools, limit))?;
    }
    if first_text.is_none() && !blocks.iter().any(|b| matches!(b, ContentBlock::ToolUse { .. })) {
        let kinds: Vec<&str> = blocks.iter().map(ContentBlock::tag).collect();
        writeln!(out, "{INDENT}-> ({})", kinds.join(", "))?;
    }
    Ok(())
}

fn write_indented<W: Write>(out: &mut W, label: &str, text: &str) -> io::Result<()> {
    let text = strip_ansi_codes(text);
    let mut lines = text.lines();
    writeln!(out, "{INDENT}{label} {}", lines.next().unwrap_or_default())?;
    for line in lines {
        writeln!(out, "{INDENT}  {line}")?;
    }
    Ok(())
}

fn render_block_full<W: Write>(out: &mut W, block: &ContentBlock) -> io::Result<()> {
    match block {
        ContentBlock::Text { content } => write_indented(out, "->", content),
        ContentBlock::Thinking { content } => write_indented(out, "[thinking]", content),
        ContentBlock::ToolUse { tool, input } => {
            write_indented(out, "[tool]", &describe_tool_call(tool, input))
        }
        ContentBlock::System { content, level, .. } => {
            let label = if level.is_empty() { "[system]".to_string() } else { format!("[system:{level}]") };
            write_indented(out, &label, &value_text(content))
        }
        ContentBlock::Summary { summary } => write_indented(out, "[summary]", &value_text(summary)),
        ContentBlock::Raw { content } => write_indented(out, "[raw]", content),
    }
}
