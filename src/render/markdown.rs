//! Markdown export
//!
//! Thinking blocks go into a collapsible `<details>` section ahead of the main
//! response. Full mode keeps text verbatim and appends every encoded response
//! segment in a fenced block; summary mode clips prompts and text to the
//! configured width.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

use super::text::{clip, fold_product_name, format_size, format_timestamp};
use super::tools::{describe_tool_call, summarize_tools};
use crate::config::{MARKDOWN_CHROME, ReportConfig};
use crate::models::{ContentBlock, ConversationPair, value_text};
use crate::report::ReportProject;

pub const FOOTER: &str = "*Generated by ai-history-report*";

/// Shortest backtick fence that cannot be closed by the enclosed text
fn fence_for(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in text.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Prefix every line with `> `
fn blockquote(text: &str) -> String {
    text.lines().map(|line| format!("> {line}")).collect::<Vec<_>>().join("\n")
}

pub fn render_markdown(
    projects: &[ReportProject],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> String {
    let mut md = String::new();
    // Only a failing Display impl can make formatting into a String fail
    let _ = write_markdown(&mut md, projects, config, now);
    md
}

/// Write the Markdown document to any formatter sink
pub fn write_markdown<W: Write>(
    md: &mut W,
    projects: &[ReportProject],
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> fmt::Result {
    writeln!(md, "# Claude Code History Report\n")?;
    writeln!(md, "- **Generated:** {}", now.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(md, "- **Projects:** {}", projects.len())?;
    writeln!(
        md,
        "- **Scope:** {}",
        if config.current_only { "current project" } else { "all projects" }
    )?;
    writeln!(md, "- **Mode:** {}", if config.with_ai { "conversations" } else { "history" })?;
    writeln!(md, "- **Sort:** {}", config.sort)?;
    writeln!(md, "- **Order:** {}", config.order.as_str())?;
    writeln!(md, "- **Detail:** {}\n", if config.full { "full" } else { "summary" })?;

    for project in projects {
        write_project(md, project, config)?;
    }

    writeln!(md, "---\n\n{FOOTER}")
}

fn write_project<W: Write>(
    md: &mut W,
    project: &ReportProject,
    config: &ReportConfig,
) -> fmt::Result {
    let record = &project.record;

    writeln!(md, "---\n\n## {}\n", record.path)?;
    writeln!(md, "- **Total size:** {}", format_size(record.total_size))?;

    if config.with_ai {
        writeln!(md, "- **Conversations:** {}\n", project.conversations.len())?;
        writeln!(md, "### Conversations\n")?;
        if project.conversations.is_empty() {
            writeln!(md, "_No conversations recorded._\n")?;
        }
        let pairs: Vec<&ConversationPair> = config.order.arrange(project.conversations.iter().collect());
        for (idx, pair) in pairs.into_iter().enumerate() {
            write_pair(md, idx + 1, pair, config)?;
        }
    } else {
        writeln!(md, "- **History items:** {}\n", record.history_items.len())?;
        writeln!(md, "### History\n")?;
        if record.history_items.is_empty() {
            return writeln!(md, "_No history recorded._\n");
        }
        let items = config.order.arrange(record.history_items.iter().collect::<Vec<_>>());
        for (idx, item) in items.into_iter().enumerate() {
            let display = clip(&item.display, config.limit(MARKDOWN_CHROME));
            writeln!(md, "{}. {} _({})_", idx + 1, display, format_size(item.size))?;
        }
        writeln!(md)?;
    }
    Ok(())
}

fn write_pair<W: Write>(
    md: &mut W,
    index: usize,
    pair: &ConversationPair,
    config: &ReportConfig,
) -> fmt::Result {
    let limit = config.limit(MARKDOWN_CHROME);
    let prompt = clip(&fold_product_name(&pair.user_prompt), limit);

    writeln!(md, "#### {:03} · {}\n", index, format_timestamp(&pair.timestamp))?;
    writeln!(md, "**Prompt:**\n\n{}\n", blockquote(&prompt))?;

    let blocks = pair.blocks();
    if blocks.is_empty() {
        return writeln!(md, "_No response recorded._\n");
    }

    let thinking: Vec<&str> = blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Thinking { content } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    if !thinking.is_empty() {
        writeln!(md, "<details>\n<summary>Thinking</summary>\n")?;
        for content in thinking {
            writeln!(md, "{}\n", clip(content, limit))?;
        }
        writeln!(md, "</details>\n")?;
    }

    writeln!(md, "**Response:**\n")?;
    if config.full {
        write_response_full(md, &blocks)?;
        write_raw_segments(md, pair)
    } else {
        write_response_summary(md, &blocks, limit)
    }
}

fn write_response_summary<W: Write>(
    md: &mut W,
    blocks: &[ContentBlock],
    limit: Option<usize>,
) -> fmt::Result {
    let first_text = blocks.iter().find_map(|block| match block {
        ContentBlock::Text { content } => Some(content.as_str()),
        ContentBlock::Raw { content } => Some(content.as_str()),
        _ => None,
    });
    if let Some(text) = first_text {
        writeln!(md, "{}\n", clip(text, limit))?;
    }
    if let Some(tools) = summarize_tools(blocks) {
        writeln!(md, "_Tools: {}_\n", tools)?;
    }
    if first_text.is_none() && summarize_tools(blocks).is_none() {
        let kinds: Vec<&str> = blocks.iter().map(ContentBlock::tag).collect();
        writeln!(md, "_({})_\n", kinds.join(", "))?;
    }
    Ok(())
}

fn write_response_full<W: Write>(md: &mut W, blocks: &[ContentBlock]) -> fmt::Result {
    let mut tool_lines = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { content } => {
                writeln!(md, "{}\n", content)?;
            }
            ContentBlock::Thinking { .. } => {}
            ContentBlock::ToolUse { tool, input } => {
                tool_lines.push(format!("- `{}`", describe_tool_call(tool, input)));
            }
            ContentBlock::System { content, level, .. } => {
                let level = if level.is_empty() { "system" } else { level.as_str() };
                writeln!(md, "> **{}:** {}\n", level, value_text(content))?;
            }
            ContentBlock::Summary { summary } => {
                writeln!(md, "> **Summary:** {}\n", value_text(summary))?;
            }
            ContentBlock::Raw { content } => {
                writeln!(md, "{}\n", content)?;
            }
        }
    }

    if let Some(tools) = summarize_tools(blocks) {
        writeln!(md, "_Tools: {}_\n", tools)?;
        writeln!(md, "{}\n", tool_lines.join("\n"))?;
    }
    Ok(())
}

/// Dump each encoded segment verbatim so nothing is lost to summarization
fn write_raw_segments<W: Write>(md: &mut W, pair: &ConversationPair) -> fmt::Result {
    let segments = pair.segments();
    if segments.is_empty() {
        return Ok(());
    }
    let body = segments.join("\n");
    let fence = fence_for(&body);

    writeln!(md, "<details>\n<summary>Raw response</summary>\n")?;
    writeln!(md, "{fence}json\n{body}\n{fence}\n")?;
    writeln!(md, "</details>\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::models::{HistoryItem, ProjectRecord};
    use crate::sessions::{SEGMENT_SEPARATOR, encode_blocks};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn config(with_ai: bool, full: bool) -> ReportConfig {
        let mut config = ReportConfig::new("/home", "/repo");
        config.with_ai = with_ai;
        config.full = full;
        config
    }

    fn project(blocks: &[ContentBlock]) -> ReportProject {
        ReportProject {
            record: ProjectRecord {
                path: "/repo".into(),
                total_size: 40,
                history_items: vec![HistoryItem { display: "fix bug".into(), size: 21 }],
            },
            conversations: vec![ConversationPair {
                user_prompt: "please fix bug".into(),
                claude_response: Some(encode_blocks(blocks)),
                timestamp: "2024-01-01T00:00:00Z".into(),
            }],
        }
    }

    fn sample_blocks() -> Vec<ContentBlock> {
        vec![
            ContentBlock::Thinking { content: "look at parser".into() },
            ContentBlock::Text { content: "Fixed it".into() },
            ContentBlock::ToolUse { tool: "Edit".into(), input: json!({"file_path": "/repo/src/parser.rs"}) },
        ]
    }

    #[test]
    fn test_history_document() {
        let md = render_markdown(&[project(&[])], &config(false, false), now());

        assert!(md.starts_with("# Claude Code History Report"));
        assert!(md.contains("- **Generated:** 2024-03-01 12:00:00 UTC"));
        assert!(md.contains("- **Mode:** history"));
        assert!(md.contains("## /repo"));
        assert!(md.contains("### History"));
        assert!(md.contains("1. fix bug _(21 B)_"));
        assert!(!md.contains("### Conversations"));
        assert!(md.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_thinking_precedes_response() {
        let md = render_markdown(&[project(&sample_blocks())], &config(true, false), now());

        let thinking = md.find("<summary>Thinking</summary>").expect("thinking section");
        let response = md.find("**Response:**").expect("response section");
        assert!(thinking < response);
        assert!(md.contains("> please fix bug"));
        assert!(md.contains("Fixed it"));
        assert!(md.contains("_Tools: 1 edit_"));
        assert!(!md.contains("Raw response"));
    }

    #[test]
    fn test_full_mode_dumps_raw_segments() {
        let md = render_markdown(&[project(&sample_blocks())], &config(true, true), now());

        assert!(md.contains("- `Edit: parser.rs`"));
        assert!(md.contains("<summary>Raw response</summary>"));
        for segment in encode_blocks(&sample_blocks()).split(SEGMENT_SEPARATOR) {
            assert!(md.contains(segment), "missing raw segment {segment}");
        }
    }

    #[test]
    fn test_summary_mode_clips_text() {
        let mut cfg = config(true, false);
        cfg.width = 24;
        let md = render_markdown(
            &[project(&[ContentBlock::Text { content: "z".repeat(100) }])],
            &cfg,
            now(),
        );

        assert!(md.contains(&format!("{}...", "z".repeat(17))));
        assert!(!md.contains(&"z".repeat(21)));
    }

    #[test]
    fn test_malformed_response_still_renders() {
        let mut broken = project(&[]);
        broken.conversations[0].claude_response = Some("{\"type\":\"tool_use\",\"tool\":".into());

        let md = render_markdown(&[broken], &config(true, true), now());
        assert!(md.contains("{\"type\":\"tool_use\",\"tool\":"));
        assert!(md.contains("Raw response"));
    }

    #[test]
    fn test_write_markdown_matches_rendered_document() {
        let projects = [project(&sample_blocks())];
        let mut written = String::new();

        write_markdown(&mut written, &projects, &config(true, true), now()).unwrap();

        assert_eq!(written, render_markdown(&projects, &config(true, true), now()));
    }

    #[test]
    fn test_fence_outgrows_backticks() {
        assert_eq!(fence_for("no ticks"), "```");
        assert_eq!(fence_for("has ```` four"), "`````");
    }
}
