//! Output formatting for command replies.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use tabled::Table;

use crate::commands::{Embed, Reply};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render a reply in the chosen mode.
pub fn render_reply(reply: &Reply, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(reply)?),
        OutputMode::Table => Ok(match reply {
            Reply::Message { text } => text.clone(),
            Reply::Embed(embed) => render_embed(embed),
        }),
    }
}

fn render_embed(embed: &Embed) -> String {
    let mut out = format!("\x1b[1m{}\x1b[0m", embed.title);
    if let Some(description) = &embed.description {
        out.push('\n');
        out.push_str(description);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        out.push_str(&format!("\n{thumbnail}"));
    }
    if !embed.fields.is_empty() {
        out.push('\n');
        out.push_str(&Table::new(&embed.fields).to_string());
    }
    out
}

/// Print a reply to stdout.
pub fn print_reply(reply: &Reply, mode: OutputMode) -> anyhow::Result<()> {
    println!("{}", render_reply(reply, mode)?);
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("\x1b[31m{msg}\x1b[0m");
}
