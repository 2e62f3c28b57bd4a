//! Non-interactive replay of scripted form actions.

use std::fmt::Write as _;
use std::path::Path;

use amine_core::view::{COLUMNS, ItemRow};
use amine_core::{Item, ItemDraft, ItemId, ItemManager};
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::error::ToolError;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add(ItemDraft),
    Delete(ItemId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Final state after a replay.
#[derive(Debug, Serialize)]
pub struct ReplayOutcome<'a> {
    pub items: &'a [Item],
    pub error: Option<&'a str>,
}

pub fn parse_script(content: &str) -> Result<Vec<Action>, ToolError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_script(path: &Path) -> Result<Vec<Action>, ToolError> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

/// Applies actions in order, exactly as the form would.
pub fn apply(manager: &mut ItemManager, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Add(draft) => {
                if let Err(e) = manager.submit_draft(draft) {
                    debug!(error = %e, "Scripted add rejected");
                }
            }
            Action::Delete(id) => {
                manager.delete(*id);
            }
        }
    }
}

pub fn render(
    manager: &ItemManager,
    format: OutputFormat,
    icons: bool,
) -> Result<String, ToolError> {
    match format {
        OutputFormat::Text => Ok(render_text(manager, icons)),
        OutputFormat::Json => {
            let outcome = ReplayOutcome {
                items: manager.items(),
                error: manager.error_message(),
            };
            Ok(serde_json::to_string_pretty(&outcome)? + "\n")
        }
    }
}

/// Terminal display columns; icons take two cells.
fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Plain-text table followed by the error line, if any.
pub fn render_text(manager: &ItemManager, icons: bool) -> String {
    let rows: Vec<ItemRow> = manager
        .items()
        .iter()
        .map(|item| ItemRow::new(item, icons))
        .collect();

    let mut widths = COLUMNS.map(width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    let mut write_line = |cells: [&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - width(cell))))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };

    write_line(COLUMNS);
    for row in &rows {
        write_line(row.cells());
    }

    if let Some(error) = manager.error_message() {
        let _ = writeln!(out, "\n{}", error);
    }
    out
}
