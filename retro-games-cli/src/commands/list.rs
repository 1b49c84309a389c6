use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_games_catalog::{CatalogEntry, EntryOrder};
use retro_games_db::StoreConfig;

use crate::CliError;

use super::open_store;

const HEADERS: [&str; 5] = ["Title", "Year", "Platform", "Acquired", "Condition"];

/// Print every game as a fixed-width table, ordered by title.
pub(crate) fn run_list(config: &StoreConfig) -> Result<(), CliError> {
    let store = open_store(config)?;
    let entries = store.list_all(EntryOrder::TitleAsc)?;

    if entries.is_empty() {
        log::info!("No games found.");
        return Ok(());
    }

    let mut lines = format_table(&entries).into_iter();
    if let Some(header) = lines.next() {
        log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    }
    for line in lines {
        log::info!("{line}");
    }
    Ok(())
}

/// Render header, separator and one line per entry, each column padded to
/// its widest cell.
pub(crate) fn format_table(entries: &[CatalogEntry]) -> Vec<String> {
    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|e| {
            [
                e.title.clone(),
                e.release_year.to_string(),
                e.platform.clone(),
                e.date_acquired.to_string(),
                e.condition.map(|c| c.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(pad_row(HEADERS.into_iter(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(pad_row(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
