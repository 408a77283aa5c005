//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::colors::score_cell_color;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| {
            Cell::new(h.to_uppercase())
                .set_alignment(CellAlignment::Left)
                .add_attribute(Attribute::Bold)
        }));
    table
}

/// Right-aligned numeric cell.
pub fn number_cell(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

/// Right-aligned score cell colored by band.
pub fn score_cell(score: f64, precision: usize) -> Cell {
    number_cell(format!("{score:.precision$}")).fg(score_cell_color(score))
}

/// Render the table with a count header, or a placeholder when empty.
pub fn render_list(noun: (&str, &str), table: &Table, total: usize) -> String {
    let (singular, plural) = noun;
    if total == 0 {
        return format!("No {plural} found.");
    }
    let noun = if total == 1 { singular } else { plural };
    format!("{} {noun}:\n{table}", console::style(total).bold())
}
