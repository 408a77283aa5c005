//! Score, tier and priority color mapping for CLI output.

use console::{style, StyledObject};

/// Score bands: green from 75, yellow from 60, red below.
pub fn colorize_score(score: f64) -> StyledObject<String> {
    let text = format!("{score:.0}");
    if score >= 75.0 {
        style(text).green().bold()
    } else if score >= 60.0 {
        style(text).yellow()
    } else {
        style(text).red().bold()
    }
}

/// Matching comfy-table color for score cells.
pub fn score_cell_color(score: f64) -> comfy_table::Color {
    if score >= 75.0 {
        comfy_table::Color::Green
    } else if score >= 60.0 {
        comfy_table::Color::Yellow
    } else {
        comfy_table::Color::Red
    }
}

/// High = red bold, Medium = yellow.
pub fn colorize_priority(priority: &str) -> StyledObject<&str> {
    match priority.to_lowercase().as_str() {
        "high" => style(priority).red().bold(),
        "medium" => style(priority).yellow(),
        _ => style(priority).white(),
    }
}

/// Signed change, green when positive and red when negative.
pub fn colorize_delta(text: String, delta: f64) -> StyledObject<String> {
    if delta > 0.0 {
        style(text).green()
    } else if delta < 0.0 {
        style(text).red()
    } else {
        style(text).dim()
    }
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("\n{}", style(title).bold().underlined())
}
