//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors, tables and detail views used by every
//! command.

pub mod colors;
pub mod detail;
pub mod table;

use serde::Serialize;

pub use colors::*;
pub use detail::*;
pub use table::*;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", console::style("\u{2717}").red().bold(), message)
}

/// Render a percentage held as a fraction, e.g. `0.0234` as `2.34%`.
pub fn fraction_as_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_as_percent() {
        assert_eq!(fraction_as_percent(0.0234), "2.34%");
        assert_eq!(fraction_as_percent(0.0), "0.00%");
    }

    #[test]
    fn test_action_failure_contains_message() {
        assert!(action_failure("boom").contains("boom"));
    }
}
