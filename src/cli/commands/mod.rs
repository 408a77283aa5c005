//! CLI command implementations.

pub mod channels;
pub mod industries;
pub mod predict;
pub mod score;
pub mod tier;

use anyhow::{bail, Result};

use crate::domain::models::IndustryWeights;
use crate::services::ScoringEngine;

/// Parse a `key=value` pair with a numeric value.
pub fn parse_key_value(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", value));
    }
    Ok((key.to_string(), value))
}

/// Look up an industry, failing with the list of known keys.
pub(crate) fn require_industry<'a>(
    engine: &'a ScoringEngine,
    industry: &str,
) -> Result<&'a IndustryWeights> {
    let industries = engine.industries();
    if let Some(found) = industries.iter().copied().find(|i| i.industry == industry) {
        return Ok(found);
    }
    let known: Vec<&str> = industries.iter().map(|i| i.industry.as_str()).collect();
    bail!(
        "Unknown industry '{industry}'. Known industries: {}",
        known.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("roas=450").unwrap(),
            ("roas".to_string(), 450.0)
        );
        assert_eq!(
            parse_key_value(" bounce_rate = 41.5 ").unwrap(),
            ("bounce_rate".to_string(), 41.5)
        );
        assert!(parse_key_value("roas").is_err());
        assert!(parse_key_value("=3").is_err());
        assert!(parse_key_value("roas=high").is_err());
        assert!(parse_key_value("roas=inf").is_err());
    }

    #[test]
    fn test_require_industry() {
        let engine = ScoringEngine::with_defaults();
        assert_eq!(require_industry(&engine, "saas").unwrap().industry, "saas");

        let err = require_industry(&engine, "mining").unwrap_err().to_string();
        assert!(err.contains("mining"));
        assert!(err.contains("ecommerce"));
    }
}
