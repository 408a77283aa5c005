use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::{Config, Factor};

/// Project directory holding config files
pub const CONFIG_DIR: &str = ".marketlens";

/// Prefix for environment overrides, e.g. `MARKETLENS_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "MARKETLENS_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid confidence_floor: {0}. Must be between 0 and 100")]
    InvalidConfidenceFloor(f64),

    #[error("Invalid confidence_penalty: {0}. Must be non-negative")]
    InvalidConfidencePenalty(f64),

    #[error("Invalid {kind} for {factor}: {value}. Must be finite")]
    NonFiniteConstant {
        kind: &'static str,
        factor: Factor,
        value: f64,
    },

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .marketlens/config.yaml
    /// 3. .marketlens/local.yaml (optional local overrides)
    /// 4. Environment variables (MARKETLENS_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        let config: Config = Self::project_figment()
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment overrides still apply on top of the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        debug!(path = %path.display(), "configuration loaded from file");
        Ok(config)
    }

    /// `load_from_file` when a path is given, `load` otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn project_figment() -> Figment {
        let dir = Path::new(CONFIG_DIR);
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        let predictor = &config.predictor;
        if !(0.0..=100.0).contains(&predictor.confidence_floor) {
            return Err(ConfigError::InvalidConfidenceFloor(predictor.confidence_floor));
        }
        if predictor.confidence_penalty.is_nan() || predictor.confidence_penalty < 0.0 {
            return Err(ConfigError::InvalidConfidencePenalty(
                predictor.confidence_penalty,
            ));
        }

        for factor in Factor::ALL {
            for (kind, value) in [
                ("ideal", predictor.ideals.get(factor)),
                ("coefficient", predictor.coefficients.get(factor)),
            ] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteConstant { kind, factor, value });
                }
            }
        }

        let (trigger, strong) = (&predictor.triggers, &predictor.strong_triggers);
        if strong.cognitive_load_above < trigger.cognitive_load_above
            || strong.cortisol_above < trigger.cortisol_above
            || strong.dopamine_below > trigger.dopamine_below
            || strong.trust_below > trigger.trust_below
        {
            return Err(ConfigError::ValidationFailed(
                "strong_triggers must be at or beyond triggers".to_string(),
            ));
        }

        Ok(())
    }
}
