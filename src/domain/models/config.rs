use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::psychology::{Factor, FactorValues};

/// Main configuration structure for marketlens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// CVR predictor constants
    #[serde(default)]
    pub predictor: PredictorConfig,

    /// Reference data (benchmarks and weights) source
    #[serde(default)]
    pub reference: ReferenceConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation for file logs: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Where reference tables come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReferenceConfig {
    /// YAML or JSON reference file; built-in tables when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Thresholds that mark a factor as a bottleneck.
///
/// `*_above` fields trigger when the score is strictly greater,
/// `*_below` fields when strictly lower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BottleneckThresholds {
    pub cognitive_load_above: f64,
    pub cortisol_above: f64,
    pub dopamine_below: f64,
    pub trust_below: f64,
}

impl BottleneckThresholds {
    /// Trigger thresholds.
    pub const fn trigger() -> Self {
        Self {
            cognitive_load_above: 6.0,
            cortisol_above: 5.0,
            dopamine_below: 6.0,
            trust_below: 6.0,
        }
    }

    /// Thresholds past which an action is high priority.
    pub const fn strong() -> Self {
        Self {
            cognitive_load_above: 8.0,
            cortisol_above: 7.0,
            dopamine_below: 4.0,
            trust_below: 4.0,
        }
    }

    /// How far `value` is past this factor's threshold.
    ///
    /// `None` when the factor has no threshold (urgency) or the value does
    /// not cross it.
    pub fn excess(&self, factor: Factor, value: f64) -> Option<f64> {
        let excess = match factor {
            Factor::CognitiveLoad => value - self.cognitive_load_above,
            Factor::Cortisol => value - self.cortisol_above,
            Factor::Dopamine => self.dopamine_below - value,
            Factor::Trust => self.trust_below - value,
            Factor::Urgency => return None,
        };
        (excess > 0.0).then_some(excess)
    }
}

/// Named, overridable constants of the linear CVR model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PredictorConfig {
    /// Ideal reference point per factor
    #[serde(default = "default_ideals")]
    pub ideals: FactorValues,

    /// CVR fraction per point of deviation from the ideal
    #[serde(default = "default_coefficients")]
    pub coefficients: FactorValues,

    #[serde(default = "BottleneckThresholds::trigger")]
    pub triggers: BottleneckThresholds,

    #[serde(default = "BottleneckThresholds::strong")]
    pub strong_triggers: BottleneckThresholds,

    /// Lowest confidence ever reported
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,

    /// Confidence lost per point of mean absolute deviation
    #[serde(default = "default_confidence_penalty")]
    pub confidence_penalty: f64,
}

const fn default_ideals() -> FactorValues {
    FactorValues::new(8.0, 2.0, 8.5, 7.0, 3.0)
}

const fn default_coefficients() -> FactorValues {
    FactorValues::new(0.0015, -0.002, 0.0012, 0.001, -0.0018)
}

const fn default_confidence_floor() -> f64 {
    50.0
}

const fn default_confidence_penalty() -> f64 {
    10.0
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            ideals: default_ideals(),
            coefficients: default_coefficients(),
            triggers: BottleneckThresholds::trigger(),
            strong_triggers: BottleneckThresholds::strong(),
            confidence_floor: default_confidence_floor(),
            confidence_penalty: default_confidence_penalty(),
        }
    }
}
