//! Psychological profile of a web experience and the conversion
//! prediction derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reported when no factor crosses its trigger threshold.
pub const NO_BOTTLENECK: &str = "no psychological bottleneck";

/// One of the five profile dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Dopamine,
    Cortisol,
    Trust,
    Urgency,
    CognitiveLoad,
}

impl Factor {
    /// Declaration order; also the tie-break order for bottleneck selection.
    pub const ALL: [Self; 5] = [
        Self::Dopamine,
        Self::Cortisol,
        Self::Trust,
        Self::Urgency,
        Self::CognitiveLoad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dopamine => "dopamine",
            Self::Cortisol => "cortisol",
            Self::Trust => "trust",
            Self::Urgency => "urgency",
            Self::CognitiveLoad => "cognitive_load",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "dopamine" => Some(Self::Dopamine),
            "cortisol" => Some(Self::Cortisol),
            "trust" => Some(Self::Trust),
            "urgency" => Some(Self::Urgency),
            "cognitive_load" => Some(Self::CognitiveLoad),
            _ => None,
        }
    }

    /// Cortisol and cognitive load hurt conversion as they rise.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Cortisol | Self::CognitiveLoad)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-factor characterization of a page, each nominally 1-10.
///
/// Values outside the nominal range are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychologicalProfile {
    pub dopamine_score: f64,
    pub cortisol_score: f64,
    pub trust_score: f64,
    pub urgency_score: f64,
    pub cognitive_load: f64,
}

impl PsychologicalProfile {
    pub const fn new(
        dopamine_score: f64,
        cortisol_score: f64,
        trust_score: f64,
        urgency_score: f64,
        cognitive_load: f64,
    ) -> Self {
        Self {
            dopamine_score,
            cortisol_score,
            trust_score,
            urgency_score,
            cognitive_load,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Dopamine => self.dopamine_score,
            Factor::Cortisol => self.cortisol_score,
            Factor::Trust => self.trust_score,
            Factor::Urgency => self.urgency_score,
            Factor::CognitiveLoad => self.cognitive_load,
        }
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        match factor {
            Factor::Dopamine => self.dopamine_score = value,
            Factor::Cortisol => self.cortisol_score = value,
            Factor::Trust => self.trust_score = value,
            Factor::Urgency => self.urgency_score = value,
            Factor::CognitiveLoad => self.cognitive_load = value,
        }
    }

    /// Copy with one factor replaced.
    pub fn with(mut self, factor: Factor, value: f64) -> Self {
        self.set(factor, value);
        self
    }
}

/// Per-factor values used for ideals, coefficients and industry weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorValues {
    pub dopamine: f64,
    pub cortisol: f64,
    pub trust: f64,
    pub urgency: f64,
    pub cognitive_load: f64,
}

impl FactorValues {
    pub const fn new(dopamine: f64, cortisol: f64, trust: f64, urgency: f64, cognitive_load: f64) -> Self {
        Self {
            dopamine,
            cortisol,
            trust,
            urgency,
            cognitive_load,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Dopamine => self.dopamine,
            Factor::Cortisol => self.cortisol,
            Factor::Trust => self.trust,
            Factor::Urgency => self.urgency,
            Factor::CognitiveLoad => self.cognitive_load,
        }
    }
}

/// How strongly an industry vertical leans on each factor.
///
/// Used only to rescale a raw profile before prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryPsychologyWeights {
    pub industry: String,
    #[serde(flatten)]
    pub weights: FactorValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    High,
    Medium,
}

impl ActionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A quantified remediation step for a triggered factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub factor: Factor,
    pub action: String,
    /// e.g. "CVR +0.3%p → 2.30%"
    pub expected_effect: String,
    /// Expected CVR gain as a fraction
    pub cvr_impact: f64,
    pub priority: ActionPriority,
    pub difficulty: Difficulty,
    pub time_estimate: String,
}

/// Deviation of one factor from its ideal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorImpact {
    pub factor: Factor,
    pub actual: f64,
    pub ideal: f64,
    pub diff: f64,
    /// `diff * coefficient`, in CVR fraction
    pub impact: f64,
    pub message: String,
}

/// Predicted conversion rate for a profile against a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvrPrediction {
    pub predicted_cvr: f64,
    pub baseline_cvr: f64,
    pub cvr_change: f64,
    pub cvr_change_percent: f64,
    /// 50-100
    pub confidence: f64,
    /// Factor name, or [`NO_BOTTLENECK`]
    pub bottleneck: String,
    pub bottleneck_factor: Option<Factor>,
    pub actions: Vec<ActionItem>,
    pub breakdown: Vec<FactorImpact>,
}
