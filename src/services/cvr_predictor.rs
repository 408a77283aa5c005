use tracing::{debug, instrument};

use crate::domain::models::{
    ActionItem, ActionPriority, CvrPrediction, Difficulty, Factor, FactorImpact,
    PredictorConfig, PsychologicalProfile, NO_BOTTLENECK,
};

/// Share of a factor's CVR loss each catalogued action is expected to recover.
const ACTION_SHARES: [f64; 3] = [0.5, 0.3, 0.2];

struct ActionTemplate {
    action: &'static str,
    difficulty: Difficulty,
    time_estimate: &'static str,
}

const fn template(action: &'static str, difficulty: Difficulty, time_estimate: &'static str) -> ActionTemplate {
    ActionTemplate {
        action,
        difficulty,
        time_estimate,
    }
}

const COGNITIVE_LOAD_ACTIONS: [ActionTemplate; 3] = [
    template("Cut form fields down to the essentials", Difficulty::Easy, "1-2 days"),
    template("Remove competing calls to action and simplify navigation", Difficulty::Medium, "1 week"),
    template("Rebuild the page layout around a single primary task", Difficulty::Hard, "2-4 weeks"),
];

const CORTISOL_ACTIONS: [ActionTemplate; 3] = [
    template("Remove intrusive pop-ups and aggressive countdown timers", Difficulty::Easy, "1 day"),
    template("Show pricing, shipping and refund terms before checkout", Difficulty::Medium, "3-5 days"),
    template("Add a risk-free guarantee or free trial", Difficulty::Hard, "2 weeks"),
];

const DOPAMINE_ACTIONS: [ActionTemplate; 3] = [
    template("Lead the hero section with a benefit headline and product visual", Difficulty::Easy, "2-3 days"),
    template("Add progress indicators and small rewards through the funnel", Difficulty::Medium, "1 week"),
    template("Personalize recommendations from browsing behaviour", Difficulty::Hard, "3-4 weeks"),
];

const TRUST_ACTIONS: [ActionTemplate; 3] = [
    template("Place reviews and ratings next to the primary call to action", Difficulty::Easy, "1-2 days"),
    template("Show security badges and certifications at checkout", Difficulty::Medium, "3-5 days"),
    template("Publish case studies and expert endorsements", Difficulty::Hard, "2-3 weeks"),
];

fn catalog(factor: Factor) -> &'static [ActionTemplate] {
    match factor {
        Factor::CognitiveLoad => &COGNITIVE_LOAD_ACTIONS,
        Factor::Cortisol => &CORTISOL_ACTIONS,
        Factor::Dopamine => &DOPAMINE_ACTIONS,
        Factor::Trust => &TRUST_ACTIONS,
        Factor::Urgency => &[],
    }
}

/// Predicts conversion rate from a psychological profile.
///
/// Linear model around fixed ideal points:
/// `predicted = max(0, baseline + Σ (actual - ideal) * coefficient)`.
/// Closed-form and deterministic; identical inputs always give identical output.
#[derive(Debug, Clone, Default)]
pub struct PsychologyCvrPredictor {
    config: PredictorConfig,
}

impl PsychologyCvrPredictor {
    /// Create a predictor with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a predictor with recalibrated constants
    pub fn with_config(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict CVR for an (already industry-adjusted) profile
    #[instrument(skip(self, profile))]
    pub fn predict(&self, profile: &PsychologicalProfile, baseline_cvr: f64) -> CvrPrediction {
        let breakdown: Vec<FactorImpact> = Factor::ALL
            .iter()
            .map(|&factor| self.factor_impact(factor, profile.get(factor)))
            .collect();

        let total_impact: f64 = breakdown.iter().map(|b| b.impact).sum();
        let predicted_cvr = (baseline_cvr + total_impact).max(0.0);
        let cvr_change_percent = if baseline_cvr > 0.0 {
            total_impact / baseline_cvr * 100.0
        } else {
            0.0
        };

        let mean_abs_diff =
            breakdown.iter().map(|b| b.diff.abs()).sum::<f64>() / breakdown.len() as f64;
        let confidence = (100.0 - self.config.confidence_penalty * mean_abs_diff)
            .max(self.config.confidence_floor)
            .min(100.0);

        let triggered: Vec<(&FactorImpact, f64)> = breakdown
            .iter()
            .filter_map(|b| {
                self.config
                    .triggers
                    .excess(b.factor, b.actual)
                    .map(|excess| (b, excess))
            })
            .collect();

        // Strictly greater keeps the earliest factor on ties
        let bottleneck_factor = triggered
            .iter()
            .fold(None::<&FactorImpact>, |best, &(b, _)| match best {
                Some(current) if current.impact.abs() >= b.impact.abs() => Some(current),
                _ => Some(b),
            })
            .map(|b| b.factor);

        let mut actions: Vec<ActionItem> = triggered
            .iter()
            .flat_map(|(b, excess)| self.actions_for(b, *excess, baseline_cvr))
            .collect();
        actions.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then(b.cvr_impact.total_cmp(&a.cvr_impact))
        });

        let bottleneck = bottleneck_factor.map_or_else(|| NO_BOTTLENECK.to_string(), |f| f.to_string());

        debug!(
            baseline_cvr,
            predicted_cvr,
            confidence,
            bottleneck = %bottleneck,
            actions = actions.len(),
            "cvr predicted"
        );

        CvrPrediction {
            predicted_cvr,
            baseline_cvr,
            cvr_change: predicted_cvr - baseline_cvr,
            cvr_change_percent,
            confidence,
            bottleneck,
            bottleneck_factor,
            actions,
            breakdown,
        }
    }

    fn factor_impact(&self, factor: Factor, actual: f64) -> FactorImpact {
        let ideal = self.config.ideals.get(factor);
        let diff = actual - ideal;
        let impact = diff * self.config.coefficients.get(factor);

        let message = if diff == 0.0 {
            format!("{factor} is at its ideal of {ideal:.1}")
        } else {
            let side = if diff > 0.0 { "above" } else { "below" };
            format!(
                "{factor} is {:.1} points {side} its ideal of {ideal:.1} ({:+.2}%p CVR)",
                diff.abs(),
                impact * 100.0
            )
        };

        FactorImpact {
            factor,
            actual,
            ideal,
            diff,
            impact,
            message,
        }
    }

    /// One to three actions for a triggered factor.
    ///
    /// Strongly exceeded thresholds get all three at high priority; otherwise
    /// two when the trigger is exceeded by a full point, else one.
    fn actions_for(&self, impact: &FactorImpact, excess: f64, baseline_cvr: f64) -> Vec<ActionItem> {
        let strong = self
            .config
            .strong_triggers
            .excess(impact.factor, impact.actual)
            .is_some();
        let (priority, count) = if strong {
            (ActionPriority::High, 3)
        } else if excess >= 1.0 {
            (ActionPriority::Medium, 2)
        } else {
            (ActionPriority::Medium, 1)
        };

        let recoverable = impact.impact.abs();

        catalog(impact.factor)
            .iter()
            .zip(ACTION_SHARES)
            .take(count)
            .map(|(template, share)| {
                let cvr_impact = recoverable * share;
                ActionItem {
                    factor: impact.factor,
                    action: template.action.to_string(),
                    expected_effect: format!(
                        "CVR +{:.1}%p → {:.2}%",
                        cvr_impact * 100.0,
                        (baseline_cvr + cvr_impact) * 100.0
                    ),
                    cvr_impact,
                    priority,
                    difficulty: template.difficulty,
                    time_estimate: template.time_estimate.to_string(),
                }
            })
            .collect()
    }
}
