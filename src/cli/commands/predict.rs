//! `marketlens predict`: CVR prediction from a psychological profile.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use super::require_industry;
use crate::cli::display::{
    colorize_delta, colorize_priority, fraction_as_percent, output, CommandOutput, DetailView,
};
use crate::domain::models::{CvrPrediction, Factor, PsychologicalProfile};
use crate::services::ScoringEngine;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Excitement and reward anticipation (1-10)
    #[arg(long)]
    pub dopamine: f64,

    /// Stress and friction (1-10, lower is better)
    #[arg(long)]
    pub cortisol: f64,

    /// Perceived credibility (1-10)
    #[arg(long)]
    pub trust: f64,

    /// Time pressure to act now (1-10)
    #[arg(long)]
    pub urgency: f64,

    /// Mental effort required (1-10, lower is better)
    #[arg(long = "cognitive-load")]
    pub cognitive_load: f64,

    /// Baseline conversion rate as a fraction, e.g. 0.02 for 2%
    #[arg(short, long)]
    pub baseline: f64,

    /// Adjust the profile for this industry before predicting
    #[arg(short, long)]
    pub industry: Option<String>,
}

impl PredictArgs {
    pub fn profile(&self) -> PsychologicalProfile {
        PsychologicalProfile::new(
            self.dopamine,
            self.cortisol,
            self.trust,
            self.urgency,
            self.cognitive_load,
        )
    }
}

pub fn execute(args: PredictArgs, engine: &ScoringEngine, json: bool) -> Result<()> {
    if !args.baseline.is_finite() || args.baseline < 0.0 {
        bail!("Baseline CVR must be a non-negative number, got {}", args.baseline);
    }
    let profile = args.profile();

    let (adjusted_profile, prediction) = match &args.industry {
        Some(industry) => {
            require_industry(engine, industry)?;
            let adjusted = engine.adjust_profile(&profile, industry);
            (Some(adjusted), engine.predict(&adjusted, args.baseline))
        }
        None => (None, engine.predict(&profile, args.baseline)),
    };

    output(
        &PredictOutput {
            industry: args.industry,
            profile,
            adjusted_profile,
            prediction,
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PredictOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub profile: PsychologicalProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_profile: Option<PsychologicalProfile>,
    #[serde(flatten)]
    pub prediction: CvrPrediction,
}

fn profile_line(profile: &PsychologicalProfile) -> String {
    Factor::ALL
        .iter()
        .map(|factor| format!("{factor} {:.1}", profile.get(*factor)))
        .collect::<Vec<_>>()
        .join(", ")
}

impl CommandOutput for PredictOutput {
    fn to_human(&self) -> String {
        let p = &self.prediction;
        let change = format!(
            "{:+.2}%p ({:+.1}%)",
            p.cvr_change * 100.0,
            p.cvr_change_percent
        );

        let mut view = DetailView::new("CVR prediction")
            .field("Predicted", fraction_as_percent(p.predicted_cvr))
            .field("Baseline", fraction_as_percent(p.baseline_cvr))
            .field("Change", colorize_delta(change, p.cvr_change).to_string())
            .field("Confidence", format!("{:.0}%", p.confidence))
            .field("Bottleneck", p.bottleneck.clone())
            .field("Profile", profile_line(&self.profile));

        if let (Some(industry), Some(adjusted)) = (&self.industry, &self.adjusted_profile) {
            view = view.field(&format!("Adjusted ({industry})"), profile_line(adjusted));
        }

        view = view.section("Factors").items_or(
            p.breakdown.iter().map(|impact| {
                format!("{} ({:+.2}%p)", impact.message, impact.impact * 100.0)
            }),
            "no factor data",
        );

        view.section("Actions")
            .items_or(
                p.actions.iter().map(|action| {
                    format!(
                        "[{}] {}: {} ({}, {}, {})",
                        colorize_priority(action.priority.as_str()),
                        action.factor,
                        action.action,
                        action.expected_effect,
                        action.difficulty.as_str(),
                        action.time_estimate
                    )
                }),
                "no actions needed",
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(industry: Option<&str>) -> PredictArgs {
        PredictArgs {
            dopamine: 5.0,
            cortisol: 7.5,
            trust: 6.0,
            urgency: 5.0,
            cognitive_load: 6.5,
            baseline: 0.02,
            industry: industry.map(str::to_string),
        }
    }

    #[test]
    fn test_profile_from_args() {
        let profile = sample_args(None).profile();
        assert_eq!(profile.cortisol_score, 7.5);
        assert_eq!(profile.cognitive_load, 6.5);
    }

    #[test]
    fn test_human_output_has_actions() {
        let engine = ScoringEngine::with_defaults();
        let args = sample_args(None);
        let profile = args.profile();
        let human = PredictOutput {
            industry: None,
            profile,
            adjusted_profile: None,
            prediction: engine.predict(&profile, args.baseline),
        }
        .to_human();

        assert!(human.contains("CVR prediction"));
        assert!(human.contains("2.00%"));
        assert!(human.contains("cortisol"));
        assert!(!human.contains("no actions needed"));
    }

    #[test]
    fn test_json_output_omits_missing_industry() {
        let engine = ScoringEngine::with_defaults();
        let profile = sample_args(None).profile();
        let json = PredictOutput {
            industry: None,
            profile,
            adjusted_profile: None,
            prediction: engine.predict(&profile, 0.02),
        }
        .to_json();

        assert!(json.get("industry").is_none());
        assert!(json.get("adjusted_profile").is_none());
        assert_eq!(json["baseline_cvr"], 0.02);
        assert!(json["actions"].is_array());
    }

    #[test]
    fn test_negative_baseline_rejected() {
        let engine = ScoringEngine::with_defaults();
        let mut args = sample_args(None);
        args.baseline = -0.1;
        assert!(execute(args, &engine, true).is_err());
    }
}
