use std::sync::Arc;
use tracing::debug;

use crate::domain::models::{Factor, FactorValues, PsychologicalProfile};
use crate::domain::ports::PsychologyWeightRepository;

/// Factor weights of the "average" industry.
pub const REFERENCE_WEIGHTS: FactorValues = FactorValues::new(0.2, 0.15, 0.2, 0.2, 0.2);

/// How strongly a weight gap moves the raw score.
pub const ADJUSTMENT_SENSITIVITY: f64 = 0.5;

/// Rescales a raw profile to an industry's emphasis before prediction.
///
/// Each factor is multiplied by
/// `1 + (industry_weight - reference_weight) * 0.5`.
/// Must run before [`crate::services::PsychologyCvrPredictor::predict`],
/// whose thresholds assume an adjusted scale.
pub struct IndustryPsychologyAdjuster {
    weights: Arc<dyn PsychologyWeightRepository>,
}

impl IndustryPsychologyAdjuster {
    pub fn new(weights: Arc<dyn PsychologyWeightRepository>) -> Self {
        Self { weights }
    }

    /// Adjust a profile for an industry
    ///
    /// Industries without configured weights get the profile back unchanged.
    pub fn adjust(&self, profile: &PsychologicalProfile, industry: &str) -> PsychologicalProfile {
        let Some(weights) = self.weights.psychology_weights(industry) else {
            debug!(industry, "no psychology weights for industry, using raw profile");
            return *profile;
        };

        Factor::ALL.iter().fold(*profile, |adjusted, &factor| {
            adjusted.with(factor, profile.get(factor) * scale(weights, factor))
        })
    }
}

/// Multiplier applied to one factor for the given industry weights.
pub fn scale(weights: &FactorValues, factor: Factor) -> f64 {
    1.0 + (weights.get(factor) - REFERENCE_WEIGHTS.get(factor)) * ADJUSTMENT_SENSITIVITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::IndustryPsychologyWeights;
    use crate::infrastructure::reference::ReferenceData;

    fn adjuster() -> IndustryPsychologyAdjuster {
        let data = ReferenceData::from_parts(
            vec![],
            vec![],
            vec![
                IndustryPsychologyWeights {
                    industry: "average".to_string(),
                    weights: REFERENCE_WEIGHTS,
                },
                IndustryPsychologyWeights {
                    industry: "trusty".to_string(),
                    weights: FactorValues::new(0.2, 0.15, 0.4, 0.2, 0.0),
                },
            ],
        )
        .unwrap();
        IndustryPsychologyAdjuster::new(Arc::new(data))
    }

    #[test]
    fn test_reference_weights_are_identity() {
        let profile = PsychologicalProfile::new(5.0, 5.0, 5.0, 5.0, 5.0);
        assert_eq!(adjuster().adjust(&profile, "average"), profile);
    }

    #[test]
    fn test_unknown_industry_is_identity() {
        let profile = PsychologicalProfile::new(3.0, 4.0, 5.0, 6.0, 7.0);
        assert_eq!(adjuster().adjust(&profile, "unknown"), profile);
    }

    #[test]
    fn test_scaling_per_factor() {
        let profile = PsychologicalProfile::new(5.0, 5.0, 5.0, 5.0, 5.0);
        let adjusted = adjuster().adjust(&profile, "trusty");

        // trust: 1 + (0.4 - 0.2) * 0.5 = 1.1
        assert!((adjusted.trust_score - 5.5).abs() < 1e-12);
        // cognitive load: 1 + (0.0 - 0.2) * 0.5 = 0.9
        assert!((adjusted.cognitive_load - 4.5).abs() < 1e-12);
        assert_eq!(adjusted.dopamine_score, 5.0);
    }
}
