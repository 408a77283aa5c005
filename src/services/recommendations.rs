use crate::domain::models::IndustryScoreBreakdown;

/// Metrics scoring below this get a generic recommendation.
pub const LOW_SCORE_THRESHOLD: u8 = 60;

/// Industry-specific advice fires for its metric below this score.
pub const INDUSTRY_ADVICE_THRESHOLD: u8 = 70;

pub const MAX_RECOMMENDATIONS: usize = 5;

struct IndustryAdvice {
    industry: &'static str,
    metric: &'static str,
    sentence: &'static str,
}

// Checked in order; the first match per industry is the only one used.
const INDUSTRY_ADVICE: &[IndustryAdvice] = &[
    IndustryAdvice {
        industry: "ecommerce",
        metric: "conversion_rate",
        sentence: "Shorten the checkout flow and surface shipping costs before the cart to lift purchase conversion.",
    },
    IndustryAdvice {
        industry: "ecommerce",
        metric: "roas",
        sentence: "Shift ad budget toward retargeting and best-selling products to recover return on ad spend.",
    },
    IndustryAdvice {
        industry: "saas",
        metric: "lead_count",
        sentence: "Offer a free trial or gated template on high-intent pages to grow qualified lead volume.",
    },
    IndustryAdvice {
        industry: "saas",
        metric: "conversion_rate",
        sentence: "Cut signup form fields to the minimum and defer onboarding questions until after activation.",
    },
    IndustryAdvice {
        industry: "healthcare",
        metric: "review_count",
        sentence: "Ask satisfied patients for reviews after each visit; review volume is the main trust signal in this vertical.",
    },
    IndustryAdvice {
        industry: "healthcare",
        metric: "ranking",
        sentence: "Publish treatment-specific pages with practitioner credentials to climb local search rankings.",
    },
    IndustryAdvice {
        industry: "education",
        metric: "lead_count",
        sentence: "Promote consultation or trial-class booking in every channel to increase enrollment leads.",
    },
    IndustryAdvice {
        industry: "local_business",
        metric: "ranking",
        sentence: "Complete the place listing with hours, photos and menu items and keep it updated weekly to improve map ranking.",
    },
    IndustryAdvice {
        industry: "local_business",
        metric: "review_count",
        sentence: "Run a receipt or table-card review campaign; place rankings lean heavily on fresh reviews.",
    },
];

/// Builds the ordered recommendation list for an industry score.
#[derive(Debug, Clone)]
pub struct RecommendationBuilder {
    max_recommendations: usize,
}

impl Default for RecommendationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationBuilder {
    pub fn new() -> Self {
        Self {
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_limit(max_recommendations: usize) -> Self {
        Self {
            max_recommendations,
        }
    }

    /// Produce recommendations, lowest-scoring metrics first.
    ///
    /// `descriptions` yields the configured description for a metric key.
    pub fn build<'a>(
        &self,
        industry: &str,
        breakdown: &[IndustryScoreBreakdown],
        description: impl Fn(&str) -> Option<&'a str>,
    ) -> Vec<String> {
        let mut ranked: Vec<(u8, String)> = breakdown
            .iter()
            .filter(|entry| entry.score < LOW_SCORE_THRESHOLD)
            .map(|entry| {
                let what = description(&entry.metric).unwrap_or(&entry.name);
                (
                    entry.score,
                    format!(
                        "{} sits in the {} band ({}). Work on {} to reach the industry median.",
                        entry.name, entry.label, entry.tier, what
                    ),
                )
            })
            .collect();

        if let Some((score, advice)) = self.industry_advice(industry, breakdown) {
            ranked.push((score, advice.to_string()));
        }

        // Stable, so a metric's generic sentence stays ahead of its industry advice
        ranked.sort_by_key(|(score, _)| *score);
        ranked.truncate(self.max_recommendations);
        ranked.into_iter().map(|(_, sentence)| sentence).collect()
    }

    fn industry_advice(
        &self,
        industry: &str,
        breakdown: &[IndustryScoreBreakdown],
    ) -> Option<(u8, &'static str)> {
        INDUSTRY_ADVICE
            .iter()
            .filter(|advice| advice.industry == industry)
            .find_map(|advice| {
                breakdown
                    .iter()
                    .find(|entry| {
                        entry.metric == advice.metric && entry.score < INDUSTRY_ADVICE_THRESHOLD
                    })
                    .map(|entry| (entry.score, advice.sentence))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TierKind;

    fn entry(metric: &str, tier: TierKind) -> IndustryScoreBreakdown {
        IndustryScoreBreakdown {
            metric: metric.to_string(),
            name: metric.replace('_', " "),
            value: 1.0,
            score: tier.score(),
            weight: 10.0,
            normalized_weight: 0.1,
            weighted_score: 0.0,
            tier,
            percentile: 25,
            label: tier.as_str().to_string(),
        }
    }

    #[test]
    fn test_no_recommendations_for_healthy_metrics() {
        let breakdown = vec![entry("sessions", TierKind::Top10), entry("ctr", TierKind::Median)];
        let recs = RecommendationBuilder::new().build("saas", &breakdown, |_| None);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_low_metric_references_description() {
        let breakdown = vec![entry("ctr", TierKind::Bottom25)];
        let recs = RecommendationBuilder::new().build("saas", &breakdown, |_| Some("ad click-through"));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("ad click-through"));
    }

    #[test]
    fn test_industry_advice_fires_below_seventy() {
        // Median scores 60: no generic sentence, but industry advice applies
        let breakdown = vec![entry("lead_count", TierKind::Median)];
        let recs = RecommendationBuilder::new().build("saas", &breakdown, |_| None);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("free trial"));

        let other = RecommendationBuilder::new().build("ecommerce", &breakdown, |_| None);
        assert!(other.is_empty());
    }

    #[test]
    fn test_at_most_one_industry_sentence() {
        let breakdown = vec![
            entry("ranking", TierKind::Median),
            entry("review_count", TierKind::Median),
        ];
        let recs = RecommendationBuilder::new().build("local_business", &breakdown, |_| None);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("place listing"));
    }

    #[test]
    fn test_capped_and_lowest_first() {
        let mut breakdown: Vec<_> = (0..6)
            .map(|i| entry(&format!("metric_{i}"), TierKind::Bottom25))
            .collect();
        breakdown.insert(0, entry("conversion_rate", TierKind::Median));

        let recs = RecommendationBuilder::new().build("ecommerce", &breakdown, |_| None);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs.iter().all(|r| !r.contains("checkout")));
        assert!(recs[0].starts_with("metric 0"));
    }
}
