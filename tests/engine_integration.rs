//! End-to-end scoring scenarios through the `ScoringEngine` facade.

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use common::{builtin_engine, fixture_engine, ideal_profile, stressed_profile};
use marketlens::domain::models::{ActionPriority, Factor, NO_BOTTLENECK};
use marketlens::{MetricValue, TierKind};

fn readings(values: &[(&str, f64)]) -> Vec<MetricValue> {
    values
        .iter()
        .map(|(key, value)| MetricValue::new(*key, *value))
        .collect()
}

// ---- industry scores ----

#[test]
fn empty_metric_set_yields_zero_result() {
    let engine = builtin_engine();
    let result = engine.aggregate("ecommerce", &[]);

    assert_eq!(result.total_score, 0);
    assert!(result.breakdown.is_empty());
    assert!(result.recommendations.is_empty());
    assert!(result.top_strengths.is_empty());
    assert!(result.top_weaknesses.is_empty());
}

#[test]
fn unknown_industry_degrades_to_empty_result() {
    let engine = builtin_engine();
    let result = engine.aggregate("shipbuilding", &readings(&[("conversion_rate", 5.0)]));

    assert_eq!(result.industry, "shipbuilding");
    assert_eq!(result.total_score, 0);
    assert!(result.breakdown.is_empty());
}

#[test]
fn single_metric_at_top1_threshold_scores_95() {
    let engine = fixture_engine(&[("a", 30.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 50.0)]));

    assert_eq!(result.total_score, 95);
    assert_eq!(result.breakdown[0].tier, TierKind::Top1);
    assert_eq!(result.breakdown[0].normalized_weight, 1.0);
}

#[test]
fn weights_normalize_over_scored_subset() {
    let engine = fixture_engine(&[("a", 30.0), ("b", 70.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 40.0)]));

    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.breakdown[0].normalized_weight, 1.0);
    assert_eq!(result.total_score, result.breakdown[0].score);
    assert_eq!(result.total_score, 85);
}

#[test]
fn weighted_sum_is_rounded() {
    // 95 * 0.25 + 60 * 0.75 = 68.75
    let engine = fixture_engine(&[("a", 25.0), ("b", 75.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 50.0), ("b", 20.0)]));

    assert_eq!(result.total_score, 69);
    let weighted: f64 = result.breakdown.iter().map(|b| b.weighted_score).sum();
    assert!((weighted - 68.75).abs() < 1e-9);
}

#[test]
fn unweighted_metrics_are_skipped() {
    let engine = fixture_engine(&[("a", 30.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 30.0), ("unknown", 99.0)]));

    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.total_score, 75);
}

#[test]
fn duplicate_metric_keys_keep_last_reading() {
    let engine = fixture_engine(&[("a", 30.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 5.0), ("a", 50.0)]));

    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.breakdown[0].value, 50.0);
    assert_eq!(result.total_score, 95);
}

#[test]
fn strengths_and_weaknesses_are_ranked() {
    let engine = fixture_engine(&[("a", 10.0), ("b", 10.0), ("c", 10.0), ("d", 10.0)], &[]);
    let result = engine.aggregate(
        "fixture",
        &readings(&[("c", 20.0), ("a", 50.0), ("d", 0.0), ("b", 40.0)]),
    );

    let strengths: Vec<&str> = result.top_strengths.iter().map(|b| b.metric.as_str()).collect();
    let weaknesses: Vec<&str> = result.top_weaknesses.iter().map(|b| b.metric.as_str()).collect();
    assert_eq!(strengths, vec!["a", "b", "c"]);
    assert_eq!(weaknesses, vec!["d", "c", "b"]);
}

#[test]
fn low_scores_get_generic_recommendations() {
    let engine = fixture_engine(&[("a", 50.0), ("b", 50.0)], &[]);
    let result = engine.aggregate("fixture", &readings(&[("a", 50.0), ("b", 0.0)]));

    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("b work"));
}

#[test]
fn recommendations_are_capped_at_five() {
    let keys = ["a", "b", "c", "d", "e", "f", "g"];
    let weights: Vec<(&str, f64)> = keys.iter().map(|k| (*k, 10.0)).collect();
    let engine = fixture_engine(&weights, &[]);
    let values: Vec<(&str, f64)> = keys.iter().map(|k| (*k, 0.0)).collect();

    let result = engine.aggregate("fixture", &readings(&values));
    assert_eq!(result.breakdown.len(), 7);
    assert_eq!(result.recommendations.len(), 5);
}

#[test]
fn industry_advice_adds_one_sentence() {
    let engine = builtin_engine();
    let result = engine.aggregate(
        "ecommerce",
        &readings(&[("conversion_rate", 0.5), ("roas", 100.0)]),
    );

    // Two generic sentences plus only the first matching industry sentence
    assert_eq!(result.recommendations.len(), 3);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("checkout flow")));
    assert!(!result
        .recommendations
        .iter()
        .any(|r| r.contains("retargeting and best-selling")));
}

#[test]
fn industry_advice_fires_below_seventy() {
    let engine = builtin_engine();
    // Median band: 60, no generic sentence but industry advice applies
    let result = engine.aggregate("saas", &readings(&[("lead_count", 120.0)]));

    assert_eq!(result.breakdown[0].score, 60);
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("lead volume"));
}

#[test]
fn lower_is_better_metrics_resolve_small_values_high() {
    let engine = builtin_engine();

    let best = engine.resolve("ecommerce", "bounce_rate", 20.0).unwrap();
    assert_eq!(best.tier, TierKind::Top1);

    let worst = engine.resolve("ecommerce", "bounce_rate", 80.0).unwrap();
    assert_eq!(worst.tier, TierKind::Bottom25);

    let ranked_first = engine.resolve("local_business", "ranking", 1.0).unwrap();
    assert_eq!(ranked_first.score(), 95);
}

// ---- channel scores ----

#[test]
fn channel_divergence_is_mean_minus_weighted() {
    let engine = fixture_engine(&[], &[("search", 1, 60.0), ("social", 2, 40.0)]);
    let scores = BTreeMap::from([
        ("search".to_string(), 80.0),
        ("social".to_string(), 50.0),
        ("print".to_string(), 20.0),
    ]);

    let result = engine.aggregate_channels("fixture", &scores);
    assert_eq!(result.total_channel_score, 50.0);
    assert_eq!(result.weighted_channel_score, 68.0);
    assert_eq!(result.divergence, -18.0);

    let order: Vec<&str> = result.breakdown.iter().map(|b| b.channel.as_str()).collect();
    assert_eq!(order, vec!["search", "social", "print"]);
    assert_eq!(result.breakdown[2].priority, None);
    assert_eq!(result.breakdown[2].weighted_score, 0.0);
}

#[test]
fn channel_aggregation_of_nothing_is_zero() {
    let engine = builtin_engine();
    let result = engine.aggregate_channels("ecommerce", &BTreeMap::new());

    assert_eq!(result.total_channel_score, 0.0);
    assert_eq!(result.weighted_channel_score, 0.0);
    assert!(result.breakdown.is_empty());
}

// ---- CVR prediction ----

#[test]
fn ideal_profile_predicts_baseline() {
    let engine = builtin_engine();
    let prediction = engine.predict(&ideal_profile(), 0.02);

    assert_eq!(prediction.predicted_cvr, 0.02);
    assert_eq!(prediction.cvr_change, 0.0);
    assert_eq!(prediction.bottleneck, NO_BOTTLENECK);
    assert!(prediction.bottleneck_factor.is_none());
    assert!(prediction.actions.is_empty());
    assert_eq!(prediction.confidence, 100.0);
    assert!(prediction.breakdown.iter().all(|impact| impact.impact == 0.0));
}

#[test]
fn bottleneck_is_largest_triggered_impact() {
    let engine = builtin_engine();
    let prediction = engine.predict(&stressed_profile(), 0.02);

    // cortisol: 6 * 0.002 = 0.012 beats cognitive load: 6 * 0.0018 = 0.0108
    assert_eq!(prediction.bottleneck, "cortisol");
    assert_eq!(prediction.bottleneck_factor, Some(Factor::Cortisol));
    assert_eq!(prediction.predicted_cvr, 0.0);
    assert!(prediction.cvr_change_percent < -190.0);
    assert_eq!(prediction.confidence, 51.0);
}

#[test]
fn actions_sorted_by_priority_then_impact() {
    let engine = builtin_engine();
    let prediction = engine.predict(&stressed_profile(), 0.02);

    assert!(!prediction.actions.is_empty());
    for pair in prediction.actions.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.priority <= b.priority);
        if a.priority == b.priority {
            assert!(a.cvr_impact >= b.cvr_impact);
        }
    }
    assert_eq!(prediction.actions[0].priority, ActionPriority::High);
    assert!(prediction.actions[0].expected_effect.starts_with("CVR +"));
}

#[test]
fn prediction_is_idempotent() {
    let engine = builtin_engine();
    let profile = stressed_profile();
    assert_eq!(engine.predict(&profile, 0.031), engine.predict(&profile, 0.031));
}

#[test]
fn industry_adjustment_runs_before_prediction() {
    let engine = builtin_engine();
    let profile = ideal_profile();

    let adjusted = engine.adjust_profile(&profile, "healthcare");
    let direct = engine.predict(&adjusted, 0.02);
    let combined = engine.predict_for_industry(&profile, "healthcare", 0.02);
    assert_eq!(direct, combined);

    // Unknown industries leave the profile untouched
    assert_eq!(engine.adjust_profile(&profile, "shipbuilding"), profile);
}

// ---- concurrency ----

#[test]
fn engine_is_shared_across_threads() {
    let engine = Arc::new(builtin_engine());
    let expected = engine.aggregate("saas", &readings(&[("lead_count", 700.0)]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.aggregate("saas", &readings(&[("lead_count", 700.0)])))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
