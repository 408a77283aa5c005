//! Built-in reference tables.
//!
//! Benchmarks are monthly figures for the Korean market. Percentage metrics
//! are expressed in percent (3.0 = 3%), costs in KRW.

use crate::domain::models::{
    BenchmarkKey, BenchmarkSeries, BenchmarkTier, ChannelWeightConfig, FactorValues,
    IndustryPsychologyWeights, IndustryWeights, MetricWeightConfig, TierKind,
};

const PERCENTILES: [(TierKind, u8, &str); 5] = [
    (TierKind::Top1, 99, "Top 1%"),
    (TierKind::Top10, 90, "Top 10%"),
    (TierKind::Top25, 75, "Top 25%"),
    (TierKind::Median, 50, "Median"),
    (TierKind::Bottom25, 25, "Bottom 25%"),
];

/// Thresholds are given best tier first: descending for higher-is-better
/// metrics, ascending for lower-is-better ones.
fn series(key: BenchmarkKey, thresholds: [f64; 5]) -> BenchmarkSeries {
    BenchmarkSeries {
        series: key.series,
        metric: key.metric,
        tiers: PERCENTILES
            .iter()
            .zip(thresholds)
            .map(|(&(tier, percentile, label), value)| BenchmarkTier::new(tier, percentile, value, label))
            .collect(),
    }
}

fn generic(channel: &str, metric: &str, thresholds: [f64; 5]) -> BenchmarkSeries {
    series(BenchmarkKey::generic(channel, metric), thresholds)
}

fn industry(industry: &str, channel: &str, metric: &str, thresholds: [f64; 5]) -> BenchmarkSeries {
    series(BenchmarkKey::for_industry(industry, channel, metric), thresholds)
}

pub fn benchmarks() -> Vec<BenchmarkSeries> {
    vec![
        // Website analytics
        generic("ga4", "conversion_rate", [7.0, 4.5, 3.0, 2.0, 1.0]),
        generic("ga4", "bounce_rate", [25.0, 35.0, 45.0, 55.0, 70.0]),
        generic("ga4", "avg_session_duration", [300.0, 180.0, 120.0, 75.0, 40.0]),
        generic("ga4", "sessions", [200_000.0, 50_000.0, 15_000.0, 5_000.0, 1_000.0]),
        generic("ga4", "lead_count", [1_000.0, 300.0, 120.0, 50.0, 15.0]),
        industry("ecommerce", "ga4", "conversion_rate", [6.0, 4.0, 3.0, 2.0, 1.0]),
        industry("saas", "ga4", "conversion_rate", [12.0, 7.0, 5.0, 3.0, 1.5]),
        industry("saas", "ga4", "lead_count", [2_000.0, 600.0, 250.0, 100.0, 30.0]),
        industry("healthcare", "ga4", "conversion_rate", [10.0, 6.0, 4.0, 2.5, 1.2]),
        industry("education", "ga4", "conversion_rate", [9.0, 5.5, 3.5, 2.2, 1.0]),
        industry("education", "ga4", "lead_count", [800.0, 250.0, 100.0, 40.0, 10.0]),
        industry("local_business", "ga4", "conversion_rate", [8.0, 5.0, 3.0, 2.0, 1.0]),
        // Paid search
        generic("search_ads", "search_ctr", [10.0, 6.0, 4.0, 2.5, 1.0]),
        generic("search_ads", "cpc", [300.0, 600.0, 900.0, 1_300.0, 2_000.0]),
        generic("search_ads", "roas", [1_200.0, 600.0, 400.0, 250.0, 100.0]),
        industry("ecommerce", "search_ads", "roas", [1_500.0, 800.0, 500.0, 300.0, 150.0]),
        industry("healthcare", "search_ads", "cpc", [1_000.0, 2_000.0, 3_000.0, 4_500.0, 7_000.0]),
        // Display
        generic("display_ads", "display_ctr", [2.0, 1.0, 0.6, 0.35, 0.15]),
        generic("display_ads", "cpm", [1_500.0, 3_000.0, 4_500.0, 6_500.0, 10_000.0]),
        // Social
        generic("instagram", "engagement_rate", [8.0, 5.0, 3.0, 1.5, 0.5]),
        generic("instagram", "follower_growth", [10.0, 5.0, 3.0, 1.5, 0.3]),
        generic("youtube", "view_rate", [45.0, 30.0, 22.0, 15.0, 8.0]),
        generic("youtube", "subscriber_growth", [15.0, 7.0, 4.0, 2.0, 0.5]),
        // Naver
        generic("naver_blog", "blog_visitors", [100_000.0, 30_000.0, 10_000.0, 3_000.0, 500.0]),
        generic("naver_place", "ranking", [1.0, 3.0, 5.0, 10.0, 20.0]),
        generic("naver_place", "review_count", [3_000.0, 1_000.0, 400.0, 150.0, 30.0]),
        industry("healthcare", "naver_place", "review_count", [1_500.0, 500.0, 200.0, 80.0, 20.0]),
        // Email
        generic("email", "open_rate", [45.0, 30.0, 24.0, 18.0, 10.0]),
        generic("email", "click_rate", [8.0, 4.5, 3.0, 2.0, 0.8]),
    ]
}

fn metric(key: &str, name: &str, channel: &str, weight: f64, description: &str) -> MetricWeightConfig {
    MetricWeightConfig::new(key, name, channel, weight, description)
}

fn channel(channel: &str, priority: u32, weight: f64, description: &str) -> ChannelWeightConfig {
    ChannelWeightConfig::new(channel, priority, weight, description)
}

pub fn industries() -> Vec<IndustryWeights> {
    vec![
        IndustryWeights {
            industry: "ecommerce".to_string(),
            display_name: "E-commerce".to_string(),
            metrics: vec![
                metric("conversion_rate", "Conversion rate", "ga4", 30.0, "purchase conversion from site sessions"),
                metric("roas", "ROAS", "search_ads", 25.0, "revenue returned per won of search ad spend"),
                metric("bounce_rate", "Bounce rate", "ga4", 10.0, "landing page relevance and load speed").lower_is_better(),
                metric("search_ctr", "Search CTR", "search_ads", 10.0, "ad copy and keyword match quality"),
                metric("engagement_rate", "Instagram engagement", "instagram", 10.0, "product content that earns saves and shares"),
                metric("open_rate", "Email open rate", "email", 10.0, "subject lines and send timing for repeat buyers"),
                metric("avg_session_duration", "Session duration", "ga4", 5.0, "product discovery and browsing depth"),
            ],
            channels: vec![
                channel("search_ads", 1, 35.0, "captures purchase intent"),
                channel("instagram", 2, 25.0, "drives discovery and social proof"),
                channel("display_ads", 3, 15.0, "retargets cart abandoners"),
                channel("email", 4, 15.0, "repeat purchase and retention"),
                channel("youtube", 5, 10.0, "product demonstrations"),
            ],
        },
        IndustryWeights {
            industry: "saas".to_string(),
            display_name: "SaaS".to_string(),
            metrics: vec![
                metric("lead_count", "Leads", "ga4", 30.0, "trial signups and demo requests"),
                metric("conversion_rate", "Signup conversion", "ga4", 25.0, "visitor to signup conversion"),
                metric("cpc", "Cost per click", "search_ads", 15.0, "keyword bidding efficiency").lower_is_better(),
                metric("search_ctr", "Search CTR", "search_ads", 10.0, "ad relevance for problem-aware searches"),
                metric("click_rate", "Email click rate", "email", 10.0, "nurture sequence engagement"),
                metric("avg_session_duration", "Session duration", "ga4", 10.0, "depth of documentation and feature page reads"),
            ],
            channels: vec![
                channel("search_ads", 1, 40.0, "problem-aware demand capture"),
                channel("email", 2, 25.0, "lead nurturing"),
                channel("youtube", 3, 15.0, "tutorials and webinars"),
                channel("display_ads", 4, 10.0, "retargeting trial drop-offs"),
                channel("instagram", 5, 10.0, "brand awareness"),
            ],
        },
        IndustryWeights {
            industry: "healthcare".to_string(),
            display_name: "Healthcare".to_string(),
            metrics: vec![
                metric("review_count", "Place reviews", "naver_place", 25.0, "patient reviews on the place listing"),
                metric("ranking", "Place ranking", "naver_place", 20.0, "local search position for treatment keywords").lower_is_better(),
                metric("conversion_rate", "Booking conversion", "ga4", 25.0, "appointment bookings from site visits"),
                metric("blog_visitors", "Blog visitors", "naver_blog", 15.0, "informational content reach"),
                metric("cpc", "Cost per click", "search_ads", 15.0, "bidding on competitive treatment keywords").lower_is_better(),
            ],
            channels: vec![
                channel("naver_place", 1, 35.0, "local discovery and reviews"),
                channel("naver_blog", 2, 30.0, "trust-building content"),
                channel("search_ads", 3, 20.0, "treatment keyword capture"),
                channel("youtube", 4, 15.0, "practitioner explainers"),
            ],
        },
        IndustryWeights {
            industry: "education".to_string(),
            display_name: "Education".to_string(),
            metrics: vec![
                metric("lead_count", "Enrollment leads", "ga4", 30.0, "consultation and trial-class requests"),
                metric("conversion_rate", "Inquiry conversion", "ga4", 20.0, "visitor to inquiry conversion"),
                metric("view_rate", "Video view rate", "youtube", 15.0, "lecture preview completion"),
                metric("blog_visitors", "Blog visitors", "naver_blog", 15.0, "study guide and review post reach"),
                metric("engagement_rate", "Instagram engagement", "instagram", 10.0, "student community interaction"),
                metric("open_rate", "Email open rate", "email", 10.0, "course announcement reach"),
            ],
            channels: vec![
                channel("naver_blog", 1, 30.0, "parent and student research"),
                channel("youtube", 2, 25.0, "lecture previews"),
                channel("search_ads", 3, 20.0, "course keyword capture"),
                channel("instagram", 4, 15.0, "community and results"),
                channel("email", 5, 10.0, "enrolled student retention"),
            ],
        },
        IndustryWeights {
            industry: "local_business".to_string(),
            display_name: "Local business".to_string(),
            metrics: vec![
                metric("ranking", "Place ranking", "naver_place", 30.0, "map position for neighbourhood keywords").lower_is_better(),
                metric("review_count", "Place reviews", "naver_place", 25.0, "visitor reviews and photos"),
                metric("blog_visitors", "Blog visitors", "naver_blog", 15.0, "local blogger coverage"),
                metric("engagement_rate", "Instagram engagement", "instagram", 15.0, "photo content worth sharing"),
                metric("conversion_rate", "Reservation conversion", "ga4", 15.0, "reservations and calls from site visits"),
            ],
            channels: vec![
                channel("naver_place", 1, 40.0, "map search and reviews"),
                channel("instagram", 2, 25.0, "visual discovery"),
                channel("naver_blog", 3, 25.0, "local reviews"),
                channel("search_ads", 4, 10.0, "branded search"),
            ],
        },
    ]
}

pub fn psychology() -> Vec<IndustryPsychologyWeights> {
    [
        ("ecommerce", FactorValues::new(0.25, 0.15, 0.2, 0.25, 0.15)),
        ("saas", FactorValues::new(0.15, 0.15, 0.25, 0.1, 0.3)),
        ("healthcare", FactorValues::new(0.1, 0.25, 0.35, 0.05, 0.2)),
        ("education", FactorValues::new(0.2, 0.15, 0.3, 0.15, 0.2)),
        ("local_business", FactorValues::new(0.2, 0.1, 0.3, 0.25, 0.15)),
    ]
    .into_iter()
    .map(|(industry, weights)| IndustryPsychologyWeights {
        industry: industry.to_string(),
        weights,
    })
    .collect()
}
