//! Additive, capped productivity score plus qualitative insights.
//!
//! Pure over its inputs; the engine recomputes it on every snapshot since
//! the samples and the log mutate underneath it.

mod config;

pub use config::ScoringConfig;

use serde::Serialize;

use crate::models::{ActivityKind, ActivityRecord, EffectiveType, LocationSample, NetworkSample};
use crate::network::{meets_excellent, meets_good};

pub const WORK_START_HOUR: u32 = 9;
pub const WORK_END_HOUR: u32 = 18;

pub const INSIGHT_EXCELLENT: &str = "Excellent productivity! Keep up the great work.";
pub const INSIGHT_GOOD: &str =
    "Good productivity. Consider improving network quality or location compliance.";
pub const INSIGHT_NEEDS_IMPROVEMENT: &str =
    "Productivity could be improved. Check your location and network connection.";
pub const INSIGHT_OUTSIDE_HOURS: &str = "Currently outside working hours (9 AM - 6 PM)";

pub fn is_working_hours(hour: u32) -> bool {
    (WORK_START_HOUR..=WORK_END_HOUR).contains(&hour)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: f64,
    pub location_points: f64,
    pub network_points: f64,
    pub activity_points: f64,
    pub insights: Vec<String>,
}

pub fn score(
    location: Option<&LocationSample>,
    network: Option<&NetworkSample>,
    records_today: &[ActivityRecord],
    working_hours: bool,
    config: &ScoringConfig,
) -> ScoreReport {
    let location_points = score_location(location, working_hours, config);
    let network_points = score_network(network, config);
    let activity_points = score_activity(records_today, config);

    let score = (location_points + network_points + activity_points).min(config.score_cap);

    ScoreReport {
        score,
        location_points,
        network_points,
        activity_points,
        insights: build_insights(score, working_hours),
    }
}

fn score_location(
    location: Option<&LocationSample>,
    working_hours: bool,
    config: &ScoringConfig,
) -> f64 {
    let at_work = location.map(|sample| sample.at_work_location).unwrap_or(false);
    if at_work && working_hours {
        config.location_points
    } else {
        0.0
    }
}

/// Highest matching band wins; predicates shared with the classifier so
/// the displayed tier and the awarded points cannot disagree.
pub fn score_network(network: Option<&NetworkSample>, config: &ScoringConfig) -> f64 {
    match network {
        None => 0.0,
        Some(sample) if meets_excellent(sample) => config.excellent_points,
        Some(sample) if meets_good(sample) => config.good_points,
        Some(sample) if sample.effective_type == EffectiveType::ThreeG => config.three_g_points,
        Some(_) => 0.0,
    }
}

fn score_activity(records_today: &[ActivityRecord], config: &ScoringConfig) -> f64 {
    if records_today.is_empty() {
        return 0.0;
    }

    let total_secs: u64 = records_today
        .iter()
        .map(|record| u64::from(record.duration_secs))
        .sum();
    let focus_count = records_today
        .iter()
        .filter(|record| record.kind == ActivityKind::Focus)
        .count();
    let focus_ratio = focus_count as f64 / records_today.len() as f64;

    let raw = (total_secs as f64 / 3600.0) * config.hour_points
        + focus_ratio * config.focus_ratio_points;
    raw.min(config.activity_cap)
}

/// Band message first, then the working-hours caveat.
pub fn build_insights(score: f64, working_hours: bool) -> Vec<String> {
    let band = if score >= 80.0 {
        INSIGHT_EXCELLENT
    } else if score >= 60.0 {
        INSIGHT_GOOD
    } else {
        INSIGHT_NEEDS_IMPROVEMENT
    };

    let mut insights = vec![band.to_string()];
    if !working_hours {
        insights.push(INSIGHT_OUTSIDE_HOURS.to_string());
    }
    insights
}
