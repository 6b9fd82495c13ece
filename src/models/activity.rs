use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Focus,
    Break,
    Distraction,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Focus => "focus",
            ActivityKind::Break => "break",
            ActivityKind::Distraction => "distraction",
        }
    }
}

/// One immutable slice of tracked activity. Created by the section tracker
/// every 10 accumulated seconds of dwell, pruned after 24 hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub kind: ActivityKind,
    pub duration_secs: u32,
    pub recorded_at: DateTime<Utc>,
    pub section: String,
}

impl ActivityRecord {
    pub fn new(
        kind: ActivityKind,
        duration_secs: u32,
        section: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            duration_secs,
            recorded_at,
            section: section.into(),
        }
    }
}

/// Per-kind breakdown plus the two compliance signals, for the host's
/// breakdown widgets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityMetrics {
    pub focus_secs: u64,
    pub break_secs: u64,
    pub distraction_secs: u64,
    pub location_compliance: f64,
    pub network_quality: f64,
}

impl ProductivityMetrics {
    pub fn from_records(
        records: &[ActivityRecord],
        location_compliant: bool,
        network_points: f64,
    ) -> Self {
        let mut metrics = Self {
            location_compliance: if location_compliant { 100.0 } else { 0.0 },
            network_quality: network_points,
            ..Self::default()
        };

        for record in records {
            let secs = u64::from(record.duration_secs);
            match record.kind {
                ActivityKind::Focus => metrics.focus_secs += secs,
                ActivityKind::Break => metrics.break_secs += secs,
                ActivityKind::Distraction => metrics.distraction_secs += secs,
            }
        }

        metrics
    }
}
