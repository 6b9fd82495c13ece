use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::location::WorkSite;

/// Raw coordinate pair as delivered by a location sensor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Most recent location observation. Each new fix replaces the previous
/// sample wholesale; no history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub observed_at: DateTime<Utc>,
    pub at_work_location: bool,
}

impl LocationSample {
    pub fn observe(
        latitude: f64,
        longitude: f64,
        site: &WorkSite,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            observed_at,
            at_work_location: site.contains(latitude, longitude),
        }
    }
}
