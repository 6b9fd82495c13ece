use serde::{Deserialize, Serialize};

use crate::models::LocationSample;

/// Fixed reference point for work-location checks, with a radius expressed
/// in raw degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSite {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_degrees: f64,
}

impl Default for WorkSite {
    fn default() -> Self {
        Self {
            latitude: 30.2708,
            longitude: 78.0036,
            // ~1km at low latitudes; a crude proxy, not geodesic
            radius_degrees: 0.01,
        }
    }
}

impl WorkSite {
    /// Euclidean distance in degree units, not great-circle.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let distance =
            ((latitude - self.latitude).powi(2) + (longitude - self.longitude).powi(2)).sqrt();
        distance <= self.radius_degrees
    }
}

/// Status line for the host's location card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LocationStatus {
    Unavailable,
    AtWork,
    AwayFromWork,
    OutsideHours,
}

impl LocationStatus {
    pub fn derive(sample: Option<&LocationSample>, working_hours: bool) -> Self {
        match sample {
            None => LocationStatus::Unavailable,
            Some(s) if s.at_work_location && working_hours => LocationStatus::AtWork,
            Some(_) if working_hours => LocationStatus::AwayFromWork,
            Some(_) => LocationStatus::OutsideHours,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationStatus::Unavailable => "Location not available",
            LocationStatus::AtWork => "At work location",
            LocationStatus::AwayFromWork => "Away from work",
            LocationStatus::OutsideHours => "Outside work hours",
        }
    }
}
