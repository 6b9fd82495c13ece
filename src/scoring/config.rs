/// Point weights and caps for the productivity score.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Awarded when the latest fix is at the work site during working hours.
    pub location_points: f64,

    /// Network component, mutually exclusive bands.
    pub excellent_points: f64,
    pub good_points: f64,
    pub three_g_points: f64,

    /// Activity component: points per hour of tracked time, points scaled
    /// by the focus-record ratio, and the component cap.
    pub hour_points: f64,
    pub focus_ratio_points: f64,
    pub activity_cap: f64,

    pub score_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            location_points: 30.0,
            excellent_points: 20.0,
            good_points: 15.0,
            three_g_points: 10.0,
            hour_points: 10.0,
            focus_ratio_points: 20.0,
            activity_cap: 50.0,
            score_cap: 100.0,
        }
    }
}
