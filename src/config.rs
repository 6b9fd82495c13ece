use std::time::Duration;

use crate::location::WorkSite;
use crate::scoring::ScoringConfig;
use crate::tracker::VISIBILITY_THRESHOLD;

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
const DEBUG_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Engine wiring: work site, score weights, and timer cadences.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub work_site: WorkSite,
    pub scoring: ScoringConfig,
    pub tick_interval: Duration,
    pub sweep_interval: Duration,
    pub visibility_threshold: f64,
    /// Overrides the wall-clock working-hours flag when set. Hosts that
    /// track midnight rollover can recompute and restart with it.
    pub working_hours: Option<bool>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            work_site: WorkSite::default(),
            scoring: ScoringConfig::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            visibility_threshold: VISIBILITY_THRESHOLD,
            working_hours: None,
        }
    }
}

impl EngineConfig {
    /// Default config, with a fast sweep cadence when `WORKSIGHT_DEBUG` is
    /// set so interactive runs show pruning without the minute wait.
    pub fn from_env() -> Self {
        let debug_mode = std::env::var("WORKSIGHT_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut config = Self::default();
        if debug_mode {
            config.sweep_interval = DEBUG_SWEEP_INTERVAL;
        }
        config
    }
}
