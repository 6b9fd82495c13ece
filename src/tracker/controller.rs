use std::{sync::Arc, time::Duration};

use anyhow::{bail, Result};
use chrono::Utc;
use log::debug;
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::{
    activity_log::ActivityLog,
    models::{ActivityKind, ActivityRecord},
};

use super::state::{DwellState, VisibilityEvent, FOCUS_SLICE_SECS};

/// Owns the dwell state machine and the one-second ticker that drives it.
///
/// Every focus-slice boundary appends one focus record to the activity log.
/// `stop` aborts the ticker; dropping the controller without stopping would
/// leave the task running, so the engine pairs start/stop on its lifecycle.
#[derive(Clone)]
pub struct SectionTracker {
    state: Arc<Mutex<DwellState>>,
    log: ActivityLog,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    tick_interval: Duration,
    visibility_threshold: f64,
}

impl SectionTracker {
    pub fn new(log: ActivityLog, tick_interval: Duration, visibility_threshold: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(DwellState::new())),
            log,
            ticker: Arc::new(Mutex::new(None)),
            tick_interval,
            visibility_threshold,
        }
    }

    /// Apply a viewport visibility event. Events below the dominance
    /// threshold are ignored, which also implements the retain-last-section
    /// policy: nothing qualifying means nothing changes.
    pub async fn observe(&self, event: &VisibilityEvent) {
        if event.ratio < self.visibility_threshold {
            return;
        }
        self.state.lock().await.enter(&event.section);
    }

    /// Current dominant section and its dwell seconds, for display.
    pub async fn current(&self) -> (Option<String>, u64) {
        let state = self.state.lock().await;
        (state.section.clone(), state.elapsed_secs)
    }

    pub async fn start(&self) -> Result<()> {
        let mut ticker_guard = self.ticker.lock().await;
        if ticker_guard.is_some() {
            bail!("section tracker already running");
        }

        let state = self.state.clone();
        let log = self.log.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // the first interval tick completes immediately; skip it so a
            // tick means one elapsed interval
            interval.tick().await;
            loop {
                interval.tick().await;

                let (boundary, section) = {
                    let mut guard = state.lock().await;
                    let boundary = guard.tick();
                    (boundary, guard.section.clone())
                };

                if boundary {
                    if let Some(section) = section {
                        let record = ActivityRecord::new(
                            ActivityKind::Focus,
                            FOCUS_SLICE_SECS as u32,
                            section.clone(),
                            Utc::now(),
                        );
                        log.append(record).await;
                        debug!("emitted focus slice for section {section}");
                    }
                }
            }
        });

        *ticker_guard = Some(handle);
        Ok(())
    }

    /// Idempotent; safe to call without a running ticker.
    pub async fn stop(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }

    pub async fn is_running(&self) -> bool {
        self.ticker.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tracker() -> SectionTracker {
        SectionTracker::new(
            ActivityLog::new(),
            Duration::from_secs(1),
            super::super::VISIBILITY_THRESHOLD,
        )
    }

    #[tokio::test]
    async fn below_threshold_events_are_ignored() {
        let tracker = tracker();
        tracker
            .observe(&VisibilityEvent::new("dashboard", 0.8))
            .await;
        tracker.observe(&VisibilityEvent::new("activity", 0.3)).await;

        let (section, _) = tracker.current().await;
        assert_eq!(section.as_deref(), Some("dashboard"));
    }

    #[tokio::test]
    async fn threshold_is_inclusive() {
        let tracker = tracker();
        tracker.observe(&VisibilityEvent::new("header", 0.5)).await;

        let (section, _) = tracker.current().await;
        assert_eq!(section.as_deref(), Some("header"));
    }

    #[tokio::test]
    async fn double_start_is_rejected() {
        let tracker = tracker();
        tracker.start().await.unwrap();
        assert!(tracker.start().await.is_err());
        tracker.stop().await;
        assert!(!tracker.is_running().await);
    }

    #[tokio::test]
    async fn stop_without_start_is_a_noop() {
        let tracker = tracker();
        tracker.stop().await;
        assert!(!tracker.is_running().await);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_emits_focus_records_at_boundaries() {
        let log = ActivityLog::new();
        let tracker = SectionTracker::new(log.clone(), Duration::from_secs(1), 0.5);
        tracker
            .observe(&VisibilityEvent::new("dashboard", 0.9))
            .await;
        tracker.start().await.unwrap();

        // paused clock: sleeping auto-advances time through 21 ticker fires
        tokio::time::sleep(Duration::from_secs(21)).await;
        tracker.stop().await;

        let records = log.all().await;
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r.kind == ActivityKind::Focus && r.duration_secs == 10));
        assert!(records.iter().all(|r| r.section == "dashboard"));

        let (_, dwell) = tracker.current().await;
        assert!(dwell >= 20);
    }
}
