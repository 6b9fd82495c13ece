use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{Local, Timelike, Utc};
use log::{debug, info};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    activity_log::ActivityLog,
    config::EngineConfig,
    location::LocationStatus,
    models::{GeoFix, LocationSample, NetworkSample, ProductivityMetrics, Tier},
    network::classify,
    scoring,
    sensors::SensorFeed,
    sweep::SweepController,
    tracker::{SectionTracker, VisibilityEvent},
};

/// Everything the presentation layer needs for one render pass.
/// Recomputed from the latest samples on every call; absent samples stay
/// `None` so the host can render "N/A" instead of failing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub score: f64,
    pub location_points: f64,
    pub network_points: f64,
    pub activity_points: f64,
    pub insights: Vec<String>,
    pub tier: Tier,
    pub location: Option<LocationSample>,
    pub location_status: LocationStatus,
    pub network: Option<NetworkSample>,
    pub working_hours: bool,
    pub current_section: Option<String>,
    pub dwell_secs: u64,
    pub total_activity_secs_today: u64,
    pub activity_count: usize,
    pub metrics: ProductivityMetrics,
}

impl DashboardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize dashboard snapshot")
    }
}

#[derive(Default)]
struct Samples {
    location: Option<LocationSample>,
    network: Option<NetworkSample>,
}

/// Top-level session state: latest samples, the activity log, and the two
/// periodic activities (dwell ticker, prune sweep).
///
/// `start` spawns the timers; `shutdown` cancels every timer and feed
/// listener together and is terminal for this engine instance.
#[derive(Clone)]
pub struct Engine {
    samples: Arc<Mutex<Samples>>,
    log: ActivityLog,
    tracker: SectionTracker,
    sweep: Arc<Mutex<SweepController>>,
    cancel_root: CancellationToken,
    feed_tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
    started: Arc<Mutex<bool>>,
    working_hours: bool,
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        // Computed once per load; acceptable staleness across midnight.
        let working_hours = config
            .working_hours
            .unwrap_or_else(|| scoring::is_working_hours(Local::now().hour()));

        let log = ActivityLog::new();
        let tracker = SectionTracker::new(
            log.clone(),
            config.tick_interval,
            config.visibility_threshold,
        );

        Self {
            samples: Arc::new(Mutex::new(Samples::default())),
            log,
            tracker,
            sweep: Arc::new(Mutex::new(SweepController::new())),
            cancel_root: CancellationToken::new(),
            feed_tasks: Arc::new(Mutex::new(Vec::new())),
            started: Arc::new(Mutex::new(false)),
            working_hours,
            config,
        }
    }

    pub async fn start(&self) -> Result<()> {
        {
            let mut started = self.started.lock().await;
            if *started {
                bail!("engine already started");
            }
            *started = true;
        }

        self.tracker.start().await?;
        self.sweep
            .lock()
            .await
            .start(self.log.clone(), self.config.sweep_interval)?;

        info!(
            "worksight engine started (working hours: {})",
            self.working_hours
        );
        Ok(())
    }

    /// Cancels the ticker, the sweep, and every feed listener together.
    pub async fn shutdown(&self) -> Result<()> {
        self.cancel_root.cancel();

        for handle in self.feed_tasks.lock().await.drain(..) {
            let _ = handle.await;
        }

        self.tracker.stop().await;
        self.sweep.lock().await.stop().await?;
        *self.started.lock().await = false;

        info!("worksight engine shut down");
        Ok(())
    }

    /// Push-style ingestion for hosts that drive the engine directly.
    /// Each fix replaces the previous location sample wholesale.
    pub async fn ingest_location(&self, fix: GeoFix) {
        let sample = LocationSample::observe(
            fix.latitude,
            fix.longitude,
            &self.config.work_site,
            Utc::now(),
        );
        debug!(
            "location fix ({:.4}, {:.4}) at_work={}",
            sample.latitude, sample.longitude, sample.at_work_location
        );
        self.samples.lock().await.location = Some(sample);
    }

    pub async fn ingest_network(&self, sample: NetworkSample) {
        debug!(
            "network change: {} {}Mbps {}ms",
            sample.effective_type.as_str(),
            sample.downlink_mbps,
            sample.round_trip_ms
        );
        self.samples.lock().await.network = Some(sample);
    }

    pub async fn observe_visibility(&self, event: &VisibilityEvent) {
        self.tracker.observe(event).await;
    }

    /// Subscribes to a location feed; the listener dies with the engine.
    pub async fn attach_location_feed(&self, mut feed: SensorFeed<GeoFix>) {
        let engine = self.clone();
        let token = self.cancel_root.child_token();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = feed.changed() => {
                        if changed.is_err() {
                            debug!("location feed closed");
                            break;
                        }
                        let fix = *feed.borrow_and_update();
                        if let Some(fix) = fix {
                            engine.ingest_location(fix).await;
                        }
                    }
                    _ = token.cancelled() => {
                        debug!("location feed listener shutting down");
                        break;
                    }
                }
            }
        });

        self.feed_tasks.lock().await.push(handle);
    }

    pub async fn attach_network_feed(&self, mut feed: SensorFeed<NetworkSample>) {
        let engine = self.clone();
        let token = self.cancel_root.child_token();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = feed.changed() => {
                        if changed.is_err() {
                            debug!("network feed closed");
                            break;
                        }
                        let sample = feed.borrow_and_update().clone();
                        if let Some(sample) = sample {
                            engine.ingest_network(sample).await;
                        }
                    }
                    _ = token.cancelled() => {
                        debug!("network feed listener shutting down");
                        break;
                    }
                }
            }
        });

        self.feed_tasks.lock().await.push(handle);
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let (location, network) = {
            let guard = self.samples.lock().await;
            (guard.location.clone(), guard.network.clone())
        };

        let now_local = Local::now();
        let records_today = self.log.records_today(now_local).await;
        let all_records = self.log.all().await;

        let report = scoring::score(
            location.as_ref(),
            network.as_ref(),
            &records_today,
            self.working_hours,
            &self.config.scoring,
        );

        let (current_section, dwell_secs) = self.tracker.current().await;
        let total_activity_secs_today = records_today
            .iter()
            .map(|record| u64::from(record.duration_secs))
            .sum();

        let location_compliant = location
            .as_ref()
            .map(|sample| sample.at_work_location)
            .unwrap_or(false)
            && self.working_hours;
        let metrics = ProductivityMetrics::from_records(
            &all_records,
            location_compliant,
            report.network_points,
        );

        DashboardSnapshot {
            score: report.score,
            location_points: report.location_points,
            network_points: report.network_points,
            activity_points: report.activity_points,
            insights: report.insights,
            tier: classify(network.as_ref()),
            location_status: LocationStatus::derive(location.as_ref(), self.working_hours),
            location,
            network,
            working_hours: self.working_hours,
            current_section,
            dwell_secs,
            total_activity_secs_today,
            activity_count: all_records.len(),
            metrics,
        }
    }

    /// The log handle, mainly for hosts that record breaks or distractions
    /// themselves.
    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn is_working_hours(&self) -> bool {
        self.working_hours
    }
}
