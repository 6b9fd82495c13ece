//! Worksight: a host-embedded productivity signal engine.
//!
//! Combines three host-delivered signals into a live 0-100 score with
//! qualitative insights: geolocation proximity to a fixed work site,
//! network-connection quality, and per-section dwell time. The host pushes
//! sensor values in (or wires up [`sensors::SensorSource`] feeds), polls
//! [`engine::Engine::snapshot`] whenever it renders, and shuts the engine
//! down to cancel every timer and listener.

pub mod activity_log;
pub mod config;
pub mod engine;
pub mod location;
pub mod models;
pub mod network;
pub mod scoring;
pub mod sensors;
pub mod sweep;
pub mod tracker;

pub use activity_log::ActivityLog;
pub use config::EngineConfig;
pub use engine::{DashboardSnapshot, Engine};
pub use location::{LocationStatus, WorkSite};
pub use models::{
    ActivityKind, ActivityRecord, EffectiveType, GeoFix, LocationSample, NetworkSample,
    ProductivityMetrics, Tier,
};
pub use scoring::{ScoreReport, ScoringConfig};
pub use sensors::{SensorFeed, SensorSource};
pub use tracker::VisibilityEvent;

/// Initialize logging for hosts without their own logger (reads `RUST_LOG`).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
