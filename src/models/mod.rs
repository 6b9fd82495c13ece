mod activity;
mod location;
mod network;

pub use activity::{ActivityKind, ActivityRecord, ProductivityMetrics};
pub use location::{GeoFix, LocationSample};
pub use network::{EffectiveType, NetworkSample, Tier};
