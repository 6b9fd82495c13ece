mod controller;
mod state;

pub use controller::SectionTracker;
pub use state::{DwellState, VisibilityEvent, FOCUS_SLICE_SECS, VISIBILITY_THRESHOLD};
