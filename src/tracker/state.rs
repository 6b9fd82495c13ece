use serde::{Deserialize, Serialize};

/// Dwell seconds between emitted focus records.
pub const FOCUS_SLICE_SECS: u64 = 10;

/// Minimum intersection ratio for a section to count as dominant.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Named-section visibility change as reported by the host viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEvent {
    pub section: String,
    pub ratio: f64,
}

impl VisibilityEvent {
    pub fn new(section: impl Into<String>, ratio: f64) -> Self {
        Self {
            section: section.into(),
            ratio,
        }
    }
}

/// Which section is dominant and for how long it has stayed that way.
///
/// When nothing qualifies, the last known section is retained and keeps
/// accruing dwell; hosts that want a stricter staleness policy can apply
/// one on top of the snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DwellState {
    pub section: Option<String>,
    pub elapsed_secs: u64,
}

impl DwellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching to a different section resets dwell; re-entering the
    /// current one is a no-op.
    pub fn enter(&mut self, section: &str) {
        if self.section.as_deref() != Some(section) {
            self.section = Some(section.to_string());
            self.elapsed_secs = 0;
        }
    }

    /// One-second tick. Returns true when the accumulated dwell crosses a
    /// focus-slice boundary; elapsed keeps running (display total), only
    /// record emission happens per boundary.
    pub fn tick(&mut self) -> bool {
        if self.section.is_none() {
            return false;
        }
        self.elapsed_secs += 1;
        self.elapsed_secs % FOCUS_SLICE_SECS == 0
    }
}
