use std::sync::Arc;

use chrono::{DateTime, Duration, Local, Utc};
use tokio::sync::Mutex;

use crate::models::ActivityRecord;

/// How long a record stays in the log before the sweep removes it.
pub const RETENTION_HOURS: i64 = 24;

/// Append-only, time-windowed store of activity records.
///
/// The tracker appends and the sweep prunes; both go through the inner
/// mutex, so the log stays correct even off a single-threaded runtime.
pub struct ActivityLog {
    inner: Arc<Mutex<Vec<ActivityRecord>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Never rejects a well-formed record.
    pub async fn append(&self, record: ActivityRecord) {
        self.inner.lock().await.push(record);
    }

    /// Drops every record older than the retention window. Returns the
    /// number removed; idempotent for a fixed `now`.
    pub async fn prune(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::hours(RETENTION_HOURS);
        let mut records = self.inner.lock().await;
        let before = records.len();
        records.retain(|record| record.recorded_at >= cutoff);
        before - records.len()
    }

    /// Snapshot in insertion order.
    pub async fn all(&self) -> Vec<ActivityRecord> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Records whose timestamp falls on the same local calendar day as
    /// `now` (not a rolling 24h window).
    pub async fn records_today(&self, now: DateTime<Local>) -> Vec<ActivityRecord> {
        let today = now.date_naive();
        self.inner
            .lock()
            .await
            .iter()
            .filter(|record| record.recorded_at.with_timezone(&Local).date_naive() == today)
            .cloned()
            .collect()
    }

    pub async fn total_seconds_today(&self, now: DateTime<Local>) -> u64 {
        self.records_today(now)
            .await
            .iter()
            .map(|record| u64::from(record.duration_secs))
            .sum()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ActivityLog {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;
    use pretty_assertions::assert_eq;

    fn focus_at(recorded_at: DateTime<Utc>, section: &str) -> ActivityRecord {
        ActivityRecord::new(ActivityKind::Focus, 10, section, recorded_at)
    }

    #[tokio::test]
    async fn all_returns_records_in_insertion_order() {
        let log = ActivityLog::new();
        let now = Utc::now();
        for i in 0..5 {
            log.append(focus_at(now, &format!("section-{i}"))).await;
        }

        let records = log.all().await;
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.section, format!("section-{i}"));
        }
    }

    #[tokio::test]
    async fn prune_removes_only_stale_records() {
        let log = ActivityLog::new();
        let now = Utc::now();
        log.append(focus_at(now - Duration::hours(25), "stale")).await;
        log.append(focus_at(now - Duration::hours(23), "fresh")).await;
        log.append(focus_at(now, "fresh")).await;

        let removed = log.prune(now).await;
        assert_eq!(removed, 1);

        let records = log.all().await;
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.section == "fresh"));
    }

    #[tokio::test]
    async fn prune_is_idempotent() {
        let log = ActivityLog::new();
        let now = Utc::now();
        log.append(focus_at(now - Duration::hours(30), "stale")).await;
        log.append(focus_at(now, "fresh")).await;

        assert_eq!(log.prune(now).await, 1);
        let after_first = log.all().await.len();
        assert_eq!(log.prune(now).await, 0);
        assert_eq!(log.all().await.len(), after_first);
    }

    #[tokio::test]
    async fn records_exactly_at_cutoff_survive() {
        let log = ActivityLog::new();
        let now = Utc::now();
        log.append(focus_at(now - Duration::hours(RETENTION_HOURS), "edge"))
            .await;

        assert_eq!(log.prune(now).await, 0);
        assert_eq!(log.len().await, 1);
    }

    #[tokio::test]
    async fn today_filter_uses_local_calendar_day() {
        let log = ActivityLog::new();
        let now_local = Local::now();
        let now = now_local.with_timezone(&Utc);

        log.append(focus_at(now, "today")).await;
        log.append(focus_at(now - Duration::days(2), "old")).await;

        let today = log.records_today(now_local).await;
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].section, "today");
        assert_eq!(log.total_seconds_today(now_local).await, 10);
    }
}
