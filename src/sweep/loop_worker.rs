use chrono::Utc;
use log::{debug, info};
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::activity_log::ActivityLog;

/// Periodic maintenance pass over the activity log.
///
/// The interval is a cadence hint; correctness lives in `prune` itself,
/// which only needs a reasonably fresh `now`.
pub async fn prune_loop(log: ActivityLog, interval: Duration, cancel_token: CancellationToken) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = log.prune(Utc::now()).await;
                if removed > 0 {
                    info!("sweep pruned {removed} stale activity records");
                } else {
                    debug!("sweep found nothing to prune");
                }
            }
            _ = cancel_token.cancelled() => {
                info!("prune sweep shutting down");
                break;
            }
        }
    }
}
