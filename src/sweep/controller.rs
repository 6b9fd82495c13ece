use anyhow::{bail, Context, Result};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::activity_log::ActivityLog;

use super::loop_worker::prune_loop;

/// Start/stop handle for the prune sweep. Stopping cancels the token and
/// joins the task, so no sweep outlives its owner.
pub struct SweepController {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl SweepController {
    pub fn new() -> Self {
        Self {
            handle: None,
            cancel_token: None,
        }
    }

    pub fn start(&mut self, log: ActivityLog, interval: Duration) -> Result<()> {
        if self.handle.is_some() {
            bail!("sweep already active");
        }

        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();

        let handle = tokio::spawn(prune_loop(log, interval, token_clone));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("prune sweep task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Default for SweepController {
    fn default() -> Self {
        Self::new()
    }
}
