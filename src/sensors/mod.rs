//! Observable value sources.
//!
//! A sensor delivers values push-style, zero or more times, possibly never.
//! Only the latest value is retained (`None` until the first delivery), so
//! a late subscriber sees the current sample, not a backlog. Dropping a
//! feed, or cancelling the task that polls it, is the unsubscribe.

use tokio::sync::watch;

/// Subscriber end; `None` means no sample has been delivered yet.
pub type SensorFeed<T> = watch::Receiver<Option<T>>;

/// Publisher end of an observable value source.
pub struct SensorSource<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T: Clone> SensorSource<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn subscribe(&self) -> SensorFeed<T> {
        self.tx.subscribe()
    }

    /// Replaces the retained sample; succeeds even with no subscribers.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(Some(value));
    }
}

impl<T: Clone> Default for SensorSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn feed_starts_empty_and_sees_latest_value_only() {
        let source = SensorSource::new();
        let mut feed = source.subscribe();
        assert_eq!(*feed.borrow(), None);

        source.publish(1u32);
        source.publish(2u32);

        feed.changed().await.unwrap();
        assert_eq!(*feed.borrow_and_update(), Some(2));
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let source = SensorSource::new();
        source.publish(42u32);

        let feed = source.subscribe();
        assert_eq!(*feed.borrow(), Some(42));
    }
}
