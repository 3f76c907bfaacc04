//! Cancellable delayed delivery.
//!
//! Each [`Debouncer::schedule`] aborts whatever was scheduled before it, so a
//! burst of values only delivers the last one, once the quiet window has
//! passed without another call.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Identifies one scheduled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Raw sequence number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Delivers the latest scheduled value after `delay` of quiet.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    next_id: u64,
    pending: Option<(TaskId, JoinHandle<()>)>,
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its values arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            next_id: 0,
            pending: None,
            tx,
        };
        (debouncer, rx)
    }

    /// Quiet window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, cancelling the previously scheduled one.
    pub fn schedule(&mut self, value: T) -> TaskId {
        self.cancel();

        self.next_id += 1;
        let id = TaskId(self.next_id);
        let deadline = Instant::now() + self.delay;
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means nobody is listening any more.
            let _ = tx.send(value);
        });
        trace!(task = id.get(), delay_ms = self.delay.as_millis() as u64, "scheduled");

        self.pending = Some((id, handle));
        id
    }

    /// Cancel the pending delivery, if any, returning its id.
    pub fn cancel(&mut self) -> Option<TaskId> {
        let (id, handle) = self.pending.take()?;
        if handle.is_finished() {
            return None;
        }
        handle.abort();
        trace!(task = id.get(), "cancelled");
        Some(id)
    }

    /// Id of the delivery still waiting to fire.
    pub fn pending(&self) -> Option<TaskId> {
        self.pending
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(id, _)| *id)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_last_value_only() {
        let (mut debouncer, mut rx) = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule("s");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("sh");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("shirt");

        assert_eq!(rx.recv().await, Some("shirt"));
        assert!(start.elapsed() >= Duration::from_millis(500));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_values_all_delivered() {
        let (mut debouncer, mut rx) = Debouncer::new(WINDOW);

        debouncer.schedule(1);
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.schedule(2);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (mut debouncer, mut rx) = Debouncer::new(WINDOW);

        let id = debouncer.schedule("draft");
        assert_eq!(debouncer.pending(), Some(id));
        assert_eq!(debouncer.cancel(), Some(id));
        assert_eq!(debouncer.pending(), None);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_increase() {
        let (mut debouncer, _rx) = Debouncer::new(WINDOW);
        let first = debouncer.schedule(());
        let second = debouncer.schedule(());
        assert!(second > first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let (mut debouncer, mut rx) = Debouncer::new(WINDOW);
        debouncer.schedule("late");
        drop(debouncer);

        // Sender side is gone and nothing was delivered.
        assert_eq!(rx.recv().await, None);
    }
}
