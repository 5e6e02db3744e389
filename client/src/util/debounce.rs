use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period the filter UIs use between keystroke and query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Restartable quiet-period timer.
///
/// Every [`touch`](Self::touch) cancels the pending timer and starts a
/// fresh one, so the callback fires exactly once per burst of changes,
/// timed from the last change. Dropping the debouncer cancels the pending
/// timer — a disposed filter bar must not fire a stale query.
pub struct Debouncer {
    delay: Duration,
    callback: Arc<dyn Fn() + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE, callback)
    }

    pub fn with_delay(delay: Duration, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Register a source change: restart the quiet-period timer.
    pub fn touch(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Cancel the pending timer without firing.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
