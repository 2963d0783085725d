use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::task::JoinHandle;

type Target<A> = Arc<dyn Fn(A) -> BoxFuture<'static, ()> + Send + Sync>;

/// Collapses a burst of calls into one call of `target`, fired once no new
/// call arrived for the quiet period. Only the last arguments are used.
///
/// Re-arming aborts the pending timer only; a call that already fired runs to
/// completion on its own task.
pub struct Debouncer<A> {
    quiet: Duration,
    target: Target<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(quiet: Duration, target: F) -> Self
    where
        F: Fn(A) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        Self {
            quiet,
            target: Arc::new(target),
            pending: Mutex::new(None),
        }
    }

    /// Arms the timer with `args`, superseding any pending call.
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, args: A) {
        let target = Arc::clone(&self.target);
        let quiet = self.quiet;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            tokio::spawn(target(args));
        });
        if let Some(previous) = self.lock_pending().replace(timer) {
            previous.abort();
        }
    }

    /// Drops the pending call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
