//! Fixed-delay follow-up tasks.
//!
//! The popup schedules a handful of "do this in N ms" callbacks (re-fetch
//! after a toggle, restore the reconnect button, revert a banner). Each one is
//! a tokio task racing a timer against a cancellation token, so closing the
//! popup cancels everything still pending, and tests can drive the timers on
//! paused time.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to one scheduled task.
///
/// Dropping the handle does not cancel the task.
#[derive(Debug)]
pub struct ScheduledTask {
    label: &'static str,
    token: CancellationToken,
    join_handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Cancel the task if its delay has not elapsed yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }
}

/// Spawns delayed tasks tied to one popup lifetime.
#[derive(Debug, Default)]
pub struct Scheduler {
    root: CancellationToken,
    pending: Arc<AtomicUsize>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay` unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, label: &'static str, delay: Duration, task: F) -> ScheduledTask
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let task_token = token.clone();
        let pending = Arc::clone(&self.pending);
        pending.fetch_add(1, Ordering::SeqCst);

        debug!(task = label, ?delay, "Scheduled task");

        let join_handle = tokio::spawn(async move {
            tokio::select! {
                () = task_token.cancelled() => {
                    debug!(task = label, "Scheduled task cancelled");
                }
                () = tokio::time::sleep(delay) => {
                    debug!(task = label, "Running scheduled task");
                    task.await;
                }
            }
            pending.fetch_sub(1, Ordering::SeqCst);
        });

        ScheduledTask {
            label,
            token,
            join_handle,
        }
    }

    /// Number of tasks that have neither run nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Cancel every pending task. Tasks scheduled afterwards are cancelled
    /// immediately.
    pub fn shutdown(&self) {
        debug!(pending = self.pending(), "Cancelling scheduled tasks");
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}
