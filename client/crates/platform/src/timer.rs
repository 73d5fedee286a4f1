//! One-shot timers
//!
//! A [`Scheduler`] runs a callback once after a delay and hands back a
//! [`TimerHandle`] that can cancel it before it fires.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Boxed callback run when a timer fires
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Schedules one-shot callbacks
pub trait Scheduler: Send + Sync {
    fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle;
}

/// Handle to a pending one-shot timer
///
/// Dropping the handle does not cancel the timer.
#[derive(Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
}

impl TimerHandle {
    /// Cancel the timer if it has not fired yet
    pub fn cancel(self) {
        self.abort.abort();
    }

    /// Whether the timer has fired or been cancelled
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// Tokio-backed scheduler
///
/// Timers are spawned onto the runtime the scheduler was created for, so
/// callbacks can be scheduled from synchronous code such as signal handlers.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Scheduler bound to the runtime of the calling context
    pub fn current() -> AppResult<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            AppError::unavailable("No tokio runtime available for timers").with_source(e)
        })?;
        Ok(Self::new(runtime))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        // Measured from the call, not from the first poll of the task.
        let deadline = Instant::now() + delay;
        let join = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        });
        TimerHandle {
            abort: join.abort_handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_task(counter: &Arc<AtomicUsize>) -> TimerTask {
        let counter = counter.clone();
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let scheduler = TokioScheduler::current().unwrap();
        let fired = Arc::new(AtomicUsize::new(0));

        let handle = scheduler.schedule_once(Duration::from_millis(2000), counting_task(&fired));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!handle.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let scheduler = TokioScheduler::current().unwrap();
        let fired = Arc::new(AtomicUsize::new(0));

        let handle = scheduler.schedule_once(Duration::from_millis(100), counting_task(&fired));
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_current_without_runtime() {
        let err = TokioScheduler::current().unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_counts_from_schedule_call() {
        let scheduler = TokioScheduler::current().unwrap();
        let fired = Arc::new(AtomicUsize::new(0));

        let _handle = scheduler.schedule_once(Duration::from_millis(2000), counting_task(&fired));

        // Clock moves before the timer task gets polled.
        tokio::time::advance(Duration::from_millis(1500)).await;
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
