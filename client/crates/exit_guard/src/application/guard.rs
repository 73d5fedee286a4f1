//! Exit Guard Service
//!
//! Owns the press counter and the pending reset timer for one screen.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use kernel::error::app_error::AppResult;
use platform::process::ProcessTerminator;
use platform::signal::{BackSignalHub, Subscription};
use platform::timer::{Scheduler, TimerHandle, TokioScheduler};

use crate::application::config::ExitGuardConfig;
use crate::domain::press_counter::{GuardState, PressCounter, PressOutcome};
use crate::presentation::notice::exit_notice;
use crate::presentation::notifier::ExitNotifier;

struct GuardInner {
    counter: Mutex<PressCounter>,
    pending_reset: Mutex<Option<TimerHandle>>,
    config: ExitGuardConfig,
    scheduler: Arc<dyn Scheduler>,
    notifier: Arc<dyn ExitNotifier>,
    terminator: Arc<dyn ProcessTerminator>,
}

impl GuardInner {
    fn counter(&self) -> MutexGuard<'_, PressCounter> {
        self.counter.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn pending_reset(&self) -> MutexGuard<'_, Option<TimerHandle>> {
        self.pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel(&self) {
        let was_armed = self.counter().reset();
        if let Some(timer) = self.pending_reset().take() {
            timer.cancel();
        }
        tracing::debug!(was_armed, "Exit notice cancelled");
    }

    fn expire(&self, window: u64) {
        let expired = self.counter().expire(window);
        if expired {
            tracing::debug!(window, "Exit window expired");
        }
    }
}

/// Double back-press exit guard
///
/// Cheap to clone; clones share the same counter.
#[derive(Clone)]
pub struct ExitGuard {
    inner: Arc<GuardInner>,
}

impl ExitGuard {
    pub fn new(
        config: ExitGuardConfig,
        scheduler: Arc<dyn Scheduler>,
        notifier: Arc<dyn ExitNotifier>,
        terminator: Arc<dyn ProcessTerminator>,
    ) -> Self {
        Self {
            inner: Arc::new(GuardInner {
                counter: Mutex::new(PressCounter::new()),
                pending_reset: Mutex::new(None),
                config,
                scheduler,
                notifier,
                terminator,
            }),
        }
    }

    /// Guard whose reset timers run on the current tokio runtime
    pub fn with_tokio(
        config: ExitGuardConfig,
        notifier: Arc<dyn ExitNotifier>,
        terminator: Arc<dyn ProcessTerminator>,
    ) -> AppResult<Self> {
        let scheduler = Arc::new(TokioScheduler::current()?);
        Ok(Self::new(config, scheduler, notifier, terminator))
    }

    /// Handle one back signal
    ///
    /// ## Returns
    /// Always `true`: the default back navigation is suppressed
    pub fn on_back_signal(&self) -> bool {
        let outcome = self.inner.counter().register_press();

        match outcome {
            PressOutcome::Armed { window } => {
                self.arm_reset_timer(window);
                tracing::info!(
                    window,
                    exit_window_ms = self.inner.config.exit_window_ms(),
                    "Back pressed once, waiting for confirmation"
                );
                let notice = exit_notice(&self.inner.config);
                self.inner
                    .notifier
                    .show_exit_notice(&notice, self.cancel_handle());
            }
            PressOutcome::Exit { presses } => {
                tracing::info!(presses, "Back pressed again inside window, exiting");
                self.inner.terminator.terminate();
            }
        }

        true
    }

    /// Subscribe this guard to a back-signal hub
    ///
    /// The guard stays subscribed until the returned [`Subscription`] is
    /// released or dropped, which the owning screen does when it goes away.
    pub fn attach(&self, hub: &BackSignalHub) -> Subscription {
        let guard = self.clone();
        hub.subscribe(move || guard.on_back_signal())
    }

    /// Reset to idle, as the notice's cancel button does
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Handle the notifier can hold on to for its cancel button
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn press_count(&self) -> u32 {
        self.inner.counter().count()
    }

    pub fn state(&self) -> GuardState {
        self.inner.counter().state()
    }

    pub fn config(&self) -> &ExitGuardConfig {
        &self.inner.config
    }

    fn arm_reset_timer(&self, window: u64) {
        let weak = Arc::downgrade(&self.inner);
        let timer = self.inner.scheduler.schedule_once(
            self.inner.config.exit_window,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.expire(window);
                }
            }),
        );

        // A newer window supersedes whatever was still pending.
        if let Some(previous) = self.inner.pending_reset().replace(timer) {
            previous.cancel();
        }
    }
}

impl std::fmt::Debug for ExitGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExitGuard")
            .field("counter", &*self.inner.counter())
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Cancel button callback for an exit notice
///
/// Does nothing once the guard is gone.
#[derive(Clone)]
pub struct CancelHandle {
    inner: Weak<GuardInner>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel();
        }
    }
}

impl std::fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelHandle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
