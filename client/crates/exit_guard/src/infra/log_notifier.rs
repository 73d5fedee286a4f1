//! Tracing-backed notifier
//!
//! For headless hosts: the notice goes to the log and the most recent cancel
//! button is kept so the host can press it on the user's behalf.

use std::sync::{Mutex, MutexGuard, PoisonError};

use platform::dialog::Dialog;

use crate::application::guard::CancelHandle;
use crate::presentation::notifier::ExitNotifier;

#[derive(Debug, Default)]
pub struct LogNotifier {
    latest: Mutex<Option<CancelHandle>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn latest(&self) -> MutexGuard<'_, Option<CancelHandle>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Press the cancel button of the most recent notice
    ///
    /// ## Returns
    /// `false` if no notice is showing
    pub fn cancel_latest(&self) -> bool {
        match self.latest().take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }
}

impl ExitNotifier for LogNotifier {
    fn show_exit_notice(&self, notice: &Dialog, cancel: CancelHandle) {
        let actions: Vec<&str> = notice.actions.iter().map(|a| a.label.as_ref()).collect();
        tracing::warn!(
            title = %notice.title,
            message = %notice.message,
            actions = ?actions,
            "Exit notice"
        );
        *self.latest() = Some(cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::ExitGuardConfig;
    use crate::application::guard::ExitGuard;
    use crate::domain::press_counter::GuardState;
    use platform::process::ProcessTerminator;
    use std::sync::Arc;

    struct NoExit;

    impl ProcessTerminator for NoExit {
        fn terminate(&self) {
            panic!("unexpected termination");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_latest_resets_guard() {
        let notifier = Arc::new(LogNotifier::new());
        let guard = ExitGuard::with_tokio(
            ExitGuardConfig::default(),
            notifier.clone(),
            Arc::new(NoExit),
        )
        .unwrap();

        assert!(!notifier.cancel_latest());

        guard.on_back_signal();
        assert_eq!(guard.state(), GuardState::Armed);

        assert!(notifier.cancel_latest());
        assert_eq!(guard.state(), GuardState::Idle);
        assert!(!notifier.cancel_latest());
    }
}
