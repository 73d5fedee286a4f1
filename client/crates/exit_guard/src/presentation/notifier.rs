//! Exit notifier port

use platform::dialog::Dialog;

use crate::application::guard::CancelHandle;

/// UI surface for the exit notice
///
/// The notice is non-blocking. Implementations wire the dialog's cancel
/// button to `cancel`; the guard resets on its own when the window expires
/// whether or not the user interacts.
pub trait ExitNotifier: Send + Sync {
    fn show_exit_notice(&self, notice: &Dialog, cancel: CancelHandle);
}
