//! Verification prompt

use platform::dialog::{ActionStyle, Dialog, DialogAction};

use crate::application::config::GateConfig;
use crate::domain::kyc_status::KycStatus;

/// Prompt asking the user to complete identity verification
///
/// A pending review gets its own message; every other status gets the
/// generic one.
pub fn verification_prompt(config: &GateConfig, status: &KycStatus) -> Dialog {
    let message = if status.is_pending() {
        &config.pending_message
    } else {
        &config.prompt_message
    };

    Dialog::new(config.prompt_title.clone(), message.clone())
        .with_action(DialogAction::cancel(config.later_label.clone()))
        .with_action(DialogAction::new(
            config.verify_label.clone(),
            ActionStyle::Default,
        ))
}
