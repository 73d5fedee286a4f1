//! Exit notice

use platform::dialog::{Dialog, DialogAction};

use crate::application::config::ExitGuardConfig;

/// Notice shown on the first back press, with a single cancel button
pub fn exit_notice(config: &ExitGuardConfig) -> Dialog {
    Dialog::new(config.notice_title.clone(), config.notice_message.clone())
        .with_action(DialogAction::cancel(config.cancel_label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::dialog::ActionStyle;

    #[test]
    fn test_notice_has_one_cancel_action() {
        let config = ExitGuardConfig {
            cancel_label: "Rester".to_string(),
            ..ExitGuardConfig::default()
        };
        let notice = exit_notice(&config);

        assert_eq!(notice.title, config.notice_title.as_str());
        assert_eq!(notice.actions.len(), 1);
        assert_eq!(notice.actions[0].label, "Rester");
        assert_eq!(notice.actions[0].style, ActionStyle::Cancel);
    }
}
