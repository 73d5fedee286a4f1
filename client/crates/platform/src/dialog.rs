//! Dialog model
//!
//! What a component hands to the UI surface: a title, a body and a list of
//! buttons. Rendering is up to the host.

use std::borrow::Cow;

/// Button style hint for the UI surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

/// A single dialog button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: Cow<'static, str>,
    pub style: ActionStyle,
}

impl DialogAction {
    pub fn new(label: impl Into<Cow<'static, str>>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    pub fn cancel(label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(label, ActionStyle::Cancel)
    }
}

/// Title, message and buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: Cow<'static, str>,
    pub message: Cow<'static, str>,
    pub actions: Vec<DialogAction>,
}

impl Dialog {
    pub fn new(title: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: DialogAction) -> Self {
        self.actions.push(action);
        self
    }

    /// First button with the `Cancel` style, if any
    pub fn cancel_action(&self) -> Option<&DialogAction> {
        self.actions.iter().find(|a| a.style == ActionStyle::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let dialog = Dialog::new("Title", "Body")
            .with_action(DialogAction::cancel("Later"))
            .with_action(DialogAction::new("Go", ActionStyle::Default));

        assert_eq!(dialog.actions.len(), 2);
        assert_eq!(dialog.actions[0].label, "Later");
        assert_eq!(dialog.actions[1].style, ActionStyle::Default);
    }

    #[test]
    fn test_cancel_action_lookup() {
        let dialog = Dialog::new("T", "B").with_action(DialogAction::new("Ok", ActionStyle::Default));
        assert!(dialog.cancel_action().is_none());

        let dialog = dialog.with_action(DialogAction::cancel("Cancel"));
        assert_eq!(dialog.cancel_action().unwrap().label, "Cancel");
    }
}
