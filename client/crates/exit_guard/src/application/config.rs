//! Application Configuration
//!
//! Configuration for the exit guard.

use std::time::Duration;

use kernel::error::app_error::AppResult;
use platform::config::{env_duration_ms, env_string};

/// Exit guard configuration
#[derive(Debug, Clone)]
pub struct ExitGuardConfig {
    /// How long a first press stays armed
    pub exit_window: Duration,
    /// Notice title
    pub notice_title: String,
    /// Notice body
    pub notice_message: String,
    /// Label of the cancel button
    pub cancel_label: String,
}

impl Default for ExitGuardConfig {
    fn default() -> Self {
        Self {
            exit_window: Duration::from_millis(2000),
            notice_title: "Quitter l'application".to_string(),
            notice_message: "Appuyez à nouveau sur retour pour quitter.".to_string(),
            cancel_label: "Annuler".to_string(),
        }
    }
}

impl ExitGuardConfig {
    /// Defaults overridden by `EXIT_GUARD_WINDOW_MS`, `EXIT_GUARD_TITLE`,
    /// `EXIT_GUARD_MESSAGE` and `EXIT_GUARD_CANCEL_LABEL`
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            exit_window: env_duration_ms("EXIT_GUARD_WINDOW_MS", defaults.exit_window)?,
            notice_title: env_string("EXIT_GUARD_TITLE", &defaults.notice_title),
            notice_message: env_string("EXIT_GUARD_MESSAGE", &defaults.notice_message),
            cancel_label: env_string("EXIT_GUARD_CANCEL_LABEL", &defaults.cancel_label),
        })
    }

    pub fn exit_window_ms(&self) -> u64 {
        u64::try_from(self.exit_window.as_millis()).unwrap_or(u64::MAX)
    }
}
