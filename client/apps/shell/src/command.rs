//! Shell commands
//!
//! One command per stdin line, standing in for the platform events and UI
//! taps of a real host.

use kernel::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hardware back button
    Back,
    /// Cancel button of the exit notice
    Cancel,
    /// Attempt the gated action
    Run,
    /// Dismiss the verification prompt
    Dismiss,
    /// Print guard and gate state
    Status,
    /// Store a profile with the given KYC status code
    Verify(String),
    /// Remove the stored profile
    Clear,
    /// Leave the shell
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };

        let command = match name {
            "back" => Self::Back,
            "cancel" => Self::Cancel,
            "run" => Self::Run,
            "dismiss" => Self::Dismiss,
            "status" => Self::Status,
            "verify" => {
                let code = parts.next().ok_or_else(|| {
                    AppError::invalid_input("verify needs a status code")
                        .with_action("Try `verify verifie` or `verify en_attente`")
                })?;
                Self::Verify(code.to_string())
            }
            "clear" => Self::Clear,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(AppError::invalid_input(format!("Unknown command: {other}"))
                    .with_action(
                        "Commands: back, cancel, run, dismiss, status, verify <code>, clear, quit",
                    ));
            }
        };

        Ok(Some(command))
    }
}
