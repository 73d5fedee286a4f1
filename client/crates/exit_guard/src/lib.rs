//! Exit Guard Module
//!
//! Turns a rapid double press of the platform back button into an
//! application exit, warning the user on the first press.
//!
//! Clean Architecture structure:
//! - `domain/` - Press counter state machine
//! - `application/` - Guard service and configuration
//! - `presentation/` - Exit notice and notifier port
//! - `infra/` - Notifier implementations
//!
//! ## Behaviour
//! - First press: notice with a cancel button, reset timer armed
//! - Second press inside the window: process termination
//! - Cancel or timer expiry: back to idle, whichever comes first
//! - Every press suppresses the default back navigation

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ExitGuardConfig;
pub use application::guard::{CancelHandle, ExitGuard};
pub use domain::press_counter::{GuardState, PressCounter, PressOutcome};
pub use infra::log_notifier::LogNotifier;
pub use presentation::notifier::ExitNotifier;
