//! Application Layer
//!
//! Guard service and its configuration.

pub mod config;
pub mod guard;

// Re-exports
pub use config::ExitGuardConfig;
pub use guard::{CancelHandle, ExitGuard};
