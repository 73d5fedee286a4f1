//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod resolve_verification;

// Re-exports
pub use config::GateConfig;
pub use gate::{ActionGate, GateOutcome};
pub use resolve_verification::ResolveVerificationUseCase;
