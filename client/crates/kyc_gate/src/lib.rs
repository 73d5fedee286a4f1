//! KYC Gate Module
//!
//! Runs a caller-supplied action only when the locally persisted profile
//! says the user's identity verification (KYC) is complete.
//!
//! Clean Architecture structure:
//! - `domain/` - KYC status, persisted profile record, repository trait
//! - `application/` - Resolve use case and the action gate
//! - `infra/` - Key-value store backed repository
//! - `presentation/` - Verification prompt
//!
//! ## Policy
//! - Every gated call re-reads the profile; nothing is cached
//! - Missing or unreadable profiles count as unverified (fail closed)
//! - Store failures are logged, never surfaced; action failures always are

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use application::gate::{ActionGate, GateOutcome};
pub use domain::kyc_status::KycStatus;
pub use domain::profile::PersistedProfile;
pub use error::{GateError, GateResult};
pub use infra::kv_profile::KvProfileRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
