//! Domain Layer
//!
//! Contains the KYC status value object, the persisted profile record and
//! the repository trait.

pub mod kyc_status;
pub mod profile;
pub mod repository;

// Re-exports
pub use kyc_status::KycStatus;
pub use profile::PersistedProfile;
pub use repository::ProfileRepository;
