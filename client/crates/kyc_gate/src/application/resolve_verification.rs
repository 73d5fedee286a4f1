//! Resolve Verification Use Case
//!
//! Reads the persisted profile and extracts its KYC status.

use std::sync::Arc;

use crate::domain::kyc_status::KycStatus;
use crate::domain::repository::ProfileRepository;
use crate::error::GateResult;

/// Resolve verification use case
pub struct ResolveVerificationUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    profile_repo: Arc<R>,
}

impl<R> ResolveVerificationUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }

    /// Current status from the stored profile
    ///
    /// ## Returns
    /// * `Ok(None)` - No profile stored
    /// * `Ok(Some(status))` - Profile stored; `Unverified` if it has no status
    /// * `Err(GateError)` - Profile could not be read or parsed
    pub async fn execute(&self) -> GateResult<Option<KycStatus>> {
        let Some(profile) = self.profile_repo.find_profile().await? else {
            return Ok(None);
        };

        Ok(Some(profile.kyc_status().unwrap_or_default()))
    }
}
