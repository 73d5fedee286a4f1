//! Repository Traits
//!
//! Interface for reading the persisted profile. Implementation is in the
//! infrastructure layer.

use crate::domain::profile::PersistedProfile;
use crate::error::GateResult;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Load the persisted profile
    ///
    /// `Ok(None)` when nothing is stored; `Err` when the stored record
    /// cannot be read or parsed.
    async fn find_profile(&self) -> GateResult<Option<PersistedProfile>>;
}
