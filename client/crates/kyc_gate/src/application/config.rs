//! Application Configuration
//!
//! Configuration for the KYC gate.

use platform::config::env_string;

/// Storage key of the serialized user profile
pub const DEFAULT_PROFILE_KEY: &str = "userProfile";

/// KYC gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Key the profile record is stored under
    pub profile_key: String,
    /// Prompt title
    pub prompt_title: String,
    /// Prompt body when verification is missing or rejected
    pub prompt_message: String,
    /// Prompt body while a review is in progress
    pub pending_message: String,
    /// Button that starts the verification flow
    pub verify_label: String,
    /// Button that dismisses the prompt
    pub later_label: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            profile_key: DEFAULT_PROFILE_KEY.to_string(),
            prompt_title: "Vérification requise".to_string(),
            prompt_message: "Vous devez vérifier votre identité avant de continuer.".to_string(),
            pending_message: "Votre vérification est en cours de traitement. Réessayez plus tard."
                .to_string(),
            verify_label: "Vérifier maintenant".to_string(),
            later_label: "Plus tard".to_string(),
        }
    }
}

impl GateConfig {
    /// Defaults with the profile key overridable by `PROFILE_STORE_KEY`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            profile_key: env_string("PROFILE_STORE_KEY", &defaults.profile_key),
            ..defaults
        }
    }
}
