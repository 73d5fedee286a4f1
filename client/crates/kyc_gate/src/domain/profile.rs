//! Persisted Profile Record
//!
//! The serialized user profile the client keeps on the device. Only the KYC
//! part is modelled; every other field is ignored.
//!
//! The status lives either under `user.kyc.status` (current layout) or
//! top-level `kyc.status` (older layout). Both are read, current first, and
//! an empty string counts as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::kyc_status::KycStatus;

/// Profile record stored under the profile key
///
/// Kept as free-form JSON: other parts of the app own the rest of the
/// record, so a field of an unexpected shape on one lookup path must not
/// hide a status on the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedProfile(Value);

impl PersistedProfile {
    /// Parse the stored JSON text
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw).map(Self)
    }

    /// Profile in the current layout with the given status
    pub fn with_status(status: &KycStatus) -> Self {
        Self(json!({ "user": { "kyc": { "status": status.code() } } }))
    }

    /// Raw status code, `user.kyc.status` first, then `kyc.status`
    ///
    /// A step that is missing, not an object, or not a non-empty string
    /// counts as absent.
    pub fn status_code(&self) -> Option<&str> {
        let nested = self.0.get("user").and_then(|user| user.get("kyc"));
        let legacy = self.0.get("kyc");

        [nested, legacy]
            .into_iter()
            .flatten()
            .filter_map(|kyc| kyc.get("status").and_then(Value::as_str))
            .find(|s| !s.is_empty())
    }

    /// KYC status, if the record carries one
    pub fn kyc_status(&self) -> Option<KycStatus> {
        self.status_code().map(KycStatus::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let profile = PersistedProfile::parse(r#"{"user":{"kyc":{"status":"verifie"}}}"#).unwrap();
        assert_eq!(profile.kyc_status(), Some(KycStatus::Verified));
    }

    #[test]
    fn test_legacy_path() {
        let profile = PersistedProfile::parse(r#"{"kyc":{"status":"en_attente"}}"#).unwrap();
        assert_eq!(profile.kyc_status(), Some(KycStatus::Pending));
    }

    #[test]
    fn test_nested_path_wins() {
        let profile = PersistedProfile::parse(
            r#"{"user":{"kyc":{"status":"non_verifie"}},"kyc":{"status":"verifie"}}"#,
        )
        .unwrap();
        assert_eq!(profile.kyc_status(), Some(KycStatus::NotVerified));
    }

    #[test]
    fn test_empty_nested_falls_back() {
        let profile =
            PersistedProfile::parse(r#"{"user":{"kyc":{"status":""}},"kyc":{"status":"verifie"}}"#)
                .unwrap();
        assert_eq!(profile.kyc_status(), Some(KycStatus::Verified));
    }

    #[test]
    fn test_absent_status() {
        let profile =
            PersistedProfile::parse(r#"{"user":{"name":"Awa","kyc":null},"token":"abc"}"#).unwrap();
        assert_eq!(profile.kyc_status(), None);

        let profile = PersistedProfile::parse("{}").unwrap();
        assert_eq!(profile.status_code(), None);
    }

    #[test]
    fn test_malformed_json() {
        assert!(PersistedProfile::parse("{\"user\":").is_err());
        assert!(PersistedProfile::parse("not json").is_err());
    }

    #[test]
    fn test_odd_shapes_count_as_absent() {
        let profile = PersistedProfile::parse("null").unwrap();
        assert_eq!(profile.status_code(), None);

        let profile = PersistedProfile::parse(r#"{"kyc":{"status":42}}"#).unwrap();
        assert_eq!(profile.status_code(), None);

        let profile = PersistedProfile::parse(r#"{"kyc":"verifie"}"#).unwrap();
        assert_eq!(profile.status_code(), None);
    }

    #[test]
    fn test_odd_nested_shape_falls_back_to_legacy() {
        for raw in [
            r#"{"user":{"kyc":"pending"},"kyc":{"status":"verifie"}}"#,
            r#"{"user":"guest","kyc":{"status":"verifie"}}"#,
            r#"{"user":{"kyc":{"status":7}},"kyc":{"status":"verifie"}}"#,
            r#"{"user":{"kyc":null},"kyc":{"status":"verifie"}}"#,
        ] {
            let profile = PersistedProfile::parse(raw).unwrap();
            assert_eq!(profile.kyc_status(), Some(KycStatus::Verified), "{raw}");
        }
    }

    #[test]
    fn test_with_status_uses_current_layout() {
        let profile = PersistedProfile::with_status(&KycStatus::Verified);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"user":{"kyc":{"status":"verifie"}}}"#);
    }
}
