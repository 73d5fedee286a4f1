//! Key-value store backed profile repository

use platform::store::KeyValueStore;

use crate::domain::profile::PersistedProfile;
use crate::domain::repository::ProfileRepository;
use crate::error::GateResult;

/// Reads the profile record stored as JSON text under one key
#[derive(Debug, Clone)]
pub struct KvProfileRepository<S> {
    store: S,
    key: String,
}

impl<S> KvProfileRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S> ProfileRepository for KvProfileRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn find_profile(&self) -> GateResult<Option<PersistedProfile>> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            return Ok(None);
        };

        let profile = PersistedProfile::parse(&raw)?;
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kyc_status::KycStatus;
    use crate::error::GateError;
    use platform::store::MemoryStore;

    #[tokio::test]
    async fn test_missing_key() {
        let repo = KvProfileRepository::new(MemoryStore::new(), "userProfile");
        assert_eq!(repo.find_profile().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reads_only_its_key() {
        let store = MemoryStore::new();
        store
            .set_item("otherProfile", r#"{"kyc":{"status":"verifie"}}"#)
            .await
            .unwrap();

        let repo = KvProfileRepository::new(store, "userProfile");
        assert_eq!(repo.find_profile().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_parses_stored_record() {
        let store = MemoryStore::new();
        let raw = serde_json::to_string(&PersistedProfile::with_status(&KycStatus::Pending)).unwrap();
        store.set_item("userProfile", &raw).await.unwrap();

        let repo = KvProfileRepository::new(store, "userProfile");
        let profile = repo.find_profile().await.unwrap().unwrap();
        assert_eq!(profile.kyc_status(), Some(KycStatus::Pending));
    }

    #[tokio::test]
    async fn test_malformed_record_is_error() {
        let store = MemoryStore::new();
        store.set_item("userProfile", "{oops").await.unwrap();

        let repo = KvProfileRepository::new(store, "userProfile");
        let err = repo.find_profile().await.unwrap_err();
        assert!(matches!(err, GateError::MalformedProfile(_)));
    }
}
