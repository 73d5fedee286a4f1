//! Key-value persistence
//!
//! String keys to string values, the shape of the device storage the client
//! keeps its serialized records in.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use kernel::error::app_error::AppError;
use tokio::sync::RwLock;

/// Error raised by a key-value store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file is not a JSON object of strings
    #[error("Store file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// Backend is not reachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => AppError::from(e),
            StoreError::Corrupted(e) => AppError::from(e),
            StoreError::Unavailable(msg) => AppError::unavailable(msg),
        }
    }
}

/// Key-value store port
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read a value; `None` if the key was never written
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

// ============================================================================
// JSON file store
// ============================================================================

/// Store persisted as a single JSON object file
///
/// A missing file reads as an empty store. Writes rewrite the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, items: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let raw = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items).await?;
        tracing::debug!(path = %self.path.display(), key, "Store item written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.save(&items).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Glob import would bring both store traits into scope.
    use super::{AppError, JsonFileStore, KeyValueStore, MemoryStore, PathBuf, StoreError};
    use kernel::error::kind::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_store_path() -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("platform-store-test-{}-{}", std::process::id(), n))
            .join("store.json")
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("userProfile").await.unwrap(), None);

        store.set_item("userProfile", "{}").await.unwrap();
        assert_eq!(
            store.get_item("userProfile").await.unwrap().as_deref(),
            Some("{}")
        );

        store.remove_item("userProfile").await.unwrap();
        assert_eq!(store.get_item("userProfile").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("k", "v").await.unwrap();
        assert_eq!(other.get_item("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let store = JsonFileStore::new(temp_store_path());
        assert_eq!(store.get_item("userProfile").await.unwrap(), None);
        store.remove_item("userProfile").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let path = temp_store_path();
        let store = JsonFileStore::new(&path);
        store
            .set_item("userProfile", r#"{"kyc":{"status":"verifie"}}"#)
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get_item("userProfile").await.unwrap().as_deref(),
            Some(r#"{"kyc":{"status":"verifie"}}"#)
        );

        reopened.remove_item("userProfile").await.unwrap();
        assert_eq!(store.get_item("userProfile").await.unwrap(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_file_store_corrupted_file() {
        let path = temp_store_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.get_item("userProfile").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted(_)));
        assert_eq!(AppError::from(err).kind(), ErrorKind::CorruptData);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unavailable_maps_to_retryable() {
        let err: AppError = StoreError::Unavailable("offline".into()).into();
        assert!(err.is_retryable());
    }
}
