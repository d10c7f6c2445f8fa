//! Key-value store for device-level settings
//!
//! A thin JSON-encoding layer over sled. Keys are plain strings; scoped keys
//! are joined with `:` so `["device", "color-theme"]` is stored as
//! `device:color-theme`.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

const SEPARATOR: &str = ":";

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database directory
    pub path: PathBuf,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Flush interval in milliseconds (None for flush on demand only)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("gita_prefs.db"),
            cache_capacity: 1024 * 1024,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a configuration for the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store backed by sled
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open (or create) a store with the given configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(true)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        tracing::debug!(path = %config.path.display(), "opened key-value store");
        Ok(Self { db: Arc::new(db) })
    }

    /// Create a temporary store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db: Arc::new(db) })
    }

    fn validate(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey("key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        Self::validate(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        Self::validate(key)?;
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value; returns whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        Self::validate(key)?;
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Self::validate(key)?;
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Get a value by scoped key
    pub fn get_scoped<T>(&self, scopes: &[&str]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.get(&scopes.join(SEPARATOR))
    }

    /// Set a value by scoped key
    pub fn set_scoped<T>(&self, scopes: &[&str], value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.set(&scopes.join(SEPARATOR), value)
    }

    /// Remove a value by scoped key
    pub fn remove_scoped(&self, scopes: &[&str]) -> Result<bool> {
        self.remove(&scopes.join(SEPARATOR))
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

/// Settings that belong to this device rather than to any remote account
#[derive(Clone)]
pub struct DeviceStore {
    kv: Arc<KvStore>,
}

impl DeviceStore {
    /// Wrap a key-value store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Open a device store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Arc::new(KvStore::new(KvConfig::new(path))?)))
    }

    /// Get a device-level value
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.kv.get_scoped(&["device", key])
    }

    /// Set a device-level value and flush it
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.kv.set_scoped(&["device", key], value)?;
        self.kv.flush()
    }

    /// Remove a device-level value
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.kv.remove_scoped(&["device", key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("key", &"value".to_string()).unwrap();
        let value: Option<String> = kv.get("key").unwrap();
        assert_eq!(value, Some("value".to_string()));
        assert_eq!(kv.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        let value: Option<String> = kv.get("missing").unwrap();
        assert_eq!(value, None);
        assert!(kv.is_empty());
    }

    #[test]
    fn test_empty_key_rejected() {
        let kv = KvStore::in_memory().unwrap();
        assert!(matches!(kv.set("", &1), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("key", &"value".to_string()).unwrap();
        assert!(kv.contains("key").unwrap());
        assert!(kv.remove("key").unwrap());
        assert!(!kv.contains("key").unwrap());
        assert!(!kv.remove("key").unwrap());
    }

    #[test]
    fn test_scoped_key_layout() {
        let kv = KvStore::in_memory().unwrap();

        kv.set_scoped(&["device", "color-theme"], &"dark".to_string())
            .unwrap();

        let flat: Option<String> = kv.get("device:color-theme").unwrap();
        assert_eq!(flat, Some("dark".to_string()));
    }

    #[test]
    fn test_wrong_type_is_serialization_error() {
        let kv = KvStore::in_memory().unwrap();
        kv.set("n", &42).unwrap();

        let result: Result<Option<Vec<String>>> = kv.get("n");
        assert!(matches!(result, Err(KvError::Serialization(_))));
    }

    #[test]
    fn test_device_store() {
        let device = DeviceStore::new(Arc::new(KvStore::in_memory().unwrap()));

        device.set("color-theme", &"light".to_string()).unwrap();
        let theme: Option<String> = device.get("color-theme").unwrap();
        assert_eq!(theme, Some("light".to_string()));

        assert!(device.remove("color-theme").unwrap());
        let theme: Option<String> = device.get("color-theme").unwrap();
        assert_eq!(theme, None);
    }

    #[test]
    fn test_device_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs");

        let open = || {
            let config = KvConfig::new(&path).flush_every_ms(None);
            DeviceStore::new(Arc::new(KvStore::new(config).unwrap()))
        };

        {
            let device = open();
            device.set("color-theme", &"dark".to_string()).unwrap();
        }

        let device = open();
        let theme: Option<String> = device.get("color-theme").unwrap();
        assert_eq!(theme, Some("dark".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(4096)
            .flush_every_ms(None);

        assert_eq!(config.path, PathBuf::from("test.db"));
        assert_eq!(config.cache_capacity, 4096);
        assert_eq!(config.flush_every_ms, None);
    }
}
