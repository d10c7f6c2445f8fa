//! Persisted user preferences
//!
//! The UI layer talks to [`PreferenceStore`] rather than to a concrete
//! backend so that the theme store can be exercised against an in-memory map
//! or a store that fails on purpose.

use crate::kv::{DeviceStore, KvError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Key under which the selected color theme is persisted
pub const THEME_KEY: &str = "color-theme";

/// String-valued preference storage
pub trait PreferenceStore: Send + Sync {
    /// Read a preference; `Ok(None)` when it has never been written
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference, replacing any previous value
    fn set_string(&self, key: &str, value: &str) -> Result<()>;
}

impl PreferenceStore for DeviceStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)
    }
}

/// Preferences held in process memory only
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.write().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(KvError::InvalidKey("key must not be empty".to_string()));
        }
        Ok(self.values.read().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey("key must not be empty".to_string()));
        }
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::KvStore;
    use std::sync::Arc;

    #[test]
    fn test_memory_preferences_roundtrip() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_string(THEME_KEY).unwrap(), None);

        prefs.set_string(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.get_string(THEME_KEY).unwrap().as_deref(), Some("dark"));

        prefs.set_string(THEME_KEY, "light").unwrap();
        assert_eq!(prefs.get_string(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_preferences_seeded() {
        let prefs = MemoryPreferences::with_value(THEME_KEY, "light");
        assert_eq!(prefs.get_string(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_device_store_as_preference_store() {
        let device = DeviceStore::new(Arc::new(KvStore::in_memory().unwrap()));
        let prefs: &dyn PreferenceStore = &device;

        prefs.set_string(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.get_string(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let prefs = MemoryPreferences::new();
        assert!(prefs.set_string("", "dark").is_err());
    }
}
