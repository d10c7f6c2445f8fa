//! Storage layer for Gita Reader
//!
//! Device-local key-value storage and the preference interface the theme
//! store persists through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod preferences;

pub use kv::{DeviceStore, KvConfig, KvError, KvStore};
pub use preferences::{MemoryPreferences, PreferenceStore, THEME_KEY};
