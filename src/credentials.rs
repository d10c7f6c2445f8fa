//! API key lookup
//!
//! The RapidAPI key is looked up from the `GITA_API_KEY` environment
//! variable first, then from the OS keyring (service `gita-reader`, user
//! `rapidapi`). It is held as a [`SecretString`] from the moment it is read.

use secrecy::SecretString;
use thiserror::Error;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GITA_API_KEY";

/// Keyring service name
pub const KEYRING_SERVICE: &str = "gita-reader";

/// Keyring user name
pub const KEYRING_USER: &str = "rapidapi";

/// Credential error types
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No source produced a key
    #[error("API key not found (checked: {0}). Set GITA_API_KEY or run `gita key set`.")]
    NotFound(String),

    /// The OS keyring could not be used
    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Result type for credential operations
pub type Result<T> = std::result::Result<T, CredentialError>;

/// A place an API key may be found
pub trait KeySource {
    /// Look up the key; `Ok(None)` means this source has none
    fn lookup(&self) -> Result<Option<SecretString>>;

    /// Short name for messages
    fn name(&self) -> String;
}

/// Key from an environment variable; an empty value counts as absent
#[derive(Debug, Clone)]
pub struct EnvKeySource {
    var: String,
}

impl EnvKeySource {
    /// Read from `var`
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvKeySource {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl KeySource for EnvKeySource {
    fn lookup(&self) -> Result<Option<SecretString>> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(Some(SecretString::from(value))),
            _ => Ok(None),
        }
    }

    fn name(&self) -> String {
        format!("${}", self.var)
    }
}

/// Key from the OS keyring
#[derive(Debug, Clone)]
pub struct KeyringKeySource {
    service: String,
    user: String,
}

impl KeyringKeySource {
    /// Read the entry for `service`/`user`
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self { service: service.into(), user: user.into() }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, &self.user)
            .map_err(|e| CredentialError::Keyring(format!("Failed to create keyring entry: {}", e)))
    }

    /// Store `key` in this entry
    pub fn store(&self, key: &str) -> Result<()> {
        self.entry()?
            .set_password(key)
            .map_err(|e| CredentialError::Keyring(format!("Failed to store API key: {}", e)))?;
        tracing::debug!(service = %self.service, "stored API key in OS keyring");
        Ok(())
    }
}

impl Default for KeyringKeySource {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE, KEYRING_USER)
    }
}

impl KeySource for KeyringKeySource {
    fn lookup(&self) -> Result<Option<SecretString>> {
        match self.entry()?.get_password() {
            Ok(password) => Ok(Some(SecretString::from(password))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CredentialError::Keyring(format!("Failed to read API key: {}", e))),
        }
    }

    fn name(&self) -> String {
        format!("keyring {}/{}", self.service, self.user)
    }
}

/// Look up the key from the environment, then the keyring
pub fn resolve_api_key() -> Result<SecretString> {
    resolve_from(&[&EnvKeySource::default(), &KeyringKeySource::default()])
}

/// First key found among `sources`, in order
///
/// A source that fails is logged and skipped, so a broken keyring does not
/// hide a key that a later source could supply.
pub fn resolve_from(sources: &[&dyn KeySource]) -> Result<SecretString> {
    for source in sources {
        match source.lookup() {
            Ok(Some(key)) => {
                tracing::debug!(source = %source.name(), "found API key");
                return Ok(key);
            }
            Ok(None) => {}
            Err(error) => tracing::warn!(source = %source.name(), %error, "API key source failed"),
        }
    }

    let checked: Vec<String> = sources.iter().map(|s| s.name()).collect();
    Err(CredentialError::NotFound(checked.join(", ")))
}
