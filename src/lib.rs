//! Gita Reader
//!
//! A Bhagavad Gita chapter and verse reader over the RapidAPI-hosted
//! Bhagavad Gita service. The workspace splits into:
//!
//! - `gita-client` - HTTP facade and record types
//! - `storage` - persisted device preferences
//! - `app-state` - per-page view-state machine and loaders
//! - `app-ui` - theme store, routes, component tree and screens
//!
//! This crate wires them together behind the `gita` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod credentials;
pub mod logging;

pub use app::{App, OutputFormat, RenderedPage};
pub use config::{Config, ConfigError};
pub use credentials::{resolve_api_key, CredentialError};
pub use logging::{LogFormat, LoggingConfig};
