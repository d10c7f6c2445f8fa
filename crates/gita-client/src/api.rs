//! API gateway facade
//!
//! Every request goes to a fixed base URL with the same two RapidAPI headers.
//! There is no retry, no caching and no request cancellation: a call either
//! yields a decoded record or an [`Error`].
//!
//! # Examples
//! ```no_run
//! use gita_client::api::{ApiClient, ApiConfig, GitaApi};
//! use secrecy::SecretString;
//!
//! async fn example() -> gita_client::Result<()> {
//!     let config = ApiConfig::new(SecretString::from("my-key".to_string()));
//!     let client = ApiClient::new(config)?;
//!
//!     let chapter = client.chapter(2).await?;
//!     println!("{} has {} verses", chapter.name_transliterated, chapter.verses_count);
//!     Ok(())
//! }
//! ```

use crate::types::{Chapter, Verse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Default service base URL
pub const DEFAULT_BASE_URL: &str = "https://bhagavad-gita3.p.rapidapi.com/v2";

/// Default value of the `X-RapidAPI-Host` header
pub const DEFAULT_API_HOST: &str = "bhagavad-gita3.p.rapidapi.com";

/// Header carrying the API key (`X-RapidAPI-Key`)
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the API host identifier (`X-RapidAPI-Host`)
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the API client
#[derive(Debug)]
pub struct ApiConfig {
    /// Base service URL, without a trailing slash
    pub base_url: String,
    /// Value sent in `X-RapidAPI-Host`
    pub host: String,
    /// Value sent in `X-RapidAPI-Key`
    pub api_key: SecretString,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl ApiConfig {
    /// Create a config for the default service with the given key
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            api_key,
            timeout: None,
            user_agent: format!("Gita-Reader/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the host header value
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// =============================================================================
// API Trait
// =============================================================================

/// The three endpoints the application consumes
#[async_trait]
pub trait GitaApi: Send + Sync {
    /// `GET /chapters/`
    async fn chapters(&self) -> Result<Vec<Chapter>>;

    /// `GET /chapters/{n}/`
    async fn chapter(&self, number: u32) -> Result<Chapter>;

    /// `GET /chapters/{n}/verses/{v}/`
    async fn verse(&self, chapter: u32, verse: u32) -> Result<Verse>;
}

// =============================================================================
// Client Implementation
// =============================================================================

/// HTTP client for the Bhagavad Gita API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: ReqwestClient,
    base_url: String,
    host: String,
}

impl ApiClient {
    /// Create a new client; the key and host become default headers
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|_| Error::InvalidInput("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let host = HeaderValue::from_str(&config.host)
            .map_err(|_| Error::InvalidInput(format!("Invalid API host: {}", config.host)))?;
        headers.insert(HeaderName::from_static(API_HOST_HEADER), host);

        let mut builder = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            host: config.host,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the host header value
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Issue a GET for `path` (relative to the base URL) and decode the body
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Turn a response into a decoded record or an error
    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                body
            };
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GitaApi for ApiClient {
    async fn chapters(&self) -> Result<Vec<Chapter>> {
        self.get("/chapters/").await
    }

    async fn chapter(&self, number: u32) -> Result<Chapter> {
        self.get(&format!("/chapters/{}/", number)).await
    }

    async fn verse(&self, chapter: u32, verse: u32) -> Result<Verse> {
        self.get(&format!("/chapters/{}/verses/{}/", chapter, verse))
            .await
    }
}

// =============================================================================
// Tests
// =============================================================================
