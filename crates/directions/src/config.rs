//! Configuration for the directions client
//!
//! The service credential is never compiled in; it comes from the
//! environment or from the caller.

use crate::error::{DirectionsError, DirectionsResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default walking directions endpoint
pub const DEFAULT_DIRECTIONS_URL: &str = "https://apis.map.qq.com/ws/direction/v1/walking/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Walking directions endpoint
    pub base_url: String,
    /// Service credential sent as the `key` query parameter
    pub key: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DIRECTIONS_URL.to_string(),
            key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `CATMAP_DIRECTIONS_URL`: walking directions endpoint
    /// - `CATMAP_DIRECTIONS_KEY`: service credential
    /// - `CATMAP_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Self {
        let base_url =
            env::var("CATMAP_DIRECTIONS_URL").unwrap_or_else(|_| DEFAULT_DIRECTIONS_URL.to_string());

        let key = env::var("CATMAP_DIRECTIONS_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let timeout = env::var("CATMAP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url,
            key,
            timeout,
        }
    }

    /// Builder-style method to set the endpoint
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the service credential
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DirectionsResult<()> {
        if self.base_url.is_empty() {
            return Err(DirectionsError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(DirectionsError::InvalidUrl(self.base_url.clone()));
        }

        if self.key.as_deref().is_none_or(str::is_empty) {
            return Err(DirectionsError::MissingCredential);
        }

        if self.timeout.is_zero() {
            return Err(DirectionsError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
