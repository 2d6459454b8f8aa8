//! HTTP client for the walking directions service

use crate::config::ClientConfig;
use crate::error::{DirectionsError, DirectionsResult};
use crate::response::DirectionsResponse;
use catmap_geo::GeoPosition;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// A source of walking directions.
pub trait DirectionsService {
    /// Ask for a walking route between two positions.
    fn walking(
        &self,
        from: GeoPosition,
        to: GeoPosition,
    ) -> impl Future<Output = DirectionsResult<DirectionsResponse>> + Send;
}

/// Directions client backed by `reqwest`.
///
/// Makes exactly one request per call. Failures are returned to the caller
/// without retrying.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl DirectionsClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> DirectionsResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> DirectionsResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("catmap-directions/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(DirectionsError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query parameters for a walking request
    fn query(&self, from: GeoPosition, to: GeoPosition) -> [(&'static str, String); 3] {
        [
            ("from", from.to_query_param()),
            ("to", to.to_query_param()),
            ("key", self.config.key.clone().unwrap_or_default()),
        ]
    }
}

impl DirectionsService for DirectionsClient {
    #[instrument(skip(self), fields(request_id))]
    async fn walking(&self, from: GeoPosition, to: GeoPosition) -> DirectionsResult<DirectionsResponse> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self
            .inner
            .get(&self.config.base_url)
            .header(X_REQUEST_ID, &request_id)
            .query(&self.query(from, to))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(
            request_id = %request_id,
            elapsed_ms = start.elapsed().as_millis(),
            bytes = body.len(),
            "Directions response received"
        );

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig::default()
            .with_base_url("http://127.0.0.1:9/walking")
            .with_key("test-key")
    }

    #[test]
    fn test_client_creation() {
        let client = DirectionsClient::with_config(test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_requires_key() {
        let config = ClientConfig::default();
        assert!(matches!(
            DirectionsClient::with_config(config),
            Err(DirectionsError::MissingCredential)
        ));
    }

    #[test]
    fn test_query_params() {
        let client = DirectionsClient::with_config(test_config()).unwrap();
        let query = client.query(GeoPosition::new(31.2, 121.4), GeoPosition::new(31.21, 121.41));

        assert_eq!(query[0], ("from", "31.2,121.4".to_string()));
        assert_eq!(query[1], ("to", "31.21,121.41".to_string()));
        assert_eq!(query[2], ("key", "test-key".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_request_error() {
        // Port 9 (discard) is not expected to serve HTTP
        let client = DirectionsClient::with_config(test_config()).unwrap();
        let result = client
            .walking(GeoPosition::new(31.2, 121.4), GeoPosition::new(31.21, 121.41))
            .await;

        assert!(matches!(result, Err(DirectionsError::Request(_))));
    }
}
