//! Error types for the directions client
//!
//! Every variant is a reason the real route could not be used. The route
//! planner absorbs all of them and returns a straight line instead.

use thiserror::Error;

/// Result type alias for directions operations
pub type DirectionsResult<T> = Result<T, DirectionsError>;

/// Directions client errors
#[derive(Error, Debug)]
pub enum DirectionsError {
    /// HTTP request failed (connection, timeout, non-2xx status)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No service credential configured
    #[error("Missing directions service key")]
    MissingCredential,

    /// Service answered with a non-zero status
    #[error("Directions service error ({status}): {message}")]
    ServiceStatus {
        /// Service status code
        status: i64,
        /// Message from the service
        message: String,
    },

    /// Service reported success but returned no routes
    #[error("Directions service returned no routes")]
    NoRoutes,

    /// The first route had no decodable polyline
    #[error("Route polyline was empty or malformed")]
    EmptyPolyline,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DirectionsError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a service status error
    pub fn service_status(status: i64, message: impl Into<String>) -> Self {
        Self::ServiceStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if the failure happened before a response was parsed
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Json(_))
    }

    /// Check if the service itself rejected or could not answer the query
    #[must_use]
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::ServiceStatus { .. } | Self::NoRoutes | Self::EmptyPolyline
        )
    }
}
