//! Error types for the geo crate.

use crate::location::PlatformLocationError;
use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The platform could not supply the device position
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[source] PlatformLocationError),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML configuration could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for programmatic handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Platform location failure
    LocationUnavailable = 10001,
    /// Invalid configuration values
    InvalidConfig = 10002,
    /// TOML parsing error
    ConfigParse = 10003,
    /// I/O error while loading configuration
    Io = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::LocationUnavailable(_) => GeoErrorCode::LocationUnavailable,
            GeoError::InvalidConfig(_) => GeoErrorCode::InvalidConfig,
            GeoError::ConfigParse(_) => GeoErrorCode::ConfigParse,
            GeoError::Io(_) => GeoErrorCode::Io,
        }
    }

    /// Returns true if this error means the caller should fall back to the
    /// default location.
    pub fn is_location_unavailable(&self) -> bool {
        matches!(self, GeoError::LocationUnavailable(_))
    }
}
