//! Device location acquisition.
//!
//! [`LocationProvider`] asks a [`PlatformLocator`] for the device position and
//! reports failure as [`GeoError::LocationUnavailable`]. It never substitutes
//! the default position on its own: callers decide whether to fall back with
//! [`LocationProvider::get_default_location`], so they can tell a real fix
//! from a fallback one.
//!
//! # Example
//!
//! ```
//! use catmap_geo::{DeniedLocator, GeoConfig, LocationProvider};
//!
//! let provider = LocationProvider::new(DeniedLocator, GeoConfig::default());
//! let position = match tokio_test::block_on(provider.get_user_location()) {
//!     Ok(position) => position,
//!     Err(_) => provider.get_default_location(),
//! };
//! assert_eq!(position, GeoConfig::default().default_location);
//! ```

use crate::{GeoConfig, GeoError, GeoPosition, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use tracing::{debug, instrument, warn};

/// Geodetic datum requested from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// World Geodetic System 1984
    Wgs84,
    /// Chinese national datum used by domestic map providers
    #[default]
    Gcj02,
}

impl CoordinateSystem {
    /// Name the platform API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSystem::Wgs84 => "wgs84",
            CoordinateSystem::Gcj02 => "gcj02",
        }
    }
}

/// Broad class of a platform failure. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// The user refused the location permission
    PermissionDenied,
    /// No fix within the platform's deadline
    Timeout,
    /// GPS or sensor failure
    Hardware,
    /// Anything else
    Other,
}

/// Opaque error reported by the platform location API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLocationError {
    /// Failure class
    pub kind: PlatformErrorKind,
    /// Platform-provided message
    pub message: String,
}

impl PlatformLocationError {
    /// Create a platform error.
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a permission denial.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::PermissionDenied, message)
    }
}

impl fmt::Display for PlatformLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PlatformLocationError {}

/// Platform location API.
pub trait PlatformLocator {
    /// Resolve the current device position in the requested datum.
    fn locate(
        &self,
        system: CoordinateSystem,
    ) -> impl Future<Output = std::result::Result<GeoPosition, PlatformLocationError>> + Send;
}

/// Locator that always resolves the same position.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocator(pub GeoPosition);

impl PlatformLocator for StaticLocator {
    async fn locate(
        &self,
        _system: CoordinateSystem,
    ) -> std::result::Result<GeoPosition, PlatformLocationError> {
        Ok(self.0)
    }
}

/// Locator for environments without a position source. Always denies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocator;

impl PlatformLocator for DeniedLocator {
    async fn locate(
        &self,
        _system: CoordinateSystem,
    ) -> std::result::Result<GeoPosition, PlatformLocationError> {
        Err(PlatformLocationError::permission_denied("no location source configured"))
    }
}

/// Outcome of the two-step location contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedLocation {
    /// Position reported by the device
    Device(GeoPosition),
    /// Configured default, used because the device position was unavailable
    Fallback {
        /// The default position
        position: GeoPosition,
        /// Why the device position could not be used
        reason: String,
    },
}

impl ResolvedLocation {
    /// The position, whichever source it came from.
    pub fn position(&self) -> GeoPosition {
        match self {
            ResolvedLocation::Device(position) | ResolvedLocation::Fallback { position, .. } => {
                *position
            }
        }
    }

    /// True when the position is the configured default.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedLocation::Fallback { .. })
    }
}

/// Acquires the user position from a platform locator.
#[derive(Debug, Clone)]
pub struct LocationProvider<L> {
    locator: L,
    coordinate_system: CoordinateSystem,
    default_location: GeoPosition,
}

impl<L: PlatformLocator> LocationProvider<L> {
    /// Create a provider using the datum and default position from `config`.
    pub fn new(locator: L, config: GeoConfig) -> Self {
        Self {
            locator,
            coordinate_system: config.coordinate_system,
            default_location: config.default_location,
        }
    }

    /// Current device position.
    ///
    /// Fails with [`GeoError::LocationUnavailable`] when the platform denies
    /// permission, times out, or reports a hardware error.
    #[instrument(skip(self), fields(system = self.coordinate_system.as_str()))]
    pub async fn get_user_location(&self) -> Result<GeoPosition> {
        match self.locator.locate(self.coordinate_system).await {
            Ok(position) => {
                debug!(%position, "Device location acquired");
                Ok(position)
            }
            Err(err) => {
                warn!(kind = ?err.kind, error = %err.message, "Failed to acquire device location");
                Err(GeoError::LocationUnavailable(err))
            }
        }
    }

    /// Configured fallback position.
    #[inline]
    pub fn get_default_location(&self) -> GeoPosition {
        self.default_location
    }

    /// Runs [`get_user_location`](Self::get_user_location) and falls back to
    /// [`get_default_location`](Self::get_default_location) on failure.
    pub async fn resolve_location(&self) -> ResolvedLocation {
        match self.get_user_location().await {
            Ok(position) => ResolvedLocation::Device(position),
            Err(err) => ResolvedLocation::Fallback {
                position: self.get_default_location(),
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the datum it was asked for.
    struct RecordingLocator {
        requested: Mutex<Option<CoordinateSystem>>,
    }

    impl PlatformLocator for RecordingLocator {
        async fn locate(
            &self,
            system: CoordinateSystem,
        ) -> std::result::Result<GeoPosition, PlatformLocationError> {
            *self.requested.lock().unwrap() = Some(system);
            Err(PlatformLocationError::new(PlatformErrorKind::Hardware, "gps off"))
        }
    }

    #[test]
    fn test_user_location_success() {
        let here = GeoPosition::new(31.2304, 121.4737);
        let provider = LocationProvider::new(StaticLocator(here), GeoConfig::default());

        let position = tokio_test::block_on(provider.get_user_location()).unwrap();
        assert_eq!(position, here);
    }

    #[test]
    fn test_denied_is_location_unavailable() {
        let provider = LocationProvider::new(DeniedLocator, GeoConfig::default());

        let err = tokio_test::block_on(provider.get_user_location()).unwrap_err();
        match err {
            GeoError::LocationUnavailable(platform) => {
                assert_eq!(platform.kind, PlatformErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(provider.get_default_location(), GeoPosition::new(31.2079, 121.4737));
    }

    #[test]
    fn test_default_location_comes_from_config() {
        let beijing = GeoPosition::new(39.9042, 116.4074);
        let config = GeoConfig::default().with_default_location(beijing);
        let provider = LocationProvider::new(DeniedLocator, config);

        assert_eq!(provider.get_default_location(), beijing);
    }

    #[test]
    fn test_requests_configured_datum() {
        let locator = RecordingLocator {
            requested: Mutex::new(None),
        };
        let provider = LocationProvider::new(locator, GeoConfig::default());

        let err = tokio_test::block_on(provider.get_user_location()).unwrap_err();
        assert!(err.is_location_unavailable());
        assert_eq!(
            *provider.locator.requested.lock().unwrap(),
            Some(CoordinateSystem::Gcj02)
        );
    }

    #[test]
    fn test_resolve_location() {
        let here = GeoPosition::new(31.22, 121.48);
        let device = LocationProvider::new(StaticLocator(here), GeoConfig::default());
        let resolved = tokio_test::block_on(device.resolve_location());
        assert_eq!(resolved, ResolvedLocation::Device(here));
        assert!(!resolved.is_fallback());

        let denied = LocationProvider::new(DeniedLocator, GeoConfig::default());
        let resolved = tokio_test::block_on(denied.resolve_location());
        assert!(resolved.is_fallback());
        assert_eq!(resolved.position(), GeoPosition::new(31.2079, 121.4737));
    }
}
