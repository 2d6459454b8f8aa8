//! Geospatial core for the cat map.
//!
//! This crate provides:
//! - Haversine distance calculations rounded to whole metres
//! - Uniform random placement of nearby cats around a center point
//! - Decoding of the delta-compressed polylines returned by the directions service
//! - Device location acquisition with an explicit default-location fallback
//!
//! # Example
//!
//! ```
//! use catmap_geo::{distance_meters, GeoPosition};
//!
//! let tianzifang = GeoPosition::new(31.2079, 121.4737);
//! let bund = GeoPosition::new(31.2400, 121.4900);
//!
//! let meters = distance_meters(
//!     tianzifang.latitude,
//!     tianzifang.longitude,
//!     bund.latitude,
//!     bund.longitude,
//! );
//! assert!((meters - 3_900.0).abs() < 200.0);
//! ```

mod config;
mod error;
mod haversine;
pub mod location;
pub mod nearby;
pub mod polyline;

pub use config::GeoConfig;
pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{distance_meters, DistanceCalculator, EARTH_RADIUS_M, METERS_PER_DEGREE};
pub use location::{
    CoordinateSystem, DeniedLocator, LocationProvider, PlatformErrorKind, PlatformLocationError,
    PlatformLocator, ResolvedLocation, StaticLocator,
};
pub use nearby::{generate_nearby, generate_nearby_with_defaults, Cat, CatStatus, NearbyGenerator};
pub use polyline::{decode_polyline, encode_polyline, POLYLINE_SCALE};

use serde::{Deserialize, Serialize};

/// A geographic position with latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPosition {
    /// Creates a new position.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are inside their degree ranges.
    ///
    /// Informational only: no operation in this crate rejects out-of-range input.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Formats the position as `"lat,lng"`, the form the directions service expects.
    pub fn to_query_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for GeoPosition {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for GeoPosition {
    type Err = String;

    /// Parses `"lat,lng"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lng\", got \"{s}\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid latitude \"{lat}\": {e}"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid longitude \"{lng}\": {e}"))?;
        Ok(Self::new(lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = GeoPosition::new(31.2079, 121.4737);
        assert_eq!(pos.latitude, 31.2079);
        assert_eq!(pos.longitude, 121.4737);
    }

    #[test]
    fn test_position_validation() {
        assert!(GeoPosition::new(0.0, 0.0).is_valid());
        assert!(GeoPosition::new(90.0, 180.0).is_valid());
        assert!(GeoPosition::new(-90.0, -180.0).is_valid());
        assert!(!GeoPosition::new(91.0, 0.0).is_valid());
        assert!(!GeoPosition::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_position_from_tuple() {
        let pos: GeoPosition = (31.2, 121.4).into();
        assert_eq!(pos.latitude, 31.2);
        assert_eq!(pos.longitude, 121.4);
    }

    #[test]
    fn test_query_param() {
        let pos = GeoPosition::new(31.2, 121.4);
        assert_eq!(pos.to_query_param(), "31.2,121.4");
    }

    #[test]
    fn test_parse_position() {
        let pos: GeoPosition = "31.2079, 121.4737".parse().unwrap();
        assert_eq!(pos, GeoPosition::new(31.2079, 121.4737));

        assert!("31.2079".parse::<GeoPosition>().is_err());
        assert!("north,121.4".parse::<GeoPosition>().is_err());
    }
}
