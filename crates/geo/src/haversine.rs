//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes. Results are rounded to the
//! nearest whole metre.

use crate::GeoPosition;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude (WGS84 approximation).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Great-circle distance calculator with a configurable sphere radius.
///
/// Inputs are not range-checked. NaN or infinite inputs produce NaN or
/// infinite output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculator {
    radius_m: f64,
}

impl Default for DistanceCalculator {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_M)
    }
}

impl DistanceCalculator {
    /// Creates a calculator for a sphere of `radius_m` meters.
    #[inline]
    pub const fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Sphere radius in meters.
    #[inline]
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Distance in whole meters between `(lat1, lng1)` and `(lat2, lng2)`.
    ///
    /// # Example
    /// ```
    /// use catmap_geo::DistanceCalculator;
    ///
    /// let calc = DistanceCalculator::default();
    /// let d = calc.distance(0.0, 0.0, 0.0, 1.0);
    /// assert!((d - 111_195.0).abs() < 1.0);
    /// ```
    #[inline]
    pub fn distance(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        haversine_with_radius(
            GeoPosition::new(lat1, lng1),
            GeoPosition::new(lat2, lng2),
            self.radius_m,
        )
        .round()
    }

    /// Distance in whole meters between two positions.
    #[inline]
    pub fn between(&self, from: &GeoPosition, to: &GeoPosition) -> f64 {
        haversine_with_radius(*from, *to, self.radius_m).round()
    }
}

/// Distance in whole meters on a sphere of radius [`EARTH_RADIUS_M`].
#[inline]
pub fn distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    DistanceCalculator::default().distance(lat1, lng1, lat2, lng2)
}

#[inline]
fn haversine_with_radius(from: GeoPosition, to: GeoPosition, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}
