//! Geo configuration loading.
//!
//! The constants the geo core depends on are configuration values so that
//! tests and alternate deployments can substitute their own.

use crate::haversine::{EARTH_RADIUS_M, METERS_PER_DEGREE};
use crate::location::CoordinateSystem;
use crate::{GeoError, GeoPosition, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tianzifang, Shanghai.
const DEFAULT_LOCATION: GeoPosition = GeoPosition::new(31.2079, 121.4737);

/// Configuration for the geo core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Sphere radius used by the Haversine formula
    pub earth_radius_m: f64,
    /// Meters per degree of latitude
    pub meters_per_degree: f64,
    /// Position used when the device location is unavailable
    pub default_location: GeoPosition,
    /// Default sampling radius for nearby cats
    pub nearby_radius_m: f64,
    /// Default number of nearby cats
    pub nearby_count: usize,
    /// Datum requested from the platform location API
    pub coordinate_system: CoordinateSystem,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            meters_per_degree: METERS_PER_DEGREE,
            default_location: DEFAULT_LOCATION,
            nearby_radius_m: 2000.0,
            nearby_count: 8,
            coordinate_system: CoordinateSystem::default(),
        }
    }
}

impl GeoConfig {
    /// Load configuration from a file path, a standard location, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let config = match config_path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "Loading geo configuration");
                Self::from_toml(&std::fs::read_to_string(&p)?)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Builder-style method to set the default location
    #[must_use]
    pub fn with_default_location(mut self, position: GeoPosition) -> Self {
        self.default_location = position;
        self
    }

    /// Builder-style method to set the sphere radius
    #[must_use]
    pub fn with_earth_radius(mut self, radius_m: f64) -> Self {
        self.earth_radius_m = radius_m;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.earth_radius_m.is_nan() || self.earth_radius_m <= 0.0 {
            return Err(GeoError::InvalidConfig("earth_radius_m must be positive".into()));
        }
        if self.meters_per_degree.is_nan() || self.meters_per_degree <= 0.0 {
            return Err(GeoError::InvalidConfig("meters_per_degree must be positive".into()));
        }
        if self.nearby_radius_m.is_nan() || self.nearby_radius_m < 0.0 {
            return Err(GeoError::InvalidConfig("nearby_radius_m cannot be negative".into()));
        }
        Ok(())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<std::path::PathBuf> {
    let candidates = [".catmap.toml", "catmap.toml", ".config/catmap.toml"];

    candidates
        .into_iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GeoConfig::default();
        assert_eq!(config.earth_radius_m, 6_371_000.0);
        assert_eq!(config.meters_per_degree, 111_320.0);
        assert_eq!(config.default_location, GeoPosition::new(31.2079, 121.4737));
        assert_eq!(config.nearby_count, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeoConfig::from_toml(
            r#"
            nearby_count = 12

            [default_location]
            latitude = 39.9042
            longitude = 116.4074
            "#,
        )
        .unwrap();

        assert_eq!(config.nearby_count, 12);
        assert_eq!(config.default_location, GeoPosition::new(39.9042, 116.4074));
        assert_eq!(config.nearby_radius_m, 2000.0);
        assert_eq!(config.coordinate_system, CoordinateSystem::Gcj02);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "earth_radius_m = 1000.0\ncoordinate_system = \"wgs84\"").unwrap();

        let config = GeoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.earth_radius_m, 1000.0);
        assert_eq!(config.coordinate_system, CoordinateSystem::Wgs84);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "meters_per_degree = 0.0").unwrap();

        let err = GeoConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, GeoError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GeoConfig::load(Some(Path::new("/nonexistent/catmap.toml"))).unwrap_err();
        assert!(matches!(err, GeoError::Io(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = GeoConfig::from_toml("nearby_count = \"many\"").unwrap_err();
        assert!(matches!(err, GeoError::ConfigParse(_)));
    }
}
