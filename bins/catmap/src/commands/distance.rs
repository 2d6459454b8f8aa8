//! Distance command

use crate::Format;
use anyhow::Result;
use catmap_geo::{DistanceCalculator, GeoConfig};

/// Print the distance between two points
pub fn run(config: &GeoConfig, lat1: f64, lng1: f64, lat2: f64, lng2: f64, format: Format) -> Result<()> {
    let meters = DistanceCalculator::new(config.earth_radius_m).distance(lat1, lng1, lat2, lng2);

    match format {
        Format::Json => println!(
            "{}",
            serde_json::json!({
                "from": { "latitude": lat1, "longitude": lng1 },
                "to": { "latitude": lat2, "longitude": lng2 },
                "distanceMeters": meters,
            })
        ),
        Format::Text => println!("{meters} m"),
    }

    Ok(())
}
