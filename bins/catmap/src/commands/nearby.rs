//! Nearby command

use super::{header, locate};
use crate::Format;
use anyhow::{ensure, Result};
use catmap_geo::{GeoConfig, GeoPosition, NearbyGenerator};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Generate and print cats around a position
pub async fn run(
    config: &GeoConfig,
    at: Option<GeoPosition>,
    count: Option<usize>,
    radius: Option<f64>,
    seed: Option<u64>,
    format: Format,
) -> Result<()> {
    let radius = radius.unwrap_or(config.nearby_radius_m);
    ensure!(radius >= 0.0, "radius cannot be negative: {radius}");

    let center = locate::resolve(config, at).await.position();
    let mut rng = SmallRng::seed_from_u64(seed.unwrap_or_else(rand::random));

    let cats = NearbyGenerator::from_config(config).generate(
        center,
        count.unwrap_or(config.nearby_count),
        radius,
        &mut rng,
    );

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&cats)?),
        Format::Text => {
            header(&format!("{} cats within {radius} m of {center}", cats.len()));
            for cat in &cats {
                println!(
                    "  {:>6} m  {:<14} {:<9} {}",
                    cat.distance_meters.cyan(),
                    cat.name,
                    format!("{:?}", cat.status).to_lowercase(),
                    cat.position.dimmed()
                );
            }
        }
    }

    Ok(())
}
