//! Decode command

use super::print_points;
use crate::Format;
use anyhow::Result;
use catmap_geo::decode_polyline;
use owo_colors::OwoColorize;

/// Decode and print a raw polyline
pub fn run(values: &[f64], format: Format) -> Result<()> {
    let points = decode_polyline(values);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&points)?),
        Format::Text => {
            if points.is_empty() {
                println!("{}", "no points (input needs whole lat,lng pairs)".yellow());
            } else {
                print_points(&points);
            }
        }
    }

    Ok(())
}
