//! Route command

use super::{header, print_points};
use crate::Format;
use anyhow::Result;
use catmap_directions::{DirectionsClient, PlannedRoute, RoutePlanner};
use catmap_geo::GeoPosition;
use catmap_telemetry::Timer;
use owo_colors::OwoColorize;

/// Plan and print a walking route
pub async fn run(from: GeoPosition, to: GeoPosition, format: Format) -> Result<()> {
    let timer = Timer::start("route");

    let route = match DirectionsClient::new() {
        Ok(client) => RoutePlanner::new(client).plan(from, to).await,
        Err(e) => {
            tracing::warn!(error = %e, "Directions client unavailable, using straight line");
            PlannedRoute::straight_line(from, to)
        }
    };

    let elapsed = timer.stop();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&route)?),
        Format::Text => {
            header(&format!("Walking route {from} -> {to}"));
            if route.degraded {
                println!("  {}", "straight line (directions unavailable)".yellow());
            }
            if let (Some(distance), Some(duration)) = (route.distance_m, route.duration_min) {
                println!("  {distance} m, about {duration} min");
            }
            print_points(&route.points);
            println!("  {}", format!("{} ms", elapsed.as_millis()).dimmed());
        }
    }

    Ok(())
}
