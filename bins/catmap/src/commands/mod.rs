//! Subcommand implementations

pub mod decode;
pub mod distance;
pub mod locate;
pub mod nearby;
pub mod route;

use catmap_geo::GeoPosition;
use owo_colors::OwoColorize;

/// Print a section header
pub(crate) fn header(title: &str) {
    println!();
    println!("  {}", title.blue().bold());
    println!("  {}", "─".repeat(title.chars().count()).blue());
}

/// Print a numbered list of points
pub(crate) fn print_points(points: &[GeoPosition]) {
    for (i, point) in points.iter().enumerate() {
        println!("  {:>4}  {}", i.dimmed(), point);
    }
}
