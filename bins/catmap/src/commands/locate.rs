//! Locate command

use crate::Format;
use anyhow::Result;
use catmap_geo::{
    DeniedLocator, GeoConfig, GeoPosition, LocationProvider, PlatformLocator, ResolvedLocation,
    StaticLocator,
};
use owo_colors::OwoColorize;

/// Resolve the user position through the two-step location contract
pub async fn resolve(config: &GeoConfig, at: Option<GeoPosition>) -> ResolvedLocation {
    match at {
        Some(position) => resolve_with(StaticLocator(position), config).await,
        None => resolve_with(DeniedLocator, config).await,
    }
}

async fn resolve_with<L: PlatformLocator>(locator: L, config: &GeoConfig) -> ResolvedLocation {
    LocationProvider::new(locator, config.clone())
        .resolve_location()
        .await
}

/// Print the resolved position and where it came from
pub async fn run(config: &GeoConfig, at: Option<GeoPosition>, format: Format) -> Result<()> {
    let resolved = resolve(config, at).await;
    let position = resolved.position();

    match format {
        Format::Json => {
            let mut out = serde_json::json!({
                "position": position,
                "fallback": resolved.is_fallback(),
            });
            if let ResolvedLocation::Fallback { reason, .. } = &resolved {
                out["reason"] = serde_json::Value::from(reason.as_str());
            }
            println!("{out}");
        }
        Format::Text => match &resolved {
            ResolvedLocation::Device(_) => println!("{} {position}", "device".green()),
            ResolvedLocation::Fallback { reason, .. } => {
                println!("{} {position}", "default".yellow());
                println!("  {}", reason.dimmed());
            }
        },
    }

    Ok(())
}
