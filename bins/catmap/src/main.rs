//! catmap: developer CLI for the cat map geospatial core.

use catmap_geo::{GeoConfig, GeoPosition};
use catmap_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Cat map geospatial toolkit
#[derive(Parser)]
#[command(name = "catmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Path to a geo configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two points in meters
    Distance {
        /// First latitude
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        /// First longitude
        #[arg(allow_hyphen_values = true)]
        lng1: f64,
        /// Second latitude
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        /// Second longitude
        #[arg(allow_hyphen_values = true)]
        lng2: f64,
    },

    /// Resolve the user position, falling back to the default location
    Locate {
        /// Device position as "lat,lng" (treated as permission denied if omitted)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<GeoPosition>,
    },

    /// Generate cats around a position
    Nearby {
        /// Center as "lat,lng" (the default location if omitted)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<GeoPosition>,

        /// Number of cats
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Sampling radius in meters
        #[arg(short, long)]
        radius: Option<f64>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Walking route between two positions
    Route {
        /// Origin as "lat,lng"
        #[arg(allow_hyphen_values = true)]
        from: GeoPosition,

        /// Destination as "lat,lng"
        #[arg(allow_hyphen_values = true)]
        to: GeoPosition,
    },

    /// Decode a raw directions polyline
    Decode {
        /// Flat list of numbers: absolute lat, lng, then deltas in 1e-5 degrees
        #[arg(required = true, allow_hyphen_values = true, value_delimiter = ',')]
        values: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = TelemetryConfig {
        json: cli.json_logs,
        ..if cli.verbose {
            TelemetryConfig::verbose()
        } else {
            TelemetryConfig::default()
        }
    };
    if let Err(e) = catmap_telemetry::init_with_config(telemetry) {
        eprintln!("{} {e}", "warning:".yellow());
    }

    let config = match GeoConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Distance { lat1, lng1, lat2, lng2 } => {
            commands::distance::run(&config, lat1, lng1, lat2, lng2, cli.format)
        }
        Commands::Locate { at } => commands::locate::run(&config, at, cli.format).await,
        Commands::Nearby { at, count, radius, seed } => {
            commands::nearby::run(&config, at, count, radius, seed, cli.format).await
        }
        Commands::Route { from, to } => commands::route::run(from, to, cli.format).await,
        Commands::Decode { values } => commands::decode::run(&values, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
