//! Walking directions for the cat map
//!
//! This crate fetches walking routes from a third-party directions service,
//! decodes its delta-compressed polylines, and falls back to a straight line
//! whenever the service cannot provide a route.
//!
//! # Features
//!
//! - **Environment-based configuration**: endpoint, credential and timeout from environment variables
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//! - **Degraded routes**: failures never reach the caller of `get_walking_route`
//!
//! # Example
//!
//! ```rust,no_run
//! use catmap_directions::{DirectionsClient, RoutePlanner};
//! use catmap_geo::GeoPosition;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = RoutePlanner::new(DirectionsClient::new()?);
//!
//!     let from = GeoPosition::new(31.2079, 121.4737);
//!     let to = GeoPosition::new(31.2120, 121.4790);
//!     let points = planner.get_walking_route(from, to).await;
//!     println!("{} points", points.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod planner;
pub mod response;

pub use client::{DirectionsClient, DirectionsService};
pub use config::ClientConfig;
pub use error::{DirectionsError, DirectionsResult};
pub use planner::{PlannedRoute, RoutePlanner};
pub use response::{DirectionsResponse, Route, RouteSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{DirectionsClient, DirectionsService};
    pub use crate::config::ClientConfig;
    pub use crate::error::{DirectionsError, DirectionsResult};
    pub use crate::planner::{PlannedRoute, RoutePlanner};
}
