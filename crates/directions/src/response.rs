//! Directions service response model

use crate::error::{DirectionsError, DirectionsResult};
use serde::{Deserialize, Serialize};

/// Top-level response from the walking directions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Service status, 0 on success
    pub status: i64,
    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,
    /// Present on success
    #[serde(default)]
    pub result: Option<RouteSet>,
}

/// Candidate routes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteSet {
    /// Routes in the service's preference order
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A single candidate route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    /// Delta-compressed coordinates, see [`catmap_geo::decode_polyline`]
    #[serde(default)]
    pub polyline: Vec<f64>,
    /// Route length in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Estimated walking time in minutes
    #[serde(default)]
    pub duration: Option<f64>,
    /// Overall heading description
    #[serde(default)]
    pub direction: Option<String>,
}

impl DirectionsResponse {
    /// Whether the service reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// The preferred route, or the reason there is none.
    pub fn into_first_route(self) -> DirectionsResult<Route> {
        if !self.is_success() {
            return Err(DirectionsError::service_status(
                self.status,
                self.message.unwrap_or_else(|| "route planning failed".to_string()),
            ));
        }

        self.result
            .and_then(|r| r.routes.into_iter().next())
            .ok_or(DirectionsError::NoRoutes)
    }
}
