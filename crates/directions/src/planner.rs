//! Walking route planning with straight-line fallback
//!
//! [`RoutePlanner::get_walking_route`] always returns something the map can
//! draw. When the service fails in any way (network, error status, no
//! routes, unusable polyline) the route degrades to `[from, to]`.

use crate::client::DirectionsService;
use crate::error::{DirectionsError, DirectionsResult};
use catmap_geo::{decode_polyline, GeoPosition};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// A route ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    /// Points from origin to destination
    pub points: Vec<GeoPosition>,
    /// True when `points` is the straight-line fallback
    pub degraded: bool,
    /// Route length in meters as reported by the service
    pub distance_m: Option<f64>,
    /// Walking time in minutes as reported by the service
    pub duration_min: Option<f64>,
}

impl PlannedRoute {
    /// Straight line from `from` to `to`.
    #[must_use]
    pub fn straight_line(from: GeoPosition, to: GeoPosition) -> Self {
        Self {
            points: vec![from, to],
            degraded: true,
            distance_m: None,
            duration_min: None,
        }
    }
}

/// Plans walking routes through a [`DirectionsService`].
#[derive(Debug, Clone)]
pub struct RoutePlanner<S> {
    service: S,
}

impl<S: DirectionsService> RoutePlanner<S> {
    /// Create a planner over `service`.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Walking route from `from` to `to`, or `[from, to]` if none can be had.
    pub async fn get_walking_route(&self, from: GeoPosition, to: GeoPosition) -> Vec<GeoPosition> {
        self.plan(from, to).await.points
    }

    /// Like [`get_walking_route`](Self::get_walking_route), with service metadata.
    #[instrument(skip_all, fields(%from, %to))]
    pub async fn plan(&self, from: GeoPosition, to: GeoPosition) -> PlannedRoute {
        match self.fetch(from, to).await {
            Ok(route) => route,
            Err(err) => {
                warn!(error = %err, "Walking route unavailable, using straight line");
                PlannedRoute::straight_line(from, to)
            }
        }
    }

    /// The decoded service route, or why it could not be obtained.
    pub async fn try_walking_route(
        &self,
        from: GeoPosition,
        to: GeoPosition,
    ) -> DirectionsResult<Vec<GeoPosition>> {
        Ok(self.fetch(from, to).await?.points)
    }

    async fn fetch(&self, from: GeoPosition, to: GeoPosition) -> DirectionsResult<PlannedRoute> {
        let route = self.service.walking(from, to).await?.into_first_route()?;

        let points = decode_polyline(&route.polyline);
        debug!(
            raw_len = route.polyline.len(),
            points = points.len(),
            "Decoded route polyline"
        );

        if points.is_empty() {
            return Err(DirectionsError::EmptyPolyline);
        }

        Ok(PlannedRoute {
            points,
            degraded: false,
            distance_m: route.distance,
            duration_min: route.duration,
        })
    }
}
