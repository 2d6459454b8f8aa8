//! Delta-compressed polyline decoding.
//!
//! The directions service returns a route as a flat array of numbers
//! alternating latitude and longitude. The first pair is an absolute
//! coordinate; every following pair is an offset from the previous point in
//! units of [`POLYLINE_SCALE`] degrees.
//!
//! ```text
//! [31.2, 121.4, 100, -50, 20, 0]
//!  └ absolute ┘ └ +0.001, -0.0005 ┘ └ +0.0002, 0 ┘
//! ```

use crate::GeoPosition;

/// Degrees per delta unit.
pub const POLYLINE_SCALE: f64 = 0.00001;

/// Decode a polyline into absolute positions.
///
/// Input shorter than one pair, or with a dangling component, decodes to an
/// empty vector.
///
/// # Example
/// ```
/// use catmap_geo::{decode_polyline, GeoPosition};
///
/// let points = decode_polyline(&[31.2, 121.4, 100.0, -50.0]);
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0], GeoPosition::new(31.2, 121.4));
/// assert!((points[1].latitude - 31.201).abs() < 1e-9);
/// ```
pub fn decode_polyline(polyline: &[f64]) -> Vec<GeoPosition> {
    if polyline.len() < 2 || polyline.len() % 2 != 0 {
        return Vec::new();
    }

    let mut lat = polyline[0];
    let mut lng = polyline[1];

    let mut points = Vec::with_capacity(polyline.len() / 2);
    points.push(GeoPosition::new(lat, lng));

    for delta in polyline[2..].chunks_exact(2) {
        lat += delta[0] * POLYLINE_SCALE;
        lng += delta[1] * POLYLINE_SCALE;
        points.push(GeoPosition::new(lat, lng));
    }

    points
}

/// Encode positions in the same format, with deltas rounded to whole units.
///
/// Deltas are taken against the running decoded coordinate, so rounding
/// error does not accumulate along the route.
pub fn encode_polyline(points: &[GeoPosition]) -> Vec<f64> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut encoded = Vec::with_capacity(points.len() * 2);
    encoded.push(first.latitude);
    encoded.push(first.longitude);

    let (mut lat, mut lng) = (first.latitude, first.longitude);
    for point in rest {
        let d_lat = ((point.latitude - lat) / POLYLINE_SCALE).round();
        let d_lng = ((point.longitude - lng) / POLYLINE_SCALE).round();
        lat += d_lat * POLYLINE_SCALE;
        lng += d_lng * POLYLINE_SCALE;
        encoded.push(d_lat);
        encoded.push(d_lng);
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: &GeoPosition, b: &GeoPosition, tolerance: f64) {
        assert!(
            (a.latitude - b.latitude).abs() <= tolerance
                && (a.longitude - b.longitude).abs() <= tolerance,
            "{a:?} vs {b:?}"
        );
    }

    #[test]
    fn test_single_absolute_point() {
        assert_eq!(decode_polyline(&[31.2, 121.4]), vec![GeoPosition::new(31.2, 121.4)]);
    }

    #[test]
    fn test_deltas_accumulate() {
        let points = decode_polyline(&[31.2, 121.4, 100.0, -50.0, 20.0, 0.0]);
        assert_eq!(points.len(), 3);
        assert_close(&points[1], &GeoPosition::new(31.201, 121.3995), 1e-9);
        assert_close(&points[2], &GeoPosition::new(31.2012, 121.3995), 1e-9);
    }

    #[test]
    fn test_short_or_odd_input_is_empty() {
        assert!(decode_polyline(&[]).is_empty());
        assert!(decode_polyline(&[31.2]).is_empty());
        assert!(decode_polyline(&[31.2, 121.4, 100.0]).is_empty());
    }

    #[test]
    fn test_decodes_unrounded_deltas() {
        let p0 = GeoPosition::new(31.2079, 121.4737);
        let p1 = GeoPosition::new(31.2091, 121.4752);
        let p2 = GeoPosition::new(31.2104, 121.4749);

        let raw = [
            p0.latitude,
            p0.longitude,
            (p1.latitude - p0.latitude) / POLYLINE_SCALE,
            (p1.longitude - p0.longitude) / POLYLINE_SCALE,
            (p2.latitude - p1.latitude) / POLYLINE_SCALE,
            (p2.longitude - p1.longitude) / POLYLINE_SCALE,
        ];

        let decoded = decode_polyline(&raw);
        assert_eq!(decoded.len(), 3);
        for (got, want) in decoded.iter().zip([p0, p1, p2].iter()) {
            assert_close(got, want, 1e-5);
        }
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_polyline(&[]).is_empty());
    }

    #[test]
    fn test_encode_uses_whole_units() {
        let encoded = encode_polyline(&[GeoPosition::new(31.2, 121.4), GeoPosition::new(31.201, 121.3995)]);
        assert_eq!(encoded, vec![31.2, 121.4, 100.0, -50.0]);
    }

    proptest! {
        #[test]
        fn prop_encode_decode_within_half_unit(
            start_lat in -80.0f64..80.0,
            start_lng in -170.0f64..170.0,
            steps in prop::collection::vec((-0.01f64..0.01, -0.01f64..0.01), 0..50),
        ) {
            let mut points = vec![GeoPosition::new(start_lat, start_lng)];
            for (d_lat, d_lng) in steps {
                let last = points[points.len() - 1];
                points.push(GeoPosition::new(last.latitude + d_lat, last.longitude + d_lng));
            }

            let decoded = decode_polyline(&encode_polyline(&points));
            prop_assert_eq!(decoded.len(), points.len());
            for (got, want) in decoded.iter().zip(points.iter()) {
                prop_assert!((got.latitude - want.latitude).abs() <= 1e-5);
                prop_assert!((got.longitude - want.longitude).abs() <= 1e-5);
            }
        }
    }
}
