//! Flat-earth bearing between nearby points.

use crate::point::{GeoPoint, Heading};

/// Bearing from `from` to `to` treating latitude and longitude as planar
/// coordinates: `90 - atan2(dlat, dlng)`.
///
/// Good enough to steer between waypoints a few hundred metres apart.
pub fn planar_bearing(from: GeoPoint, to: GeoPoint) -> Heading {
    let theta = (to.lat - from.lat).atan2(to.lng - from.lng).to_degrees();
    Heading::new(90.0 - theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_bearings() {
        let origin = GeoPoint::new(35.0, 139.0);
        let cases = [
            (GeoPoint::new(35.1, 139.0), 0.0),
            (GeoPoint::new(35.0, 139.1), 90.0),
            (GeoPoint::new(34.9, 139.0), 180.0),
            (GeoPoint::new(35.0, 138.9), 270.0),
        ];
        for (to, want) in cases {
            assert!((planar_bearing(origin, to).degrees() - want).abs() < 1e-9, "to {to:?}");
        }
    }

    #[test]
    fn test_diagonal() {
        let origin = GeoPoint::new(0.0, 0.0);
        let h = planar_bearing(origin, GeoPoint::new(-1.0, -1.0));
        assert!((h.degrees() - 225.0).abs() < 1e-9);
    }
}
