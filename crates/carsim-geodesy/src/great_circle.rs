//! Spherical fallback for the direct problem.

use carsim_errors::GeodesyError;
use tracing::warn;

use crate::point::{GeoPoint, Heading, normalize_longitude};
use crate::vincenty::destination;

/// Mean earth radius (IUGG), in metres.
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Destination on a sphere of radius [`MEAN_EARTH_RADIUS_M`].
pub fn great_circle_destination(from: GeoPoint, heading: Heading, distance: f64) -> GeoPoint {
    let delta = distance / MEAN_EARTH_RADIUS_M;
    let theta = heading.radians();
    let phi1 = from.lat.to_radians();
    let lambda1 = from.lng.to_radians();

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
    let y = theta.sin() * delta.sin() * phi1.cos();
    let x = delta.cos() - phi1.sin() * sin_phi2;
    let lambda2 = lambda1 + y.atan2(x);

    GeoPoint::new(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Ellipsoidal destination, degrading instead of failing.
///
/// Non-convergence falls back to [`great_circle_destination`]; non-finite
/// input leaves the position where it was. Both cases are logged.
pub fn destination_or_fallback(from: GeoPoint, heading: Heading, distance: f64) -> GeoPoint {
    match destination(from, heading, distance) {
        Ok(point) => point,
        Err(err @ GeodesyError::NoConvergence { .. }) => {
            warn!(error = %err, lat = from.lat, lng = from.lng, distance, "using great-circle fallback");
            great_circle_destination(from, heading, distance)
        }
        Err(err @ GeodesyError::NonFiniteInput { .. }) => {
            warn!(error = %err, "position left unchanged");
            from
        }
    }
}
