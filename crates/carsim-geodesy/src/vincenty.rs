//! Direct geodesic problem on an ellipsoid.
//!
//! Given a start point, an initial bearing and a distance, find the end
//! point. The angular distance along the geodesic is found by fixed-point
//! iteration; the iteration count is capped so degenerate inputs surface as
//! [`GeodesyError::NoConvergence`] instead of looping.

use core::f64::consts::PI;

use carsim_errors::GeodesyError;

use crate::point::{GeoPoint, Heading, normalize_longitude};

/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in metres.
    pub a: f64,
    /// Semi-minor axis in metres.
    pub b: f64,
    /// Flattening.
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84.
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        b: 6_356_752.3142,
        f: 1.0 / 298.257_223_563,
    };
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Direct geodesic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VincentyDirect {
    ellipsoid: Ellipsoid,
    tolerance: f64,
    max_iterations: u32,
}

impl VincentyDirect {
    /// Default convergence threshold on successive angular distances.
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;

    /// Default iteration cap.
    pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

    /// Solver on the given ellipsoid with default tolerance and cap.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Override the convergence threshold.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Walk `distance` metres from `from` along the geodesic starting at
    /// `heading`.
    ///
    /// # Errors
    ///
    /// [`GeodesyError::NonFiniteInput`] when any input is NaN or infinite,
    /// [`GeodesyError::NoConvergence`] when the iteration does not settle
    /// within the cap or produces a non-finite value.
    pub fn solve(&self, from: GeoPoint, heading: Heading, distance: f64) -> Result<GeoPoint, GeodesyError> {
        check_finite("lat", from.lat)?;
        check_finite("lng", from.lng)?;
        check_finite("heading", heading.degrees())?;
        check_finite("distance", distance)?;

        let Ellipsoid { a, b, f } = self.ellipsoid;

        let alpha1 = heading.radians();
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        let tan_u1 = (1.0 - f) * from.lat.to_radians().tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let base_sigma = distance / (b * big_a);
        let mut sigma = base_sigma;
        let mut sigma_prev = 2.0 * PI;
        let mut cos_2sigma_m = 0.0;
        let mut sin_sigma = 0.0;
        let mut cos_sigma = 0.0;
        let mut iterations = 0u32;

        while (sigma - sigma_prev).abs() > self.tolerance {
            if iterations >= self.max_iterations || !sigma.is_finite() {
                return Err(GeodesyError::NoConvergence { iterations });
            }
            iterations += 1;
            cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            sin_sigma = sigma.sin();
            cos_sigma = sigma.cos();
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            sigma_prev = sigma;
            sigma = base_sigma + delta_sigma;
        }
        // NaN compares false above and would fall out of the loop.
        if !sigma.is_finite() {
            return Err(GeodesyError::NoConvergence { iterations });
        }

        let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
        let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let dest = GeoPoint::new(lat2.to_degrees(), normalize_longitude(from.lng + l.to_degrees()));
        if dest.lat.is_finite() && dest.lng.is_finite() {
            Ok(dest)
        } else {
            Err(GeodesyError::NoConvergence { iterations })
        }
    }
}

impl Default for VincentyDirect {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), GeodesyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeodesyError::NonFiniteInput { field })
    }
}

/// Direct geodesic solution on WGS84 with the default iteration cap.
///
/// # Errors
///
/// See [`VincentyDirect::solve`].
pub fn destination(from: GeoPoint, heading: Heading, distance: f64) -> Result<GeoPoint, GeodesyError> {
    VincentyDirect::default().solve(from, heading, distance)
}
