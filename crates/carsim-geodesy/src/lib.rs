//! Dead-reckoning geometry for CarSim
//!
//! All functions here are pure: they take a position, a heading and a
//! distance and return a new heading or position.
//!
//! - [`azimuth_update`]: heading change from driving `distance` metres around
//!   the turning circle implied by a steering angle and a wheelbase
//! - [`VincentyDirect`] / [`destination`]: direct geodesic problem on the
//!   WGS84 ellipsoid, with a bounded iteration count
//! - [`great_circle_destination`]: spherical approximation used as a
//!   fallback by [`destination_or_fallback`]
//! - [`planar_bearing`]: flat bearing between two nearby points, used by the
//!   route follower
//!
//! # Example
//!
//! ```
//! use carsim_geodesy::prelude::*;
//!
//! let start = GeoPoint::new(35.0, 139.0);
//! let east = destination(start, Heading::new(90.0), 1000.0)?;
//! assert!(east.lng > start.lng);
//! assert!((east.lat - start.lat).abs() < 0.001);
//! # Ok::<(), carsim_errors::GeodesyError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod azimuth;
pub mod bearing;
pub mod great_circle;
pub mod point;
pub mod prelude;
pub mod vincenty;

pub use azimuth::{DEFAULT_WHEELBASE_M, azimuth_update};
pub use bearing::planar_bearing;
pub use great_circle::{MEAN_EARTH_RADIUS_M, destination_or_fallback, great_circle_destination};
pub use point::{GeoPoint, Heading, normalize_degrees, normalize_longitude};
pub use vincenty::{Ellipsoid, VincentyDirect, destination};
