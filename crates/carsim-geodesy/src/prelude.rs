//! Prelude for the geodesy crate.

pub use crate::azimuth::{DEFAULT_WHEELBASE_M, azimuth_update};
pub use crate::bearing::planar_bearing;
pub use crate::great_circle::{destination_or_fallback, great_circle_destination};
pub use crate::point::{GeoPoint, Heading};
pub use crate::vincenty::{Ellipsoid, VincentyDirect, destination};
