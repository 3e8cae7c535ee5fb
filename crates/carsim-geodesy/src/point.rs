//! Position and heading types

use serde::{Deserialize, Serialize};

/// Normalize an angle in degrees into `[0, 360)`.
///
/// Non-finite input yields 0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round a tiny negative value up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalize a longitude in degrees into `(-180, 180]`.
pub fn normalize_longitude(degrees: f64) -> f64 {
    let wrapped = normalize_degrees(degrees);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Published location triple `[lat, lng, altitude]` with zero altitude.
    pub fn to_location(self) -> [f64; 3] {
        [self.lat, self.lng, 0.0]
    }
}

/// Compass bearing in degrees, clockwise from north, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Heading(f64);

impl Heading {
    /// Create a heading, normalizing into `[0, 360)`.
    pub fn new(degrees: f64) -> Self {
        Self(normalize_degrees(degrees))
    }

    /// Heading in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Heading in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Heading truncated to whole degrees, as published.
    #[inline]
    pub fn whole_degrees(self) -> i32 {
        self.0 as i32
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<Heading> for f64 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}
