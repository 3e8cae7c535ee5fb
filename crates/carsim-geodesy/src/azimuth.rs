//! Heading change from steering.

use core::f64::consts::PI;

use crate::point::Heading;

/// Default distance between the axles, in metres.
pub const DEFAULT_WHEELBASE_M: f64 = 3.0;

/// Advance `heading` after driving `distance` metres with the front wheels
/// turned `steering_deg` degrees.
///
/// The car is modelled as moving around a circle of radius
/// `|wheelbase / sin(steering)|`. Whole laps are discarded before the
/// remaining arc is converted to an angle. Positive steering turns
/// clockwise; a negative distance (reversing) turns the other way.
///
/// Zero steering or zero distance leaves the heading unchanged.
pub fn azimuth_update(heading: Heading, steering_deg: f64, distance: f64, wheelbase: f64) -> Heading {
    let steering = steering_deg.to_radians();
    if steering.sin().abs() < f64::EPSILON || distance.abs() < f64::EPSILON || !distance.is_finite() {
        return heading;
    }
    let radius = (wheelbase / steering.sin()).abs();
    let circumference = 2.0 * PI * radius;
    let arc = distance % circumference;
    let theta = 180.0 * arc / (PI * radius);
    if steering_deg < 0.0 {
        Heading::new(heading.degrees() - theta)
    } else {
        Heading::new(heading.degrees() + theta)
    }
}
