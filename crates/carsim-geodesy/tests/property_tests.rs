//! Property-Based Tests for dead-reckoning geometry

use carsim_geodesy::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn heading_always_normalized(degrees in -1.0e6f64..1.0e6) {
        let h = Heading::new(degrees).degrees();
        prop_assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn azimuth_stays_normalized(
        heading in 0.0f64..360.0,
        steering in -45.0f64..45.0,
        distance in -5000.0f64..5000.0
    ) {
        let h = azimuth_update(Heading::new(heading), steering, distance, DEFAULT_WHEELBASE_M);
        prop_assert!((0.0..360.0).contains(&h.degrees()));
    }

    #[test]
    fn whole_laps_do_not_change_heading(
        heading in 0.0f64..360.0,
        steering in 1.0f64..45.0,
        laps in 1u32..5
    ) {
        let radius = DEFAULT_WHEELBASE_M / steering.to_radians().sin();
        let lap = 2.0 * core::f64::consts::PI * radius;
        let h = azimuth_update(Heading::new(heading), steering, lap * f64::from(laps), DEFAULT_WHEELBASE_M);
        let diff = (h.degrees() - heading).abs();
        prop_assert!(diff < 1e-6 || (360.0 - diff) < 1e-6);
    }

    #[test]
    fn eastward_moves_east(
        lat in -60.0f64..60.0,
        lng in -170.0f64..170.0,
        distance in 1.0f64..10_000.0
    ) {
        let start = GeoPoint::new(lat, lng);
        let dest = destination(start, Heading::new(90.0), distance)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(dest.lng > start.lng);
        prop_assert!(dest.is_valid());
    }

    #[test]
    fn destination_converges_for_local_hops(
        lat in -80.0f64..80.0,
        lng in -180.0f64..180.0,
        heading in 0.0f64..360.0,
        distance in -2000.0f64..2000.0
    ) {
        let start = GeoPoint::new(lat, lng);
        let dest = destination(start, Heading::new(heading), distance)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(dest.is_valid());
        // 2 km is well under 0.05 degrees of latitude.
        prop_assert!((dest.lat - lat).abs() < 0.05);
    }
}
