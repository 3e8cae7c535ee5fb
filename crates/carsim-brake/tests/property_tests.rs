//! Property-Based Tests for the brake model

use carsim_brake::*;

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pressure_zero_at_or_below_lag(raw in 0i32..=LAG_BRAKE) {
            prop_assert_eq!(calc_pressure(raw), 0);
        }

        #[test]
        fn pressure_within_range(raw in 0i32..=MAX_BRAKE) {
            let p = calc_pressure(raw);
            prop_assert!((0..=100).contains(&p));
        }

        #[test]
        fn pressure_monotonic(a in 0i32..=MAX_BRAKE, b in 0i32..=MAX_BRAKE) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calc_pressure(lo) <= calc_pressure(hi));
        }

        #[test]
        fn braking_never_increases_speed(value in 0i32..=65535, source in 0.0f64..300.0) {
            let mut brake = Brake::new(4);
            for _ in 0..4 {
                brake.chg_brake(value);
            }
            let out = brake.speed(source);
            prop_assert!(out >= 0.0);
            prop_assert!(out <= source);
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    fn prop_on_brake_matches_lag(value: u16) -> TestResult {
        let value = i32::from(value);
        let mut brake = Brake::new(1);
        brake.chg_brake(value);
        TestResult::from_bool(brake.is_on_brake() == (value > LAG_BRAKE))
    }

    #[test]
    fn quickcheck_on_brake_matches_lag() {
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_on_brake_matches_lag as fn(u16) -> TestResult);
    }
}
