use crate::constants::{FULL_TURN_DEGREES, HALF_TURN_DEGREES};
use crate::traits::Real;

/// Converts `degrees` to radians as `degrees * (π / 180)`.
pub fn to_radians<T: Real>(degrees: T) -> T {
    let half_turn: T = nalgebra::convert(HALF_TURN_DEGREES);
    degrees * (T::pi() / half_turn)
}

/// Converts `radians` to degrees as `radians * (180 / π)`.
pub fn to_degrees<T: Real>(radians: T) -> T {
    let half_turn: T = nalgebra::convert(HALF_TURN_DEGREES);
    radians * (half_turn / T::pi())
}

/// Reduces an angle in degrees into `[0, 360)`.
pub fn wrap_degrees<T: Real>(degrees: T) -> T {
    let full_turn: T = nalgebra::convert(FULL_TURN_DEGREES);
    let zero = nalgebra::zero::<T>();

    let wrapped = degrees % full_turn;
    if wrapped >= zero {
        return wrapped;
    }
    // tiny negative remainders round up to a full turn
    let shifted = wrapped + full_turn;
    if shifted >= full_turn {
        zero
    } else {
        shifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0_f64) - PI).abs() < 1e-15);
        assert_eq!(to_radians(90.0_f64), 90.0 * (PI / 180.0));
        assert_eq!(to_radians(0.0_f64), 0.0);
    }

    #[test]
    fn test_to_degrees() {
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((to_degrees(to_radians(33.0_f64)) - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_degrees_positive() {
        assert_eq!(wrap_degrees(0.0_f64), 0.0);
        assert_eq!(wrap_degrees(90.0_f64), 90.0);
        assert_eq!(wrap_degrees(360.0_f64), 0.0);
        assert_eq!(wrap_degrees(450.0_f64), 90.0);
        assert_eq!(wrap_degrees(720.0_f64), 0.0);
    }

    #[test]
    fn test_wrap_degrees_negative() {
        assert_eq!(wrap_degrees(-90.0_f64), 270.0);
        assert_eq!(wrap_degrees(-360.0_f64), 0.0);
        assert_eq!(wrap_degrees(-450.0_f64), 270.0);
    }

    #[test]
    fn test_wrap_degrees_tiny_negative_stays_in_range() {
        let wrapped = wrap_degrees(-1e-15_f64);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn test_wrap_degrees_f32() {
        assert_eq!(wrap_degrees(-30.0_f32), 330.0);
    }
}
