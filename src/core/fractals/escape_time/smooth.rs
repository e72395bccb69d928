/// `|z|` is raised to this floor before the log-log step so `log2(|z|)` stays
/// positive. Magnitudes above it pass through unchanged.
pub const SMOOTH_MAGNITUDE_FLOOR: f64 = 1.0 + 1e-6;

/// Smallest value reported for an escaped point; `0` is reserved for the
/// interior.
pub const MIN_ESCAPE_VALUE: f64 = 1e-6;

/// Interior value: the point did not escape within the iteration limit.
pub const INTERIOR_VALUE: f64 = 0.0;

/// Continuous escape value `n + 1 - log2(log2(|z|))` for a point that escaped
/// after `n` updates with final magnitude `magnitude`.
#[must_use]
pub fn smooth_escape_value(iteration: u32, magnitude: f64) -> f64 {
    let magnitude = if magnitude.is_nan() {
        SMOOTH_MAGNITUDE_FLOOR
    } else {
        magnitude.max(SMOOTH_MAGNITUDE_FLOOR)
    };

    let value = f64::from(iteration) + 1.0 - magnitude.log2().log2();

    if value.is_finite() {
        value.max(MIN_ESCAPE_VALUE)
    } else {
        MIN_ESCAPE_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unclamped(iteration: u32, magnitude: f64) -> f64 {
        f64::from(iteration) + 1.0 - magnitude.log2().log2()
    }

    #[test]
    fn test_value_at_magnitude_two_is_iteration_plus_one() {
        assert_eq!(smooth_escape_value(1, 2.0), 2.0);
        assert_eq!(smooth_escape_value(9, 2.0), 10.0);
    }

    #[test]
    fn test_magnitudes_between_one_and_two_keep_their_fraction() {
        let value = smooth_escape_value(3, 1.8);

        assert_eq!(value, unclamped(3, 1.8));
        assert!((value - 4.238).abs() < 1e-3);

        for magnitude in [1.01, 1.2, 1.5, 1.999] {
            assert_eq!(smooth_escape_value(5, magnitude), unclamped(5, magnitude));
        }
    }

    #[test]
    fn test_clamp_is_continuous_at_floor() {
        let below = smooth_escape_value(5, SMOOTH_MAGNITUDE_FLOOR - 1e-12);
        let at = smooth_escape_value(5, SMOOTH_MAGNITUDE_FLOOR);
        let above = smooth_escape_value(5, SMOOTH_MAGNITUDE_FLOOR + 1e-12);

        assert_eq!(below, at);
        assert!((above - at).abs() < 1e-3);
    }

    #[test]
    fn test_magnitudes_at_or_below_one_never_produce_nan() {
        let floor_value = smooth_escape_value(3, SMOOTH_MAGNITUDE_FLOOR);

        assert!(floor_value.is_finite());
        for magnitude in [0.0, 0.5, 1.0] {
            assert_eq!(smooth_escape_value(3, magnitude), floor_value);
        }
        assert_eq!(smooth_escape_value(3, f64::NAN), floor_value);
    }

    #[test]
    fn test_escaped_value_stays_positive() {
        assert_eq!(smooth_escape_value(1, 1e300), MIN_ESCAPE_VALUE);
        assert_eq!(smooth_escape_value(1, f64::INFINITY), MIN_ESCAPE_VALUE);
        assert!(smooth_escape_value(1, 2.8) > INTERIOR_VALUE);
    }

    #[test]
    fn test_larger_magnitude_gives_smaller_value() {
        assert!(smooth_escape_value(4, 3.0) > smooth_escape_value(4, 30.0));
    }
}
