//! Custom assertion macros
//!
//! Floating point helpers for checking animated values.

/// Assert that two values are approximately equal (for floating point)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        let (left, right): (f32, f32) = ($left, $right);
        assert!(
            (left - right).abs() < 1e-4,
            "Values are not approximately equal: {} vs {}",
            left,
            right
        );
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let (left, right): (f32, f32) = ($left, $right);
        let diff = (left - right).abs();
        assert!(
            diff < $epsilon,
            "Values are not approximately equal: {} vs {} (diff: {})",
            left,
            right,
            diff
        );
    };
}

/// Assert that a value is within a range
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} is not in range [{}, {}]",
            $value,
            $min,
            $max
        );
    };
}
