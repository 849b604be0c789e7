//! Absolute-tolerance comparisons for accounting figures.
//!
//! Chain accounting rounds at every hop, so scenario assertions compare
//! within a few base units (or one whole token) rather than exactly.

/// Whether `a` and `b` agree within `abs_tol` base units.
pub fn approx_eq(a: i128, b: i128, abs_tol: i128) -> bool {
    (a - b).abs() <= abs_tol
}

/// Panics unless the two figures agree within `abs_tol` base units.
#[track_caller]
pub fn assert_approx_eq(a: i128, b: i128, abs_tol: i128) {
    if !approx_eq(a, b, abs_tol) {
        panic!(
            "expected {} and {} to agree within {} base units (off by {})",
            a,
            b,
            abs_tol,
            (a - b).abs()
        );
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_approx_eq_bounds() {
        assert!(approx_eq(100, 100, 0));
        assert!(approx_eq(100, 102, 2));
        assert!(approx_eq(102, 100, 2));
        assert!(!approx_eq(100, 103, 2));
        assert!(approx_eq(-5, 5, 10));
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_panics_outside_tolerance() {
        assert_approx_eq(0, 3, 2);
    }
}
