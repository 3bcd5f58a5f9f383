//! Affine rescaling between the caller's input domain and a canonical domain.

use ndarray::{ArrayBase, Data, Dimension};

/// Implements linear scaling from `[input_lower, input_upper]` to
/// `[canonical_lower, canonical_upper]`.
///
/// Values outside the input domain are extrapolated, not clamped. A
/// degenerate input domain (`input_lower == input_upper`) yields `inf`/`NaN`.
#[inline]
pub fn rescale(
    x: f64,
    input_lower: f64,
    input_upper: f64,
    canonical_lower: f64,
    canonical_upper: f64,
) -> f64 {
    // identity bounds return x bit for bit; a zero-width domain still divides by zero
    if input_lower != input_upper
        && input_lower == canonical_lower
        && input_upper == canonical_upper
    {
        return x;
    }
    canonical_lower
        + (x - input_lower) * (canonical_upper - canonical_lower) / (input_upper - input_lower)
}

/// Elementwise [`rescale`] over an array of any shape.
pub fn rescale_array<S, D>(
    x: &ArrayBase<S, D>,
    input_lower: f64,
    input_upper: f64,
    canonical_lower: f64,
    canonical_upper: f64,
) -> ndarray::Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| rescale(v, input_lower, input_upper, canonical_lower, canonical_upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_rescale_endpoints_and_midpoint() {
        assert_eq!(rescale(0.0, 0.0, 1.0, -5.0, 10.0), -5.0);
        assert_eq!(rescale(1.0, 0.0, 1.0, -5.0, 10.0), 10.0);
        assert_eq!(rescale(0.5, 0.0, 1.0, -5.0, 10.0), 2.5);
    }

    #[test]
    fn test_rescale_identity() {
        for &x in &[-7.25, -5.12, 0.0, 1.0e-9, 3.3, 5.12, 42.0] {
            assert_eq!(rescale(x, -5.12, 5.12, -5.12, 5.12), x);
        }
    }

    #[test]
    fn test_rescale_round_trip() {
        let (a, b) = (-3.0, 7.5);
        let (lo, hi) = (0.0, std::f64::consts::PI);
        for k in -5..=15 {
            let x = k as f64 * 0.7;
            let there = rescale(x, a, b, lo, hi);
            let back = rescale(there, lo, hi, a, b);
            assert_relative_eq!(back, x, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_rescale_extrapolates() {
        assert_eq!(rescale(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(rescale(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn test_rescale_degenerate_domain_is_not_finite() {
        assert!(!rescale(0.5, 1.0, 1.0, 0.0, 1.0).is_finite());
        assert!(rescale(1.0, 1.0, 1.0, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_rescale_degenerate_identity_is_not_short_circuited() {
        assert!(!rescale(0.3, 1.0, 1.0, 1.0, 1.0).is_finite());
        assert!(rescale(1.0, 1.0, 1.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_rescale_array_keeps_shape() {
        let x = array![[0.0, 0.25], [0.5, 1.0], [0.75, 0.0]];
        let y = rescale_array(&x, 0.0, 1.0, -5.0, 5.0);
        assert_eq!(y.shape(), x.shape());
        assert_eq!(y, array![[-5.0, -2.5], [0.0, 5.0], [2.5, -5.0]]);
    }
}
