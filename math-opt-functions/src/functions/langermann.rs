//! Langermann test function

use ndarray::Array1;
use std::f64::consts::PI;

const A: [[f64; 2]; 5] = [[3.0, 5.0], [5.0, 2.0], [2.0, 1.0], [1.0, 4.0], [7.0, 9.0]];
const C: [f64; 5] = [1.0, 2.0, 5.0, 2.0, 3.0];

/// Langermann function - complex multimodal with unevenly spaced wells
/// Global minimum: f(x) ≈ -5.1621 at x ≈ (2.00299, 1.00610)
/// Bounds: x_i in [0, 10]
///
/// The parameter table is two-dimensional; only the first two coordinates
/// contribute and a 1-D input uses the first column alone.
pub fn langermann(x: &Array1<f64>) -> f64 {
    let dims = x.len().min(2);
    -A.iter()
        .zip(C.iter())
        .map(|(a, &c)| {
            let r: f64 = (0..dims).map(|j| (x[j] - a[j]).powi(2)).sum();
            c * (-r / PI).exp() * (PI * r).cos()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_langermann_global_minimum() {
        let x = Array1::from(vec![2.00299219, 1.006096]);
        assert_abs_diff_eq!(langermann(&x), -5.1621, epsilon = 1e-3);
    }

    #[test]
    fn test_langermann_at_parameter_point() {
        let x = Array1::from(vec![3.0, 5.0]);
        assert_abs_diff_eq!(langermann(&x), -0.538655, epsilon = 1e-5);
    }

    #[test]
    fn test_langermann_finite_over_domain() {
        for i in 0..=10 {
            for j in 0..=10 {
                let x = Array1::from(vec![i as f64, j as f64]);
                assert!(langermann(&x).is_finite());
            }
        }
    }

    #[test]
    fn test_langermann_ignores_extra_coordinates() {
        let x2 = Array1::from(vec![2.5, 4.0]);
        let x4 = Array1::from(vec![2.5, 4.0, 9.0, -3.0]);
        assert_eq!(langermann(&x2), langermann(&x4));
    }
}
