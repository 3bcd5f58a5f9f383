//! Zakharov test function

use ndarray::Array1;

/// Zakharov function - unimodal quadratic function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: &Array1<f64>) -> f64 {
    let (squares, weighted) = x
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sq, w), (i, &xi)| {
            (sq + xi * xi, w + 0.5 * (i + 1) as f64 * xi)
        });
    let w2 = weighted * weighted;
    squares + w2 + w2 * w2
}
