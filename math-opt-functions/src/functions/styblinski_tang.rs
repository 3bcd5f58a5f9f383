//! Styblinski-Tang test function

use ndarray::Array1;

/// Per-coordinate minimiser of the Styblinski-Tang function.
pub const STYBLINSKI_TANG_ARGMIN: f64 = -2.903534;

/// Per-coordinate minimum value; the d-dimensional minimum is `d` times this.
pub const STYBLINSKI_TANG_MIN_PER_DIM: f64 = -39.16599;

/// Styblinski-Tang function - separable, multimodal
/// Global minimum: f(x) = -39.16599·d at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    0.5 * x
        .iter()
        .map(|&xi| {
            let sq = xi * xi;
            sq * sq - 16.0 * sq + 5.0 * xi
        })
        .sum::<f64>()
}
