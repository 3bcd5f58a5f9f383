//! Michalewicz test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Steepness of the valleys; larger values make the search harder.
const M: i32 = 10;

/// Michalewicz function - N-dimensional multimodal with steep ridges
/// Global minimum depends on dimension (e.g., -1.8013 for 2D, -4.6877 for 5D)
/// Bounds: x_i in [0, π]
pub fn michalewicz(x: &Array1<f64>) -> f64 {
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| {
            xi.sin()
                * ((i as f64 + 1.0) * xi.powi(2) / PI)
                    .sin()
                    .powi(2 * M)
        })
        .sum::<f64>()
}
