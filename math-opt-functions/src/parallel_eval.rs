use crate::registry::TestFunction;
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;

/// Parallel evaluation configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Smallest batch that is dispatched to the thread pool
    pub min_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_batch: 64,
        }
    }
}

impl ParallelConfig {
    /// Strictly sequential evaluation.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Evaluate every column of a `d x N` batch
///
/// # Arguments
/// * `batch` - 2D array where each column is one candidate vector
/// * `rule` - Evaluation rule applied to each column
/// * `config` - Parallel configuration
///
/// # Returns
/// Array of length N, one value per column
pub fn evaluate_columns(
    rule: TestFunction,
    batch: &Array2<f64>,
    config: &ParallelConfig,
) -> Array1<f64> {
    let n = batch.ncols();

    if !config.enabled || n < config.min_batch.max(2) {
        return batch
            .axis_iter(Axis(1))
            .map(|col| rule(&col.to_owned()))
            .collect();
    }

    log::debug!("evaluating {} columns on the rayon pool", n);
    let results = (0..n)
        .into_par_iter()
        .map(|j| rule(&batch.column(j).to_owned()))
        .collect::<Vec<f64>>();

    Array1::from_vec(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{rastrigin, zakharov};

    fn grid(d: usize, n: usize) -> Array2<f64> {
        Array2::from_shape_fn((d, n), |(i, j)| ((i * 7 + j * 3) % 11) as f64 * 0.37 - 2.0)
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let batch = grid(5, 300);
        let seq = evaluate_columns(rastrigin, &batch, &ParallelConfig::sequential());
        let par = evaluate_columns(rastrigin, &batch, &ParallelConfig::default());
        assert_eq!(seq, par);
    }

    #[test]
    fn test_columns_match_single_evaluations() {
        let batch = grid(3, 10);
        let values = evaluate_columns(zakharov, &batch, &ParallelConfig::default());
        assert_eq!(values.len(), 10);
        for j in 0..10 {
            assert_eq!(values[j], zakharov(&batch.column(j).to_owned()));
        }
    }

    #[test]
    fn test_empty_batch() {
        let batch = Array2::<f64>::zeros((4, 0));
        let values = evaluate_columns(zakharov, &batch, &ParallelConfig::default());
        assert!(values.is_empty());
    }
}
