//! Error types for function lookup, configuration and evaluation.

use thiserror::Error;

/// Errors raised by the registry and the evaluator.
#[derive(Error, Debug)]
pub enum OptFunctionError {
    /// The requested name is not a registered test function.
    #[error("unknown function '{name}', valid names are: {}", .valid.join(", "))]
    UnknownFunction {
        /// The name that was asked for
        name: String,
        /// Every registered name
        valid: Vec<String>,
    },

    /// Noise standard deviation is negative, infinite or NaN.
    #[error("invalid noise standard deviation: {stddev} (must be finite and >= 0)")]
    InvalidNoiseStddev {
        /// The rejected value
        stddev: f64,
    },

    /// Evaluation input has no leading dimensionality axis.
    #[error("input must have at least one axis (the dimensionality axis)")]
    ScalarInput,

    /// Input could not be reshaped into a `d x N` batch.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// The Gaussian noise sampler could not be built.
    #[error("noise sampler error: {0}")]
    Noise(#[from] rand_distr::NormalError),
}

/// A specialized `Result` type for test function operations.
pub type Result<T> = std::result::Result<T, OptFunctionError>;

impl OptFunctionError {
    /// Returns `true` if the error was raised while configuring an evaluator.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            OptFunctionError::UnknownFunction { .. } | OptFunctionError::InvalidNoiseStddev { .. }
        )
    }

    /// Returns `true` if the error comes from the shape of the evaluation input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            OptFunctionError::ScalarInput | OptFunctionError::Shape(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lists_valid_names() {
        let err = OptFunctionError::UnknownFunction {
            name: "NotAFunction".to_string(),
            valid: vec!["Rastrigin".to_string(), "Zakharov".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown function 'NotAFunction', valid names are: Rastrigin, Zakharov"
        );
    }

    #[test]
    fn test_error_classification() {
        let config_err = OptFunctionError::InvalidNoiseStddev { stddev: -1.0 };
        let input_err = OptFunctionError::ScalarInput;

        assert!(config_err.is_config_error());
        assert!(!config_err.is_input_error());
        assert!(input_err.is_input_error());
        assert!(!input_err.is_config_error());
    }
}
