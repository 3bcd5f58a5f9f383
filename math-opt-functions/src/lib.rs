//! Rescalable test functions for benchmarking optimizers.
//!
//! Each registered function has a canonical domain. An [`Evaluator`] maps the
//! caller's input domain onto it, evaluates the rule and optionally adds
//! Gaussian noise to every result.
//!
//! # Example
//! ```rust
//! use math_audio_opt_functions::{ConfigUpdate, Evaluator};
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut f = Evaluator::builder("Zakharov")
//!     .input_bounds(-5.0, 10.0)
//!     .build()
//!     .expect("Zakharov is registered");
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! assert_eq!(f.evaluate_point(&array![0.0, 0.0], &mut rng).unwrap(), 0.0);
//!
//! f.configure(ConfigUpdate::new().noise(true).noise_stddev(0.01)).unwrap();
//! let noisy = f.evaluate_point(&array![0.0, 0.0], &mut rng).unwrap();
//! assert!(noisy.abs() < 0.1);
//! ```
#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{OptFunctionError, Result};

pub mod functions;
pub use functions::*;

pub mod evaluator;
/// Column-wise batch evaluation, optionally on the rayon pool.
pub mod parallel_eval;
pub mod registry;
pub mod rescale;

pub use evaluator::{ConfigUpdate, DomainCheck, Evaluator, EvaluatorBuilder};
pub use parallel_eval::ParallelConfig;
pub use registry::{
    FunctionSpec, TestFunction, create_bounds, function_names, function_spec, registry,
};
pub use rescale::{rescale, rescale_array};
