//! Static registry of test functions and their canonical domains.

use crate::error::{OptFunctionError, Result};
use crate::functions::styblinski_tang::{STYBLINSKI_TANG_ARGMIN, STYBLINSKI_TANG_MIN_PER_DIM};
use crate::functions::*;
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Known global minimum for a given dimensionality: (location, value).
pub type MinimumFn = fn(usize) -> Option<(Vec<f64>, f64)>;

/// A named evaluation rule together with the domain it is defined on.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    /// Registry key
    pub name: &'static str,
    /// Evaluation rule, applied to a vector in the canonical domain
    pub evaluate: TestFunction,
    /// Lower bound of the canonical domain, shared by every coordinate
    pub canonical_lower: f64,
    /// Upper bound of the canonical domain, shared by every coordinate
    pub canonical_upper: f64,
    /// Short description of the landscape
    pub description: &'static str,
    /// Whether the function has more than one local minimum
    pub multimodal: bool,
    /// Known global minimum for a dimensionality, in canonical coordinates
    pub global_minimum: MinimumFn,
}

impl FunctionSpec {
    /// Create bounds matrix for optimization (2 x n matrix)
    /// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
    pub fn bounds(&self, n: usize) -> Array2<f64> {
        create_bounds(n, self.canonical_lower, self.canonical_upper)
    }

    /// Midpoint of the canonical domain.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.canonical_lower + self.canonical_upper)
    }
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

fn origin_minimum(d: usize) -> Option<(Vec<f64>, f64)> {
    Some((vec![0.0; d], 0.0))
}

// Only the low-dimensional minimisers are tabulated in the literature.
fn michalewicz_minimum(d: usize) -> Option<(Vec<f64>, f64)> {
    match d {
        1 => Some((vec![2.20290552], -0.801303410)),
        2 => Some((vec![2.20290552, 1.57079633], -1.80130341)),
        _ => None,
    }
}

fn styblinski_tang_minimum(d: usize) -> Option<(Vec<f64>, f64)> {
    Some((
        vec![STYBLINSKI_TANG_ARGMIN; d],
        STYBLINSKI_TANG_MIN_PER_DIM * d as f64,
    ))
}

fn langermann_minimum(d: usize) -> Option<(Vec<f64>, f64)> {
    match d {
        2 => Some((vec![2.00299219, 1.006096], -5.1621259)),
        _ => None,
    }
}

static REGISTRY: [FunctionSpec; 5] = [
    FunctionSpec {
        name: "Rastrigin",
        evaluate: rastrigin,
        canonical_lower: -5.12,
        canonical_upper: 5.12,
        description: "Multimodal Rastrigin function with a regular lattice of local minima",
        multimodal: true,
        global_minimum: origin_minimum,
    },
    FunctionSpec {
        name: "Michalewicz",
        evaluate: michalewicz,
        canonical_lower: 0.0,
        canonical_upper: PI,
        description: "Michalewicz function with steep valleys (m = 10)",
        multimodal: true,
        global_minimum: michalewicz_minimum,
    },
    FunctionSpec {
        name: "Zakharov",
        evaluate: zakharov,
        canonical_lower: -5.0,
        canonical_upper: 10.0,
        description: "Unimodal Zakharov plate-shaped function",
        multimodal: false,
        global_minimum: origin_minimum,
    },
    FunctionSpec {
        name: "StyblinskiTang",
        evaluate: styblinski_tang,
        canonical_lower: -5.0,
        canonical_upper: 5.0,
        description: "Separable Styblinski-Tang function",
        multimodal: true,
        global_minimum: styblinski_tang_minimum,
    },
    FunctionSpec {
        name: "Langermann",
        evaluate: langermann,
        canonical_lower: 0.0,
        canonical_upper: 10.0,
        description: "Langermann function with unevenly distributed local minima",
        multimodal: true,
        global_minimum: langermann_minimum,
    },
];

/// All registered functions, in registry order.
pub fn registry() -> &'static [FunctionSpec] {
    &REGISTRY
}

/// Registered function names, in registry order.
pub fn function_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|spec| spec.name).collect()
}

// Lookup ignores case and word separators: "styblinski_tang" == "StyblinskiTang".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Look up a function by name.
///
/// Fails with [`OptFunctionError::UnknownFunction`] listing every valid
/// name when nothing matches.
pub fn function_spec(name: &str) -> Result<&'static FunctionSpec> {
    let key = normalize(name);
    REGISTRY
        .iter()
        .find(|spec| normalize(spec.name) == key)
        .ok_or_else(|| OptFunctionError::UnknownFunction {
            name: name.to_string(),
            valid: function_names().into_iter().map(String::from).collect(),
        })
}
