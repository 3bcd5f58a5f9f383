//! Configurable evaluator: rescale, dispatch to the selected rule, add noise.

use crate::error::{OptFunctionError, Result};
use crate::parallel_eval::{ParallelConfig, evaluate_columns};
use crate::registry::{FunctionSpec, create_bounds, function_spec};
use crate::rescale::rescale_array;
use ndarray::{Array, Array1, Array2, ArrayBase, ArrayD, Data, Dimension, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Default noise standard deviation of a fresh evaluator.
pub const DEFAULT_NOISE_STDDEV: f64 = 1.0;
/// Default lower bound of the caller's input domain.
pub const DEFAULT_INPUT_LOWER: f64 = 0.0;
/// Default upper bound of the caller's input domain.
pub const DEFAULT_INPUT_UPPER: f64 = 1.0;

/// Outcome of the input domain check performed on every (re)configuration.
///
/// The check never fails the configuration: an unordered domain is reported
/// through a `warn!` diagnostic and this value, and the evaluator keeps the
/// bounds it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainCheck {
    /// `input_lower < input_upper`
    Ordered,
    /// The bounds are equal, reversed, or not comparable (NaN).
    Unordered {
        /// Stored lower bound
        lower: f64,
        /// Stored upper bound
        upper: f64,
    },
}

impl DomainCheck {
    fn of(lower: f64, upper: f64) -> Self {
        if lower < upper {
            DomainCheck::Ordered
        } else {
            log::warn!(
                "input domain [{}, {}] is not ordered (lower must be < upper); continuing with it as given",
                lower,
                upper
            );
            DomainCheck::Unordered { lower, upper }
        }
    }

    /// Returns `true` when the domain satisfied `lower < upper`.
    pub fn is_ordered(&self) -> bool {
        matches!(self, DomainCheck::Ordered)
    }
}

/// Partial reconfiguration of an [`Evaluator`].
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    /// Name of the function to switch to
    pub function: Option<String>,
    /// Enable or disable additive Gaussian noise
    pub noise: Option<bool>,
    /// Standard deviation of the noise
    pub noise_stddev: Option<f64>,
    /// Lower bound of the caller's input domain
    pub input_lower: Option<f64>,
    /// Upper bound of the caller's input domain
    pub input_upper: Option<f64>,
}

impl ConfigUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }
    /// Selects another registered function.
    pub fn function(mut self, name: &str) -> Self {
        self.function = Some(name.to_string());
        self
    }
    /// Enables or disables noise.
    pub fn noise(mut self, v: bool) -> Self {
        self.noise = Some(v);
        self
    }
    /// Sets the noise standard deviation.
    pub fn noise_stddev(mut self, v: f64) -> Self {
        self.noise_stddev = Some(v);
        self
    }
    /// Sets the lower bound of the input domain.
    pub fn input_lower(mut self, v: f64) -> Self {
        self.input_lower = Some(v);
        self
    }
    /// Sets the upper bound of the input domain.
    pub fn input_upper(mut self, v: f64) -> Self {
        self.input_upper = Some(v);
        self
    }
    /// Sets both bounds of the input domain.
    pub fn input_bounds(self, lower: f64, upper: f64) -> Self {
        self.input_lower(lower).input_upper(upper)
    }
}

/// A test function bound to an input domain and a noise model.
///
/// The selected [`FunctionSpec`] is shared and read-only; the evaluator owns
/// the rest of its configuration. Reconfiguration needs `&mut self`.
///
/// # Example
/// ```rust
/// use math_audio_opt_functions::Evaluator;
/// use ndarray::{ArrayD, IxDyn};
///
/// // Inputs in [0, 1] are mapped onto Rastrigin's [-5.12, 5.12].
/// let f = Evaluator::builder("Rastrigin").input_bounds(0.0, 1.0).build()?;
/// let x = ArrayD::from_elem(IxDyn(&[3]), 0.5);
/// let y = f.evaluate(&x)?;
/// assert_eq!(y.ndim(), 0);
/// assert_eq!(y[[]], 0.0);
/// # Ok::<(), math_audio_opt_functions::OptFunctionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    spec: &'static FunctionSpec,
    noise: bool,
    noise_stddev: f64,
    input_lower: f64,
    input_upper: f64,
    parallel: ParallelConfig,
}

fn check_stddev(stddev: f64) -> Result<()> {
    if stddev.is_finite() && stddev >= 0.0 {
        Ok(())
    } else {
        Err(OptFunctionError::InvalidNoiseStddev { stddev })
    }
}

impl Evaluator {
    /// Evaluator for `name` with default settings: no noise, unit noise
    /// standard deviation, input domain `[0, 1]`.
    pub fn new(name: &str) -> Result<Self> {
        Self::builder(name).build()
    }

    /// Starts a builder for the function `name`.
    pub fn builder(name: &str) -> EvaluatorBuilder {
        EvaluatorBuilder::new(name)
    }

    /// Applies a partial update.
    ///
    /// An unknown function name or an invalid noise level is rejected before
    /// anything is changed. The input domain is then checked softly; see
    /// [`DomainCheck`].
    pub fn configure(&mut self, update: ConfigUpdate) -> Result<DomainCheck> {
        let spec = match update.function.as_deref() {
            Some(name) => function_spec(name)?,
            None => self.spec,
        };
        let noise_stddev = update.noise_stddev.unwrap_or(self.noise_stddev);
        check_stddev(noise_stddev)?;

        self.spec = spec;
        self.noise_stddev = noise_stddev;
        if let Some(noise) = update.noise {
            self.noise = noise;
        }
        if let Some(lower) = update.input_lower {
            self.input_lower = lower;
        }
        if let Some(upper) = update.input_upper {
            self.input_upper = upper;
        }
        log::debug!(
            "configured {}: noise={} stddev={} input=[{}, {}]",
            self.spec.name,
            self.noise,
            self.noise_stddev,
            self.input_lower,
            self.input_upper
        );

        Ok(DomainCheck::of(self.input_lower, self.input_upper))
    }

    /// Replaces the batch parallelism settings.
    pub fn set_parallel(&mut self, parallel: ParallelConfig) {
        self.parallel = parallel;
    }

    /// The selected function.
    pub fn spec(&self) -> &'static FunctionSpec {
        self.spec
    }

    /// Name of the selected function.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Whether noise is added to every evaluation.
    pub fn noise(&self) -> bool {
        self.noise
    }

    /// Standard deviation of the additive noise.
    pub fn noise_stddev(&self) -> f64 {
        self.noise_stddev
    }

    /// The caller's input domain as `(lower, upper)`.
    pub fn input_bounds(&self) -> (f64, f64) {
        (self.input_lower, self.input_upper)
    }

    /// Batch parallelism settings.
    pub fn parallel(&self) -> ParallelConfig {
        self.parallel
    }

    /// 2 x n bounds matrix of the input domain, ready to hand to an optimizer.
    pub fn input_bounds_matrix(&self, n: usize) -> Array2<f64> {
        create_bounds(n, self.input_lower, self.input_upper)
    }

    /// Maps inputs from the caller's domain onto the canonical domain.
    pub fn rescale<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        rescale_array(
            x,
            self.input_lower,
            self.input_upper,
            self.spec.canonical_lower,
            self.spec.canonical_upper,
        )
    }

    /// Maps canonical coordinates back into the caller's domain.
    pub fn unscale<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        rescale_array(
            x,
            self.spec.canonical_lower,
            self.spec.canonical_upper,
            self.input_lower,
            self.input_upper,
        )
    }

    /// Known global minimum for dimensionality `d`, located in the caller's
    /// input domain.
    pub fn known_minimum(&self, d: usize) -> Option<(Array1<f64>, f64)> {
        (self.spec.global_minimum)(d)
            .map(|(location, value)| (self.unscale(&Array1::from(location)), value))
    }

    // One independent N(0, stddev) draw per value.
    fn perturb<'a, R, I>(&self, values: I, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a mut f64>,
    {
        if !self.noise {
            return Ok(());
        }
        let normal = Normal::new(0.0, self.noise_stddev)?;
        for v in values {
            *v += normal.sample(rng);
        }
        Ok(())
    }

    /// Evaluates a `(d, ...)` array.
    ///
    /// The leading axis holds the coordinates of each candidate; every other
    /// axis is a batch axis and is preserved in the output. A 1-D input is a
    /// single vector and yields a 0-D array.
    pub fn evaluate_with_rng<R: Rng + ?Sized>(
        &self,
        x: &ArrayD<f64>,
        rng: &mut R,
    ) -> Result<ArrayD<f64>> {
        let shape = x.shape();
        if shape.is_empty() {
            return Err(OptFunctionError::ScalarInput);
        }
        let d = shape[0];
        let batch_shape = shape[1..].to_vec();
        let n: usize = batch_shape.iter().product();

        let scaled = self.rescale(x);
        let batch = Array2::from_shape_vec((d, n), scaled.iter().copied().collect())?;
        let mut y = evaluate_columns(self.spec.evaluate, &batch, &self.parallel);
        self.perturb(y.iter_mut(), rng)?;

        Ok(y.into_shape_with_order(IxDyn(&batch_shape))?)
    }

    /// [`Evaluator::evaluate_with_rng`] drawing noise from the thread-local RNG.
    pub fn evaluate(&self, x: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.evaluate_with_rng(x, &mut rand::rng())
    }

    /// Evaluates a single vector.
    pub fn evaluate_point<R: Rng + ?Sized>(&self, x: &Array1<f64>, rng: &mut R) -> Result<f64> {
        let mut y = (self.spec.evaluate)(&self.rescale(x));
        self.perturb(std::iter::once(&mut y), rng)?;
        Ok(y)
    }

    /// Evaluates a `d x N` batch, one candidate per column.
    pub fn evaluate_batch<R: Rng + ?Sized>(
        &self,
        x: &Array2<f64>,
        rng: &mut R,
    ) -> Result<Array1<f64>> {
        let mut y = evaluate_columns(self.spec.evaluate, &self.rescale(x), &self.parallel);
        self.perturb(y.iter_mut(), rng)?;
        Ok(y)
    }
}

/// Builder for [`Evaluator`].
///
/// # Example
/// ```rust
/// use math_audio_opt_functions::Evaluator;
///
/// let f = Evaluator::builder("Zakharov")
///     .noise(true)
///     .noise_stddev(0.1)
///     .input_bounds(-1.0, 1.0)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(f.input_bounds(), (-1.0, 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    function: String,
    update: ConfigUpdate,
    parallel: ParallelConfig,
}

impl EvaluatorBuilder {
    /// Creates a builder for the function `name`.
    pub fn new(name: &str) -> Self {
        Self {
            function: name.to_string(),
            update: ConfigUpdate::new(),
            parallel: ParallelConfig::default(),
        }
    }
    /// Enables or disables noise.
    pub fn noise(mut self, v: bool) -> Self {
        self.update = self.update.noise(v);
        self
    }
    /// Sets the noise standard deviation.
    pub fn noise_stddev(mut self, v: f64) -> Self {
        self.update = self.update.noise_stddev(v);
        self
    }
    /// Sets the caller's input domain.
    pub fn input_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.update = self.update.input_bounds(lower, upper);
        self
    }
    /// Sets batch parallelism.
    pub fn parallel(mut self, v: ParallelConfig) -> Self {
        self.parallel = v;
        self
    }
    /// Validates the configuration and creates the evaluator.
    pub fn build(self) -> Result<Evaluator> {
        let mut evaluator = Evaluator {
            spec: function_spec(&self.function)?,
            noise: false,
            noise_stddev: DEFAULT_NOISE_STDDEV,
            input_lower: DEFAULT_INPUT_LOWER,
            input_upper: DEFAULT_INPUT_UPPER,
            parallel: self.parallel,
        };
        evaluator.configure(self.update)?;
        Ok(evaluator)
    }
}
