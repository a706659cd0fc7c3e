//! Bootstrap resampling
//!
//! The random source is always an explicit parameter. [`Bootstrap`] builds a
//! seeded `StdRng` when a seed is configured.

use crate::position::quantiles;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigma_core::{require_non_empty, require_probability, Interval, Result, Settings, StatsError};
use tracing::{debug, trace};

/// A fallible function of a sample
pub trait Statistic {
    fn compute(&self, xs: &[f64]) -> Result<f64>;
}

impl<F> Statistic for F
where
    F: Fn(&[f64]) -> Result<f64>,
{
    fn compute(&self, xs: &[f64]) -> Result<f64> {
        self(xs)
    }
}

/// Evaluate `statistic` on `size` resamples drawn with replacement from `xs`.
///
/// The first failing evaluation aborts the run as `ResampleFailed`.
pub fn bootstrap<S, R>(xs: &[f64], statistic: &S, size: usize, rng: &mut R) -> Result<Vec<f64>>
where
    S: Statistic + ?Sized,
    R: Rng + ?Sized,
{
    require_non_empty(xs, "bootstrap")?;
    if size == 0 {
        return Err(StatsError::invalid_parameter(
            "bootstrap",
            "size",
            "at least one resample is required",
        ));
    }
    debug!(n = xs.len(), size, "bootstrap");

    let dist = Uniform::from(0..xs.len());
    let mut resample = vec![0.0; xs.len()];
    let mut distribution = Vec::with_capacity(size);

    for index in 0..size {
        for slot in resample.iter_mut() {
            *slot = xs[dist.sample(rng)];
        }
        let value = statistic.compute(&resample).map_err(|source| {
            trace!(index, error = %source, "bootstrap statistic failed");
            StatsError::ResampleFailed {
                index,
                source: Box::new(source),
            }
        })?;
        distribution.push(value);
    }

    Ok(distribution)
}

/// Bootstrap run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Bootstrap {
    pub fn new(size: usize) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            size: settings.bootstrap_size,
            seed: settings.seed,
        })
    }

    /// Run with a `StdRng` seeded from the configured seed, or from entropy
    pub fn run<S: Statistic + ?Sized>(&self, xs: &[f64], statistic: &S) -> Result<Vec<f64>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        bootstrap(xs, statistic, self.size, &mut rng)
    }
}

/// Percentile interval of a bootstrap distribution (nearest-rank quantiles)
pub fn bootstrap_interval(distribution: &[f64], confidence: f64) -> Result<Interval> {
    let confidence = require_probability("bootstrap_interval", confidence)?;
    let tail = (1.0 - confidence) / 2.0;
    let bounds = quantiles(&[tail, 1.0 - tail], distribution)?;
    Ok(Interval::new(bounds[0], bounds[1]))
}
