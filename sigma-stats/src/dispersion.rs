//! Dispersion: variance, standard deviation, standard error
//!
//! Variance is the population variance (divisor n) everywhere in the engine.

use crate::helpers::{shifted_mean, sum_squared_deviations};
use sigma_core::{require_non_empty, Result};

/// Population variance: mean of squared deviations from the mean
pub fn variance(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "variance")?;
    let m = shifted_mean(xs);
    Ok(sum_squared_deviations(xs, m) / xs.len() as f64)
}

/// Population standard deviation
pub fn std_dev(xs: &[f64]) -> Result<f64> {
    Ok(variance(xs)?.sqrt())
}

/// Standard error of the mean: std_dev / √n
pub fn standard_error(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "standard_error")?;
    Ok(std_dev(xs)? / (xs.len() as f64).sqrt())
}
