//! Central tendency: mean, median

use crate::helpers::{shifted_mean, sorted};
use sigma_core::{require_non_empty, Result};

/// Arithmetic mean
pub fn mean(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "mean")?;
    Ok(shifted_mean(xs))
}

/// Middle sorted value; mean of the two middle values for even n
pub fn median(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "median")?;
    let sorted = sorted(xs);
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
