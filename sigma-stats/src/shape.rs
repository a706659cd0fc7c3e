//! Shape: skewness

use crate::helpers::shifted_mean;
use sigma_core::{require_non_empty, Result, StatsError};

/// Third standardized moment m₃ / m₂^(3/2), population moments
pub fn skewness(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "skewness")?;
    let n = xs.len() as f64;
    let m = shifted_mean(xs);

    let (m2, m3) = xs.iter().fold((0.0, 0.0), |(s2, s3), x| {
        let dev = x - m;
        (s2 + dev * dev, s3 + dev * dev * dev)
    });
    let (m2, m3) = (m2 / n, m3 / n);

    if m2 == 0.0 {
        return Err(StatsError::undefined("skewness", "zero variance"));
    }

    Ok(m3 / m2.powf(1.5))
}
