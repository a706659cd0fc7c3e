//! Position: minimum, maximum, quantile

use crate::helpers::sorted;
use sigma_core::{require_non_empty, Result, StatsError};

pub fn minimum(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "minimum")?;
    Ok(xs.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn maximum(xs: &[f64]) -> Result<f64> {
    require_non_empty(xs, "maximum")?;
    Ok(xs.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Nearest-rank quantile: element floor((n-1)·q + ½) of the ascending sort.
///
/// q = 0 gives the minimum, q = 1 the maximum.
pub fn quantile(q: f64, xs: &[f64]) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::invalid_probability("quantile", q));
    }
    require_non_empty(xs, "quantile")?;
    let sorted = sorted(xs);
    Ok(sorted[nearest_rank(q, sorted.len())])
}

/// Several quantiles from a single sort
pub fn quantiles(qs: &[f64], xs: &[f64]) -> Result<Vec<f64>> {
    if let Some(&q) = qs.iter().find(|q| !(0.0..=1.0).contains(*q)) {
        return Err(StatsError::invalid_probability("quantiles", q));
    }
    require_non_empty(xs, "quantiles")?;
    let sorted = sorted(xs);
    Ok(qs
        .iter()
        .map(|&q| sorted[nearest_rank(q, sorted.len())])
        .collect())
}

fn nearest_rank(q: f64, n: usize) -> usize {
    let index = ((n - 1) as f64 * q + 0.5).floor() as usize;
    index.min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        let xs = [3.0, -1.0, 8.0, 2.0];
        assert_eq!(minimum(&xs).unwrap(), -1.0);
        assert_eq!(maximum(&xs).unwrap(), 8.0);
        assert!(minimum(&[]).is_err());
    }

    #[test]
    fn test_quantile_extremes() {
        let xs = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(quantile(0.0, &xs).unwrap(), 1.0);
        assert_eq!(quantile(1.0, &xs).unwrap(), 5.0);
        assert_eq!(quantile(0.5, &xs).unwrap(), 3.0);
    }

    #[test]
    fn test_quantile_nearest_rank() {
        let xs = [10.0, 20.0, 30.0, 40.0];
        // (n-1)·q + ½ = 3·0.25 + 0.5 = 1.25 -> index 1
        assert_eq!(quantile(0.25, &xs).unwrap(), 20.0);
        // 3·0.5 + 0.5 = 2.0 -> index 2
        assert_eq!(quantile(0.5, &xs).unwrap(), 30.0);
        // 3·0.1 + 0.5 = 0.8 -> index 0
        assert_eq!(quantile(0.1, &xs).unwrap(), 10.0);
    }

    #[test]
    fn test_quantile_out_of_range() {
        assert!(quantile(1.5, &[1.0]).is_err());
        assert!(quantile(-0.1, &[1.0]).is_err());
        assert!(quantile(f64::NAN, &[1.0]).is_err());
        assert!(quantile(0.5, &[]).is_err());
    }

    #[test]
    fn test_quantiles_batch() {
        let xs = [4.0, 2.0, 1.0, 3.0, 5.0];
        assert_eq!(quantiles(&[0.0, 0.5, 1.0], &xs).unwrap(), vec![1.0, 3.0, 5.0]);
        assert!(quantiles(&[0.5, 2.0], &xs).is_err());
    }
}
