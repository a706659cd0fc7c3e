//! Binning, frequencies, probability mass and the empirical CDF

use crate::helpers::sorted;
use crate::position::{maximum, minimum};
use serde::{Deserialize, Serialize};
use sigma_core::{require_non_empty, Result, StatsError};
use std::collections::BTreeMap;

/// Assign each value a bin id in 0..n_bins over [min, max]
pub fn bin(n_bins: usize, xs: &[f64]) -> Result<Vec<usize>> {
    if n_bins == 0 {
        return Err(StatsError::invalid_parameter(
            "bin",
            "n_bins",
            "must be at least 1",
        ));
    }
    let lo = minimum(xs)?;
    let hi = maximum(xs)?;
    let range = hi - lo;
    if range == 0.0 {
        return Err(StatsError::degenerate(
            "bin",
            format!("all values equal {}", lo),
        ));
    }

    let last = (n_bins - 1) as f64;
    Ok(xs
        .iter()
        .map(|x| ((x - lo) / range * n_bins as f64).floor().clamp(0.0, last) as usize)
        .collect())
}

/// Count per distinct id
pub fn frequencies<K: Ord + Clone>(ids: &[K]) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for id in ids {
        *counts.entry(id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Normalize per-id counts into a probability mass summing to 1
pub fn pmf<K: Ord + Clone>(ids: &[K]) -> Result<BTreeMap<K, f64>> {
    if ids.is_empty() {
        return Err(StatsError::empty("pmf"));
    }
    let total = ids.len() as f64;
    Ok(frequencies(ids)
        .into_iter()
        .map(|(id, count)| (id, count as f64 / total))
        .collect())
}

/// Right-continuous step function v ↦ fraction of observations ≤ v
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalCdf {
    sorted: Vec<f64>,
}

impl EmpiricalCdf {
    pub fn new(xs: &[f64]) -> Result<Self> {
        require_non_empty(xs, "empirical_cdf")?;
        Ok(Self { sorted: sorted(xs) })
    }

    /// Fraction of observations ≤ v, in [0, 1]
    pub fn eval(&self, v: f64) -> f64 {
        let count = self.sorted.partition_point(|x| *x <= v);
        count as f64 / self.sorted.len() as f64
    }

    /// Sorted support, one point per observation
    pub fn points(&self) -> &[f64] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Empirical CDF of a sample
pub fn empirical_cdf(xs: &[f64]) -> Result<EmpiricalCdf> {
    EmpiricalCdf::new(xs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_basic() {
        let ids = bin(2, &[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        // max lands on the upper edge and is clamped into the last bin
        assert_eq!(ids, vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_bin_ids_in_range() {
        let xs = [0.3, 7.1, 2.2, 9.9, 5.0, 0.3];
        let ids = bin(4, &xs).unwrap();
        assert!(ids.iter().all(|&id| id < 4));
        assert_eq!(ids[0], 0);
        assert_eq!(ids[3], 3);
    }

    #[test]
    fn test_bin_degenerate() {
        assert!(matches!(
            bin(3, &[2.0, 2.0]),
            Err(StatsError::DegenerateRange { .. })
        ));
        assert!(bin(0, &[1.0, 2.0]).is_err());
        assert!(bin(3, &[]).is_err());
    }

    #[test]
    fn test_frequencies() {
        let counts = frequencies(&[1, 2, 2, 3, 3, 3]);
        assert_eq!(counts.get(&3), Some(&3));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        let mass = pmf(&[0, 1, 1, 2, 2, 2, 2]).unwrap();
        let total: f64 = mass.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((mass[&2] - 4.0 / 7.0).abs() < 1e-12);
        assert!(pmf::<usize>(&[]).is_err());
    }

    #[test]
    fn test_ecdf_steps() {
        let cdf = empirical_cdf(&[3.0, 1.0, 2.0, 2.0]).unwrap();
        assert_eq!(cdf.eval(0.5), 0.0);
        assert_eq!(cdf.eval(1.0), 0.25);
        assert_eq!(cdf.eval(2.0), 0.75);
        assert_eq!(cdf.eval(2.5), 0.75);
        assert_eq!(cdf.eval(3.0), 1.0);
        assert_eq!(cdf.eval(100.0), 1.0);
        assert_eq!(cdf.points(), &[1.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ecdf_empty() {
        assert!(empirical_cdf(&[]).is_err());
    }
}
