//! Sample records exchanged with the collaborator layer
//!
//! A Sample is a plain `&[f64]`. Paired and grouped samples get their own
//! types because they carry invariants of their own.

use crate::error::{Result, StatsError};
use std::collections::BTreeMap;

/// Observations keyed by group, as handed over by the dataset layer.
///
/// Keys may be scalars or tuples; anything `Ord` works.
pub type GroupedSample<K> = BTreeMap<K, Vec<f64>>;

/// Two equal-length samples, x[i] paired with y[i]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedSample<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> PairedSample<'a> {
    /// Pair two samples, rejecting unequal lengths and empty input
    pub fn new(operation: &'static str, x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(StatsError::size_mismatch(operation, x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(StatsError::empty(operation));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over (x_i, y_i)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Require at least one observation
pub fn require_non_empty(xs: &[f64], operation: &'static str) -> Result<()> {
    if xs.is_empty() {
        return Err(StatsError::empty(operation));
    }
    Ok(())
}

/// Require a minimum number of observations
pub fn require_min_count(xs: &[f64], min: usize, operation: &'static str) -> Result<()> {
    require_non_empty(xs, operation)?;
    if xs.len() < min {
        return Err(StatsError::insufficient(operation, min, xs.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_rejects_mismatch() {
        let err = PairedSample::new("covariance", &[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::size_mismatch("covariance", 2, 1));
    }

    #[test]
    fn test_paired_rejects_empty() {
        let err = PairedSample::new("covariance", &[], &[]).unwrap_err();
        assert_eq!(err, StatsError::empty("covariance"));
    }

    #[test]
    fn test_paired_iter() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let pair = PairedSample::new("test", &x, &y).unwrap();
        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]);
        assert_eq!(pair.len(), 3);
    }

    #[test]
    fn test_min_count() {
        assert!(require_min_count(&[1.0, 2.0], 2, "variance").is_ok());
        assert_eq!(
            require_min_count(&[1.0], 2, "variance").unwrap_err(),
            StatsError::insufficient("variance", 2, 1)
        );
        assert_eq!(
            require_min_count(&[], 2, "variance").unwrap_err(),
            StatsError::empty("variance")
        );
    }
}
