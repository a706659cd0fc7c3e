//! Per-group application of flat-sample primitives

use sigma_core::{GroupedSample, Result};
use std::collections::BTreeMap;

/// Apply `f` to every group, keyed like the input.
///
/// Stops at the first group (in key order) whose computation fails.
pub fn map_groups<K, T, F>(groups: &GroupedSample<K>, f: F) -> Result<BTreeMap<K, T>>
where
    K: Ord + Clone,
    F: Fn(&[f64]) -> Result<T>,
{
    groups
        .iter()
        .map(|(key, xs)| Ok((key.clone(), f(xs.as_slice())?)))
        .collect()
}
