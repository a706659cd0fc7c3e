//! Named statistics, selectable by name

use crate::central::{mean, median};
use crate::dispersion::{standard_error, std_dev, variance};
use crate::resample::Statistic;
use crate::shape::skewness;
use serde::Serialize;
use sigma_core::{require_min_count, Result, StatsError};
use std::collections::BTreeMap;

/// Metadata for a named statistic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Smallest sample the statistic is defined on
    pub min_len: usize,
}

/// A sample function together with its metadata
#[derive(Debug, Clone)]
pub struct NamedStatistic {
    meta: StatisticMeta,
    function: fn(&[f64]) -> Result<f64>,
}

impl NamedStatistic {
    pub fn new(meta: StatisticMeta, function: fn(&[f64]) -> Result<f64>) -> Self {
        Self { meta, function }
    }

    pub fn meta(&self) -> &StatisticMeta {
        &self.meta
    }
}

impl Statistic for NamedStatistic {
    fn compute(&self, xs: &[f64]) -> Result<f64> {
        require_min_count(xs, self.meta.min_len, self.meta.name)?;
        (self.function)(xs)
    }
}

/// Registry of statistics keyed by lowercase name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    statistics: BTreeMap<String, NamedStatistic>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptive statistics the engine ships with
    pub fn standard() -> Self {
        Self::new()
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "mean",
                    description: "Arithmetic mean",
                    min_len: 1,
                },
                mean,
            ))
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "median",
                    description: "Middle value of the sorted sample",
                    min_len: 1,
                },
                median,
            ))
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "variance",
                    description: "Population variance",
                    min_len: 1,
                },
                variance,
            ))
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "std_dev",
                    description: "Population standard deviation",
                    min_len: 1,
                },
                std_dev,
            ))
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "skewness",
                    description: "Third standardized moment",
                    min_len: 2,
                },
                skewness,
            ))
            .with_statistic(NamedStatistic::new(
                StatisticMeta {
                    name: "standard_error",
                    description: "Standard error of the mean",
                    min_len: 1,
                },
                standard_error,
            ))
    }

    pub fn with_statistic(mut self, statistic: NamedStatistic) -> Self {
        let name = statistic.meta.name.to_lowercase();
        self.statistics.insert(name, statistic);
        self
    }

    pub fn get(&self, name: &str) -> Option<&NamedStatistic> {
        self.statistics.get(&name.to_lowercase())
    }

    /// Evaluate a statistic by name
    pub fn compute(&self, name: &str, xs: &[f64]) -> Result<f64> {
        match self.get(name) {
            Some(statistic) => statistic.compute(xs),
            None => Err(StatsError::invalid_parameter(
                "catalog",
                "name",
                format!("unknown statistic '{}'", name),
            )),
        }
    }

    /// Metadata of every registered statistic, by name
    pub fn list(&self) -> Vec<&StatisticMeta> {
        self.statistics.values().map(NamedStatistic::meta).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resample::Bootstrap;

    const XS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.list().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["mean", "median", "skewness", "standard_error", "std_dev", "variance"]
        );
    }

    #[test]
    fn test_compute_by_name() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.compute("mean", &XS).unwrap(), 3.0);
        assert_eq!(catalog.compute("VARIANCE", &XS).unwrap(), 2.0);
        assert!(matches!(
            catalog.compute("kurtosis", &XS),
            Err(StatsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_min_len_enforced() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.compute("skewness", &[1.0]).unwrap_err(),
            StatsError::insufficient("skewness", 2, 1)
        );
        assert!(matches!(
            catalog.compute("median", &[]),
            Err(StatsError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_custom_statistic() {
        fn range(xs: &[f64]) -> Result<f64> {
            Ok(crate::position::maximum(xs)? - crate::position::minimum(xs)?)
        }
        let catalog = Catalog::new().with_statistic(NamedStatistic::new(
            StatisticMeta {
                name: "Range",
                description: "max - min",
                min_len: 1,
            },
            range,
        ));
        assert_eq!(catalog.compute("range", &XS).unwrap(), 4.0);
        assert_eq!(catalog.get("range").unwrap().meta().name, "Range");
    }

    #[test]
    fn test_bootstrap_named_statistic() {
        let catalog = Catalog::standard();
        let median = catalog.get("median").unwrap();
        let distribution = Bootstrap::new(100).with_seed(17).run(&XS, median).unwrap();
        assert_eq!(distribution.len(), 100);
        assert!(distribution.iter().all(|m| XS.contains(m)));
    }

    #[test]
    fn test_meta_serializes() {
        let catalog = Catalog::standard();
        let json = serde_json::to_value(catalog.list()).unwrap();
        assert_eq!(json[0]["name"], "mean");
        assert_eq!(json[0]["min_len"], 1);
    }
}
