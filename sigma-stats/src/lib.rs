//! Sigma Statistics
//!
//! Descriptive statistics, correlation, least-squares regression, hypothesis
//! tests and bootstrap resampling over `f64` samples.
//! Every fallible function returns `sigma_core::Result`; nothing panics on bad input.
//!
//! Variance and standard deviation are population quantities (divisor n)
//! everywhere, including inside standard errors and test statistics.

mod helpers;
mod central;
mod dispersion;
mod position;
mod shape;
mod histogram;
mod bivariate;
mod regression;
mod confidence;
mod hypothesis;
mod resample;
mod grouped;
mod catalog;
pub mod distributions;

pub use helpers::sum;

// Descriptive
pub use central::{mean, median};
pub use dispersion::{standard_error, std_dev, variance};
pub use position::{maximum, minimum, quantile, quantiles};
pub use shape::skewness;
pub use histogram::{bin, empirical_cdf, frequencies, pmf, EmpiricalCdf};

// Covariance and correlation
pub use bivariate::{
    correlation, correlation_confidence_interval, correlation_interval,
    correlation_significance_test, covariance, fisher_z, fisher_z_inverse,
};

// Regression
pub use regression::{
    adjusted_r_squared, fitted_values, multiple_fit, multiple_fit_with, predict, r_squared,
    residuals, simple_fit, FittedModel, SimpleFit,
};

// Hypothesis testing
pub use confidence::{confidence_interval, t_confidence_interval};
pub use hypothesis::{
    bonferroni_adjusted_alpha, cohens_d, one_sample_t_test, one_sample_t_test_at, one_way_anova,
    one_way_f_test, pairwise_t_tests, pooled_standard_error, two_sample_statistic,
    two_sample_t_test, two_sample_z_test, AnovaTable, PairwiseComparison,
};

// Resampling and grouping
pub use resample::{bootstrap, bootstrap_interval, Bootstrap, Statistic};
pub use grouped::map_groups;
pub use catalog::{Catalog, NamedStatistic, StatisticMeta};

pub use sigma_matrix::DesignMatrix;
