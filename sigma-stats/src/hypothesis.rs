//! Hypothesis testing: z, t and F tests, effect size, multiple comparisons
//!
//! Every test is two-tailed. Standard errors use the population standard
//! deviation like the rest of the engine.

use crate::central::mean;
use crate::confidence::t_confidence_interval;
use crate::dispersion::{standard_error, std_dev};
use crate::distributions::f::f_sf;
use crate::distributions::normal::{normal_critical, normal_sf};
use crate::distributions::t::{t_critical, t_two_tailed};
use crate::helpers::{shifted_mean, sum_squared_deviations};
use serde::{Deserialize, Serialize};
use sigma_core::{
    require_min_count, require_probability, DegreesOfFreedom, GroupedSample, Interval, Result,
    StatsError, TestResult, DEFAULT_CONFIDENCE,
};
use tracing::debug;

/// √(SE(a)² + SE(b)²)
pub fn pooled_standard_error(a: &[f64], b: &[f64]) -> Result<f64> {
    let se_a = standard_error(a)?;
    let se_b = standard_error(b)?;
    Ok((se_a * se_a + se_b * se_b).sqrt())
}

/// (mean(a) - mean(b)) / pooled SE, shared by the z and t tests
pub fn two_sample_statistic(a: &[f64], b: &[f64]) -> Result<f64> {
    let (difference, pooled) = difference_and_pooled_se(a, b)?;
    Ok(difference / pooled)
}

fn difference_and_pooled_se(a: &[f64], b: &[f64]) -> Result<(f64, f64)> {
    let pooled = pooled_standard_error(a, b)?;
    if pooled == 0.0 {
        return Err(StatsError::undefined(
            "two_sample_statistic",
            "both samples have zero spread",
        ));
    }
    Ok((mean(a)? - mean(b)?, pooled))
}

/// Two-sample z-test, normal reference distribution.
///
/// The attached interval is for mean(a) - mean(b).
pub fn two_sample_z_test(confidence: f64, a: &[f64], b: &[f64]) -> Result<TestResult> {
    require_probability("two_sample_z_test", confidence)?;
    let (difference, pooled) = difference_and_pooled_se(a, b)?;
    let z = difference / pooled;
    let p_value = (2.0 * normal_sf(z.abs())).min(1.0);
    let margin = normal_critical(confidence)? * pooled;

    Ok(TestResult::new(z, DegreesOfFreedom::Infinite, p_value)
        .with_interval(Interval::around(difference, margin)))
}

/// Two-sample t-test with df = n_a + n_b - 2.
///
/// The attached interval is for mean(a) - mean(b).
pub fn two_sample_t_test(confidence: f64, a: &[f64], b: &[f64]) -> Result<TestResult> {
    require_probability("two_sample_t_test", confidence)?;
    let (difference, pooled) = difference_and_pooled_se(a, b)?;
    let total = a.len() + b.len();
    if total < 3 {
        return Err(StatsError::insufficient("two_sample_t_test", 3, total));
    }

    let df = (total - 2) as f64;
    let t = difference / pooled;
    let p_value = t_two_tailed(t, df)?;
    let margin = t_critical(confidence, df)? * pooled;

    Ok(TestResult::new(t, DegreesOfFreedom::One(df), p_value)
        .with_interval(Interval::around(difference, margin)))
}

/// One-sample t-test of H₀: mean = mu, interval at the default confidence
pub fn one_sample_t_test(xs: &[f64], mu: f64) -> Result<TestResult> {
    one_sample_t_test_at(DEFAULT_CONFIDENCE, xs, mu)
}

/// One-sample t-test with a Student-t interval for the mean at `confidence`
pub fn one_sample_t_test_at(confidence: f64, xs: &[f64], mu: f64) -> Result<TestResult> {
    require_min_count(xs, 2, "one_sample_t_test")?;
    let se = standard_error(xs)?;
    if se == 0.0 {
        return Err(StatsError::undefined("one_sample_t_test", "sample has zero spread"));
    }

    let df = (xs.len() - 1) as f64;
    let t = (mean(xs)? - mu) / se;
    let p_value = t_two_tailed(t, df)?;
    let interval = t_confidence_interval(confidence, xs)?;

    Ok(TestResult::new(t, DegreesOfFreedom::One(df), p_value).with_interval(interval))
}

/// One-way ANOVA decomposition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaTable {
    /// Between-group sum of squares
    pub ssb: f64,
    /// Within-group sum of squares
    pub ssw: f64,
    /// Total sum of squares
    pub sst: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub ms_between: f64,
    pub ms_within: f64,
    pub f: f64,
    pub p_value: f64,
}

impl AnovaTable {
    pub fn test_result(&self) -> TestResult {
        TestResult::new(
            self.f,
            DegreesOfFreedom::Two(self.df_between, self.df_within),
            self.p_value,
        )
    }
}

/// One-way ANOVA over k ≥ 2 non-empty groups
pub fn one_way_anova<K: Ord>(groups: &GroupedSample<K>) -> Result<AnovaTable> {
    let k = groups.len();
    if k < 2 {
        return Err(StatsError::insufficient("one_way_anova", 2, k));
    }
    if groups.values().any(|g| g.is_empty()) {
        return Err(StatsError::insufficient("one_way_anova", 1, 0));
    }
    let all: Vec<f64> = groups.values().flatten().copied().collect();
    let n = all.len();
    if n <= k {
        return Err(StatsError::insufficient("one_way_anova", k + 1, n));
    }

    let grand_mean = shifted_mean(&all);
    let sst = sum_squared_deviations(&all, grand_mean);
    let ssw: f64 = groups
        .values()
        .map(|g| sum_squared_deviations(g, shifted_mean(g)))
        .sum();
    // Rounding can leave SST a hair below SSW
    let ssb = (sst - ssw).max(0.0);
    debug!(k, n, sst, ssw, ssb, "one-way anova");

    if ssw == 0.0 {
        return Err(StatsError::undefined(
            "one_way_anova",
            "every group has zero within-group variance",
        ));
    }

    let df_between = (k - 1) as f64;
    let df_within = (n - k) as f64;
    let ms_between = ssb / df_between;
    let ms_within = ssw / df_within;
    let f = ms_between / ms_within;
    let p_value = f_sf(f, df_between, df_within)?;

    Ok(AnovaTable {
        ssb,
        ssw,
        sst,
        df_between,
        df_within,
        ms_between,
        ms_within,
        f,
        p_value,
    })
}

/// F-test view of [`one_way_anova`]
pub fn one_way_f_test<K: Ord>(groups: &GroupedSample<K>) -> Result<TestResult> {
    Ok(one_way_anova(groups)?.test_result())
}

/// alpha / k for k simultaneous comparisons
pub fn bonferroni_adjusted_alpha(alpha: f64, k: usize) -> Result<f64> {
    let alpha = require_probability("bonferroni_adjusted_alpha", alpha)?;
    if k == 0 {
        return Err(StatsError::invalid_parameter(
            "bonferroni_adjusted_alpha",
            "k",
            "at least one comparison is required",
        ));
    }
    Ok(alpha / k as f64)
}

/// Effect size (mean(b) - mean(a)) / √(σa² + σb²)
pub fn cohens_d(a: &[f64], b: &[f64]) -> Result<f64> {
    let sd_a = std_dev(a)?;
    let sd_b = std_dev(b)?;
    let spread = (sd_a * sd_a + sd_b * sd_b).sqrt();
    if spread == 0.0 {
        return Err(StatsError::undefined("cohens_d", "both samples have zero spread"));
    }
    Ok((mean(b)? - mean(a)?) / spread)
}

/// One cell of a pairwise comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison<K> {
    pub first: K,
    pub second: K,
    pub result: TestResult,
    /// p-value below the Bonferroni-adjusted alpha
    pub significant: bool,
}

/// Two-sample t-test on every unordered pair of groups.
///
/// Significance is judged against alpha divided by the number of pairs, and
/// each interval is built at the matching 1 - adjusted alpha confidence.
pub fn pairwise_t_tests<K: Ord + Clone>(
    groups: &GroupedSample<K>,
    alpha: f64,
) -> Result<Vec<PairwiseComparison<K>>> {
    let k = groups.len();
    if k < 2 {
        return Err(StatsError::insufficient("pairwise_t_tests", 2, k));
    }
    let pairs = k * (k - 1) / 2;
    let adjusted = bonferroni_adjusted_alpha(alpha, pairs)?;
    debug!(groups = k, pairs, adjusted, "pairwise t-tests");

    let entries: Vec<(&K, &Vec<f64>)> = groups.iter().collect();
    let mut comparisons = Vec::with_capacity(pairs);
    for (i, (first, a)) in entries.iter().enumerate() {
        for (second, b) in &entries[i + 1..] {
            let result = two_sample_t_test(1.0 - adjusted, a, b)?;
            comparisons.push(PairwiseComparison {
                first: (*first).clone(),
                second: (*second).clone(),
                significant: result.is_significant(adjusted),
                result,
            });
        }
    }

    Ok(comparisons)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bonferroni_strictly_decreasing(alpha in 0.001_f64..0.5, k in 1_usize..1000) {
            let fewer = bonferroni_adjusted_alpha(alpha, k).unwrap();
            let more = bonferroni_adjusted_alpha(alpha, k + 1).unwrap();
            prop_assert!(more < fewer);
        }

        #[test]
        fn two_sample_p_value_is_probability(
            a in proptest::collection::vec(-100.0_f64..100.0, 2..20),
            b in proptest::collection::vec(-100.0_f64..100.0, 2..20),
        ) {
            if let Ok(result) = two_sample_t_test(0.95, &a, &b) {
                prop_assert!((0.0..=1.0).contains(&result.p_value));
            }
        }
    }
}
