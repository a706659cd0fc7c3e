//! Bivariate functions: covariance, correlation, Fisher z-transform

use crate::dispersion::std_dev;
use crate::distributions::normal::normal_critical;
use crate::distributions::t::t_two_tailed;
use crate::helpers::shifted_mean;
use sigma_core::{
    require_probability, DegreesOfFreedom, Interval, PairedSample, Result, StatsError, TestResult,
};

/// Population covariance (1/n)·Σ(x - x̄)(y - ȳ)
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    let pair = PairedSample::new("covariance", x, y)?;
    Ok(covariance_of(&pair))
}

pub(crate) fn covariance_of(pair: &PairedSample<'_>) -> f64 {
    let mean_x = shifted_mean(pair.x());
    let mean_y = shifted_mean(pair.y());
    let sum: f64 = pair.iter().map(|(xi, yi)| (xi - mean_x) * (yi - mean_y)).sum();
    sum / pair.len() as f64
}

/// Pearson correlation cov(x, y) / (σx·σy)
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let pair = PairedSample::new("correlation", x, y)?;
    correlation_of(&pair)
}

pub(crate) fn correlation_of(pair: &PairedSample<'_>) -> Result<f64> {
    let sd_x = std_dev(pair.x())?;
    let sd_y = std_dev(pair.y())?;
    if sd_x == 0.0 || sd_y == 0.0 {
        return Err(StatsError::undefined(
            "correlation",
            "an operand has zero standard deviation",
        ));
    }
    let r = covariance_of(pair) / (sd_x * sd_y);
    // Rounding can push |r| a few ulps past 1
    Ok(r.clamp(-1.0, 1.0))
}

/// Fisher z-transform ½·ln((1+r)/(1-r)); ±∞ at r = ±1
pub fn fisher_z(r: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&r) {
        return Err(StatsError::invalid_parameter(
            "fisher_z",
            "r",
            format!("correlation must lie in [-1, 1], got {}", r),
        ));
    }
    Ok(r.atanh())
}

/// Inverse Fisher transform (e^{2z} - 1)/(e^{2z} + 1)
pub fn fisher_z_inverse(z: f64) -> f64 {
    // tanh is the same expression without overflow for large |z|
    z.tanh()
}

/// Confidence interval for a correlation r observed on n pairs
pub fn correlation_interval(confidence: f64, r: f64, n: usize) -> Result<Interval> {
    require_probability("correlation_confidence_interval", confidence)?;
    if n <= 3 {
        return Err(StatsError::insufficient(
            "correlation_confidence_interval",
            4,
            n,
        ));
    }
    let z_r = fisher_z(r)?;
    let se_z = 1.0 / ((n - 3) as f64).sqrt();
    let crit = normal_critical(confidence)?;
    Ok(Interval::around(z_r, crit * se_z).map(fisher_z_inverse))
}

/// Confidence interval for the correlation of a paired sample
pub fn correlation_confidence_interval(confidence: f64, x: &[f64], y: &[f64]) -> Result<Interval> {
    let pair = PairedSample::new("correlation_confidence_interval", x, y)?;
    require_probability("correlation_confidence_interval", confidence)?;
    if pair.len() <= 3 {
        return Err(StatsError::insufficient(
            "correlation_confidence_interval",
            4,
            pair.len(),
        ));
    }
    let r = correlation_of(&pair)?;
    correlation_interval(confidence, r, pair.len())
}

/// t-test of H₀: ρ = 0, t = r·√(df/(1-r²)) with df = n - 2
pub fn correlation_significance_test(x: &[f64], y: &[f64]) -> Result<TestResult> {
    let pair = PairedSample::new("correlation_significance_test", x, y)?;
    if pair.len() < 3 {
        return Err(StatsError::insufficient(
            "correlation_significance_test",
            3,
            pair.len(),
        ));
    }
    let r = correlation_of(&pair)?;
    let df = (pair.len() - 2) as f64;

    let unexplained = 1.0 - r * r;
    let (t, p_value) = if unexplained <= 0.0 {
        // Perfect linear association
        (f64::INFINITY.copysign(r), 0.0)
    } else {
        let t = r * (df / unexplained).sqrt();
        (t, t_two_tailed(t, df)?)
    };

    Ok(TestResult::new(t, DegreesOfFreedom::One(df), p_value))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paired(min_len: usize, max_len: usize) -> BoxedStrategy<(Vec<f64>, Vec<f64>)> {
        proptest::collection::vec(-1e3_f64..1e3, min_len..=max_len)
            .prop_flat_map(|x| {
                let n = x.len();
                (Just(x), proptest::collection::vec(-1e3_f64..1e3, n..=n))
            })
            .boxed()
    }

    proptest! {
        #[test]
        fn correlation_bounded((x, y) in paired(3, 40)) {
            if let Ok(r) = correlation(&x, &y) {
                prop_assert!((-1.0..=1.0).contains(&r), "r out of bounds: {}", r);
            }
        }

        #[test]
        fn covariance_symmetric((x, y) in paired(1, 40)) {
            prop_assert_eq!(covariance(&x, &y).unwrap(), covariance(&y, &x).unwrap());
        }

        #[test]
        fn self_correlation_is_one(x in proptest::collection::vec(-1e3_f64..1e3, 2..40)) {
            if let Ok(r) = correlation(&x, &x) {
                prop_assert!((r - 1.0).abs() < 1e-9, "r = {}", r);
            }
        }

        #[test]
        fn fisher_round_trip(r in -0.999_f64..0.999) {
            let back = fisher_z_inverse(fisher_z(r).unwrap());
            prop_assert!((back - r).abs() < 1e-12);
        }
    }
}
