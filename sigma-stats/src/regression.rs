//! Regression: simple and multiple ordinary least squares
//!
//! Simple fits use the covariance/variance closed form; multiple fits solve
//! the normal equation over a caller-built design matrix. The design matrix
//! is taken as given: no bias column is added on the caller's behalf.

use crate::bivariate::covariance_of;
use crate::dispersion::variance;
use crate::helpers::{shifted_mean, sum_squared_deviations};
use serde::{Deserialize, Serialize};
use sigma_core::{PairedSample, Result, Settings, StatsError, DEFAULT_SINGULAR_TOLERANCE};
use sigma_matrix::{normal_equation, DesignMatrix};
use tracing::debug;

/// Coefficients of a least-squares fit, one per design-matrix column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub coefficients: Vec<f64>,
    /// Observations the model was fit on
    pub n: usize,
    /// Design-matrix columns, bias included
    pub p: usize,
}

/// Result of a single-predictor fit y = intercept + slope·x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleFit {
    pub intercept: f64,
    pub slope: f64,
    pub n: usize,
}

impl SimpleFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Same fit as a model over the design `[1, x]`
    pub fn into_model(self) -> FittedModel {
        FittedModel {
            coefficients: vec![self.intercept, self.slope],
            n: self.n,
            p: 2,
        }
    }
}

/// slope = cov(x, y) / var(x), intercept = ȳ - slope·x̄
pub fn simple_fit(x: &[f64], y: &[f64]) -> Result<SimpleFit> {
    let pair = PairedSample::new("simple_fit", x, y)?;
    let var_x = variance(x)?;
    if var_x == 0.0 {
        return Err(StatsError::degenerate("simple_fit", "x has zero variance"));
    }

    let slope = covariance_of(&pair) / var_x;
    let intercept = shifted_mean(y) - slope * shifted_mean(x);
    debug!(n = pair.len(), slope, intercept, "simple fit");

    Ok(SimpleFit {
        intercept,
        slope,
        n: pair.len(),
    })
}

/// β = (XᵗX)⁻¹Xᵗy with the default singularity tolerance
pub fn multiple_fit(x: &DesignMatrix, y: &[f64]) -> Result<FittedModel> {
    multiple_fit_with_tolerance(x, y, DEFAULT_SINGULAR_TOLERANCE)
}

/// Multiple fit using the tolerance from `settings`
pub fn multiple_fit_with(x: &DesignMatrix, y: &[f64], settings: &Settings) -> Result<FittedModel> {
    multiple_fit_with_tolerance(x, y, settings.singular_tolerance)
}

fn multiple_fit_with_tolerance(x: &DesignMatrix, y: &[f64], tolerance: f64) -> Result<FittedModel> {
    let coefficients = normal_equation(x, y, tolerance)?;
    debug!(n = x.rows(), p = x.cols(), "multiple fit");
    Ok(FittedModel {
        coefficients,
        n: x.rows(),
        p: x.cols(),
    })
}

/// Dot product of the coefficients with one feature row
pub fn predict(model: &FittedModel, row: &[f64]) -> Result<f64> {
    if row.len() != model.p {
        return Err(StatsError::size_mismatch("predict", model.p, row.len()));
    }
    Ok(model
        .coefficients
        .iter()
        .zip(row)
        .map(|(beta, x)| beta * x)
        .sum())
}

/// Predictions for every row of `x`
pub fn fitted_values(model: &FittedModel, x: &DesignMatrix) -> Result<Vec<f64>> {
    if x.cols() != model.p {
        return Err(StatsError::size_mismatch("fitted_values", model.p, x.cols()));
    }
    x.mul_vector(&model.coefficients)
}

/// y - ŷ over all rows
pub fn residuals(model: &FittedModel, x: &DesignMatrix, y: &[f64]) -> Result<Vec<f64>> {
    if y.len() != x.rows() {
        return Err(StatsError::size_mismatch("residuals", x.rows(), y.len()));
    }
    let fitted = fitted_values(model, x)?;
    Ok(y.iter().zip(&fitted).map(|(yi, fi)| yi - fi).collect())
}

/// R² = 1 - RSS/TSS, TSS = Σ(y - ȳ)²
pub fn r_squared(model: &FittedModel, x: &DesignMatrix, y: &[f64]) -> Result<f64> {
    let resid = residuals(model, x, y)?;
    if y.is_empty() {
        return Err(StatsError::empty("r_squared"));
    }

    let tss = sum_squared_deviations(y, shifted_mean(y));
    if tss == 0.0 {
        return Err(StatsError::undefined("r_squared", "y has zero total sum of squares"));
    }
    let rss: f64 = resid.iter().map(|e| e * e).sum();

    Ok(1.0 - rss / tss)
}

/// 1 - (1 - R²)·(n - 1)/(n - p - 1)
pub fn adjusted_r_squared(model: &FittedModel, x: &DesignMatrix, y: &[f64]) -> Result<f64> {
    let n = y.len();
    let p = model.p;
    if n <= p + 1 {
        return Err(StatsError::insufficient("adjusted_r_squared", p + 2, n));
    }
    let r2 = r_squared(model, x, y)?;
    Ok(1.0 - (1.0 - r2) * (n - 1) as f64 / (n - p - 1) as f64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn noiseless_line_is_recovered(
            a in -100.0_f64..100.0,
            b in prop_oneof![-10.0_f64..-0.5, 0.5_f64..10.0],
            x in proptest::collection::vec(-100.0_f64..100.0, 3..30),
        ) {
            prop_assume!(variance(&x).unwrap() > 1e-3);
            let y: Vec<f64> = x.iter().map(|xi| a + b * xi).collect();

            let fit = simple_fit(&x, &y).unwrap();
            prop_assert!((fit.slope - b).abs() < 1e-6, "slope {} vs {}", fit.slope, b);
            prop_assert!((fit.intercept - a).abs() < 1e-6, "intercept {} vs {}", fit.intercept, a);

            let design = DesignMatrix::simple(&x).unwrap();
            let r2 = r_squared(&fit.into_model(), &design, &y).unwrap();
            prop_assert!((r2 - 1.0).abs() < 1e-9, "r2 = {}", r2);
        }
    }
}
