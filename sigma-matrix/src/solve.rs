//! Least-squares solver for β = (XᵗX)⁻¹Xᵗy

use nalgebra::DVector;
use sigma_core::{Result, StatsError};
use tracing::debug;

use crate::types::DesignMatrix;

/// Ratio of the smallest to the largest singular value. Zero for the zero matrix.
fn reciprocal_condition(singular_values: &DVector<f64>) -> f64 {
    let max = singular_values.iter().copied().fold(0.0_f64, f64::max);
    let min = singular_values.iter().copied().fold(f64::INFINITY, f64::min);
    if max > 0.0 && max.is_finite() {
        min / max
    } else {
        0.0
    }
}

/// Solve the least-squares normal equation for `y` against `x`.
///
/// The rank decision and the solve both use the SVD of X with every column
/// scaled to unit norm, so feature units and offsets do not square into the
/// condition number the way they do for XᵗX. `tolerance` is the smallest
/// accepted ratio between the smallest and the largest singular value of the
/// scaled design; anything below is treated as singular.
pub fn normal_equation(x: &DesignMatrix, y: &[f64], tolerance: f64) -> Result<Vec<f64>> {
    let (rows, cols) = (x.rows(), x.cols());

    if y.len() != rows {
        return Err(StatsError::size_mismatch("normal_equation", rows, y.len()));
    }
    if cols > rows {
        debug!(rows, cols, "more features than observations");
        return Err(StatsError::SingularDesign { rows, cols });
    }

    let norms: Vec<f64> = x.as_dmatrix().column_iter().map(|c| c.norm()).collect();
    if norms.iter().any(|n| !(*n > 0.0 && n.is_finite())) {
        debug!(rows, cols, "design has a zero or non-finite column");
        return Err(StatsError::SingularDesign { rows, cols });
    }

    let mut scaled = x.as_dmatrix().clone();
    for (j, norm) in norms.iter().enumerate() {
        let mut column = scaled.column_mut(j);
        column /= *norm;
    }

    let svd = scaled.svd(true, true);
    let rcond = reciprocal_condition(&svd.singular_values);
    if !(rcond > tolerance) {
        debug!(rows, cols, rcond, tolerance, "design is rank deficient");
        return Err(StatsError::SingularDesign { rows, cols });
    }

    let beta_scaled = svd
        .solve(&DVector::from_column_slice(y), 0.0)
        .map_err(|_| StatsError::SingularDesign { rows, cols })?;

    // Undo the column scaling: X·β = (X·D⁻¹)·(D·β)
    Ok(beta_scaled
        .iter()
        .zip(&norms)
        .map(|(beta, norm)| beta / norm)
        .collect())
}
