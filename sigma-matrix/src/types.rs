//! Design matrix type

use std::fmt;
use nalgebra::{DMatrix, DVector};
use sigma_core::{Result, StatsError};

/// Rectangular observation-by-feature matrix.
///
/// Rows are observations, columns are features. A bias column is never added
/// implicitly; use [`DesignMatrix::with_bias`] to prepend one.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    data: DMatrix<f64>,
}

impl DesignMatrix {
    /// Create from row vectors, validating that every row has the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(StatsError::empty("design_matrix"));
        }

        let cols = rows[0].len();
        if cols == 0 {
            return Err(StatsError::invalid_parameter(
                "design_matrix",
                "rows",
                "rows must have at least one column",
            ));
        }

        for row in rows {
            if row.len() != cols {
                return Err(StatsError::size_mismatch("design_matrix", cols, row.len()));
            }
        }

        let data = DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]);
        Ok(Self { data })
    }

    /// Create from rows with a leading column of ones
    pub fn with_bias(rows: &[Vec<f64>]) -> Result<Self> {
        let biased: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| std::iter::once(1.0).chain(row.iter().copied()).collect())
            .collect();
        Self::from_rows(&biased)
    }

    /// Single-feature design `[1, x_i]`, the layout of a simple fit
    pub fn simple(x: &[f64]) -> Result<Self> {
        if x.is_empty() {
            return Err(StatsError::empty("design_matrix"));
        }
        Ok(Self {
            data: DMatrix::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] }),
        })
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Number of observations
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of features, bias column included
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[(row, col)])
        } else {
            None
        }
    }

    /// Copy of one observation row
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row < self.rows() {
            Some(self.data.row(row).iter().copied().collect())
        } else {
            None
        }
    }

    /// Iterate over observation rows
    pub fn row_iter(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
    }

    /// X·β for a coefficient vector of length `cols()`
    pub fn mul_vector(&self, beta: &[f64]) -> Result<Vec<f64>> {
        if beta.len() != self.cols() {
            return Err(StatsError::size_mismatch(
                "design_matrix_product",
                self.cols(),
                beta.len(),
            ));
        }
        let product = &self.data * DVector::from_column_slice(beta);
        Ok(product.iter().copied().collect())
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

impl fmt::Display for DesignMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.row_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = DesignMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(2, 1), Some(6.0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = DesignMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, StatsError::size_mismatch("design_matrix", 2, 1));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(DesignMatrix::from_rows(&[]).is_err());
        assert!(DesignMatrix::from_rows(&[vec![]]).is_err());
        assert!(DesignMatrix::simple(&[]).is_err());
    }

    #[test]
    fn test_with_bias_prepends_ones() {
        let m = DesignMatrix::with_bias(&[vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap();
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), Some(vec![1.0, 4.0, 5.0]));
    }

    #[test]
    fn test_simple_layout() {
        let m = DesignMatrix::simple(&[7.0, 8.0]).unwrap();
        let rows: Vec<_> = m.row_iter().collect();
        assert_eq!(rows, vec![vec![1.0, 7.0], vec![1.0, 8.0]]);
    }

    #[test]
    fn test_mul_vector() {
        let m = DesignMatrix::simple(&[1.0, 2.0, 3.0]).unwrap();
        let y = m.mul_vector(&[1.0, 2.0]).unwrap();
        assert_eq!(y, vec![3.0, 5.0, 7.0]);
        assert!(m.mul_vector(&[1.0]).is_err());
    }

    #[test]
    fn test_display() {
        let m = DesignMatrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(m.to_string(), "[[1.0000, 2.0000]]");
    }
}
