//! Sigma Matrix - Design matrices and least squares
//!
//! Provides the linear algebra the regression layer needs:
//! - `DesignMatrix`: observation-by-feature matrix with explicit bias handling
//! - `normal_equation`: β = (XᵗX)⁻¹Xᵗy solved through the SVD of the column-scaled design
//!
//! Backed by nalgebra in f64.

mod types;
mod solve;

pub use types::DesignMatrix;
pub use solve::normal_equation;
