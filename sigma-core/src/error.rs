//! Structured errors for statistical computations
//!
//! Every failure is a typed value tied to the call that produced it. Nothing is
//! retried and nothing is replaced by a default: the caller decides what to do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const INSUFFICIENT_SAMPLE: &str = "INSUFFICIENT_SAMPLE";
    pub const SIZE_MISMATCH: &str = "SIZE_MISMATCH";
    pub const DEGENERATE_RANGE: &str = "DEGENERATE_RANGE";
    pub const UNDEFINED_STATISTIC: &str = "UNDEFINED_STATISTIC";
    pub const SINGULAR_DESIGN: &str = "SINGULAR_DESIGN";
    pub const INVALID_PROBABILITY: &str = "INVALID_PROBABILITY";
    pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
    pub const RESAMPLE_FAILED: &str = "RESAMPLE_FAILED";
}

/// Errors produced by the statistics engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("{operation}() requires at least one observation")]
    EmptyInput { operation: &'static str },

    #[error("{operation}() requires at least {required} observations, got {actual}")]
    InsufficientSample {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{operation}() requires equal lengths: {left} vs {right}")]
    SizeMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{operation}() requires a non-zero spread: {detail}")]
    DegenerateRange {
        operation: &'static str,
        detail: String,
    },

    #[error("{operation}() is undefined: {detail}")]
    UndefinedStatistic {
        operation: &'static str,
        detail: String,
    },

    #[error("design matrix ({rows}x{cols}) has a singular XᵗX")]
    SingularDesign { rows: usize, cols: usize },

    #[error("{operation}() requires a probability in (0, 1), got {value}")]
    InvalidProbability { operation: &'static str, value: f64 },

    #[error("{operation}() argument '{name}': {detail}")]
    InvalidParameter {
        operation: &'static str,
        name: &'static str,
        detail: String,
    },

    #[error("statistic failed on resample {index}: {source}")]
    ResampleFailed {
        index: usize,
        #[source]
        source: Box<StatsError>,
    },
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    pub fn insufficient(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientSample {
            operation,
            required,
            actual,
        }
    }

    pub fn size_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Self::SizeMismatch {
            operation,
            left,
            right,
        }
    }

    pub fn degenerate(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::DegenerateRange {
            operation,
            detail: detail.into(),
        }
    }

    pub fn undefined(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::UndefinedStatistic {
            operation,
            detail: detail.into(),
        }
    }

    pub fn invalid_probability(operation: &'static str, value: f64) -> Self {
        Self::InvalidProbability { operation, value }
    }

    pub fn invalid_parameter(
        operation: &'static str,
        name: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            operation,
            name,
            detail: detail.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => codes::EMPTY_INPUT,
            Self::InsufficientSample { .. } => codes::INSUFFICIENT_SAMPLE,
            Self::SizeMismatch { .. } => codes::SIZE_MISMATCH,
            Self::DegenerateRange { .. } => codes::DEGENERATE_RANGE,
            Self::UndefinedStatistic { .. } => codes::UNDEFINED_STATISTIC,
            Self::SingularDesign { .. } => codes::SINGULAR_DESIGN,
            Self::InvalidProbability { .. } => codes::INVALID_PROBABILITY,
            Self::InvalidParameter { .. } => codes::INVALID_PARAMETER,
            Self::ResampleFailed { .. } => codes::RESAMPLE_FAILED,
        }
    }

    /// Serializable summary for the presentation layer
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Flat error record for consumers that only speak JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

/// Require a probability strictly inside (0, 1)
pub fn require_probability(operation: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(StatsError::invalid_probability(operation, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codes() {
        assert_eq!(StatsError::empty("mean").code(), codes::EMPTY_INPUT);
        assert_eq!(
            StatsError::SingularDesign { rows: 3, cols: 4 }.code(),
            codes::SINGULAR_DESIGN
        );
        assert_eq!(
            StatsError::invalid_probability("ci", 1.5).code(),
            codes::INVALID_PROBABILITY
        );
    }

    #[test]
    fn test_display() {
        let err = StatsError::insufficient("correlation_confidence_interval", 4, 3);
        let display = err.to_string();
        assert!(display.contains("at least 4"));
        assert!(display.contains("got 3"));
    }

    #[test]
    fn test_resample_failure_keeps_source() {
        let err = StatsError::ResampleFailed {
            index: 7,
            source: Box::new(StatsError::undefined("skewness", "zero variance")),
        };
        assert_eq!(err.code(), codes::RESAMPLE_FAILED);
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("skewness"));
    }

    #[test]
    fn test_report_serializes() {
        let report = StatsError::size_mismatch("covariance", 3, 4).report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("SIZE_MISMATCH"));
        assert!(json.contains("3 vs 4"));
    }

    #[test]
    fn test_require_probability() {
        assert!(require_probability("ci", 0.95).is_ok());
        assert!(require_probability("ci", 0.0).is_err());
        assert!(require_probability("ci", 1.0).is_err());
        assert!(require_probability("ci", f64::NAN).is_err());
    }
}
