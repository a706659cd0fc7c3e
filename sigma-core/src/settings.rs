//! Engine settings
//!
//! Plain values passed explicitly to the operations that need them. There is
//! no global configuration.

use crate::error::{require_probability, Result, StatsError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_BOOTSTRAP_SIZE: usize = 10_000;
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Defaults shared by interval, test, fit and resampling operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Confidence level for intervals
    pub confidence: f64,

    /// Significance level for tests
    pub alpha: f64,

    /// Number of bootstrap resamples
    pub bootstrap_size: usize,

    /// Seed for the resampling RNG; `None` draws from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Smallest accepted ratio of extreme singular values of the column-scaled design
    pub singular_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            alpha: DEFAULT_ALPHA,
            bootstrap_size: DEFAULT_BOOTSTRAP_SIZE,
            seed: None,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_bootstrap_size(mut self, size: usize) -> Self {
        self.bootstrap_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// Check every field against its domain
    pub fn validate(&self) -> Result<()> {
        require_probability("settings", self.confidence)?;
        require_probability("settings", self.alpha)?;
        if self.bootstrap_size == 0 {
            return Err(StatsError::invalid_parameter(
                "settings",
                "bootstrap_size",
                "must be at least 1",
            ));
        }
        if !(self.singular_tolerance.is_finite() && self.singular_tolerance >= 0.0) {
            return Err(StatsError::invalid_parameter(
                "settings",
                "singular_tolerance",
                format!("must be finite and non-negative, got {}", self.singular_tolerance),
            ));
        }
        Ok(())
    }
}
