//! Outbound records: intervals and hypothesis-test results

use serde::{Deserialize, Serialize};

/// Closed interval [low, high]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Symmetric interval center ± margin
    pub fn around(center: f64, margin: f64) -> Self {
        Self {
            low: center - margin,
            high: center + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Apply a monotone increasing map to both ends
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            low: f(self.low),
            high: f(self.high),
        }
    }
}

/// Degrees of freedom of the reference distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DegreesOfFreedom {
    /// Normal reference (the t limit as df grows without bound)
    Infinite,
    /// Student-t
    One(f64),
    /// F (numerator, denominator)
    Two(f64, f64),
}

/// Result of a hypothesis test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Test statistic (z, t or F)
    pub statistic: f64,

    pub degrees_of_freedom: DegreesOfFreedom,

    /// Two-tailed p-value for z and t, upper tail for F
    pub p_value: f64,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence_interval: Option<Interval>,
}

impl TestResult {
    pub fn new(statistic: f64, degrees_of_freedom: DegreesOfFreedom, p_value: f64) -> Self {
        Self {
            statistic,
            degrees_of_freedom,
            p_value,
            confidence_interval: None,
        }
    }

    /// Builder: attach a confidence interval
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.confidence_interval = Some(interval);
        self
    }

    /// Whether the null hypothesis is rejected at `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
