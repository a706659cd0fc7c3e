//! Sigma Core - Fundamental types
//!
//! This crate provides the core types used throughout Sigma:
//! - `StatsError`: Typed computation errors with machine-readable codes
//! - `PairedSample`, `GroupedSample`: Validated input shapes
//! - `Interval`, `TestResult`: Outbound result records
//! - `Settings`: Explicit engine defaults

mod error;
mod result;
mod sample;
mod settings;

pub use error::{codes, require_probability, ErrorReport, Result, StatsError};
pub use result::{DegreesOfFreedom, Interval, TestResult};
pub use sample::{require_min_count, require_non_empty, GroupedSample, PairedSample};
pub use settings::{
    Settings, DEFAULT_ALPHA, DEFAULT_BOOTSTRAP_SIZE, DEFAULT_CONFIDENCE,
    DEFAULT_SINGULAR_TOLERANCE,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        DegreesOfFreedom, GroupedSample, Interval, PairedSample, Result, Settings, StatsError,
        TestResult,
    };
    pub use crate::error::codes;
}
