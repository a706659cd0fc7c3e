//! Confidence intervals for the mean

use crate::central::mean;
use crate::dispersion::standard_error;
use crate::distributions::normal::normal_critical;
use crate::distributions::t::t_critical;
use sigma_core::{require_min_count, require_probability, Interval, Result};

/// x̄ ± z·SE with z the two-sided normal critical value
pub fn confidence_interval(confidence: f64, xs: &[f64]) -> Result<Interval> {
    require_probability("confidence_interval", confidence)?;
    let m = mean(xs)?;
    let se = standard_error(xs)?;
    let z = normal_critical(confidence)?;
    Ok(Interval::around(m, z * se))
}

/// x̄ ± t·SE with t the two-sided Student-t critical value at df = n - 1
pub fn t_confidence_interval(confidence: f64, xs: &[f64]) -> Result<Interval> {
    require_probability("t_confidence_interval", confidence)?;
    require_min_count(xs, 2, "t_confidence_interval")?;
    let m = mean(xs)?;
    let se = standard_error(xs)?;
    let t = t_critical(confidence, (xs.len() - 1) as f64)?;
    Ok(Interval::around(m, t * se))
}
