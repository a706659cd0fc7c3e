//! F distribution

use super::special::{ln_gamma, regularized_incomplete_beta};
use sigma_core::{Result, StatsError};

fn require_dfs(operation: &'static str, d1: f64, d2: f64) -> Result<(f64, f64)> {
    if d1 > 0.0 && d2 > 0.0 && d1.is_finite() && d2.is_finite() {
        Ok((d1, d2))
    } else {
        Err(StatsError::invalid_parameter(
            operation,
            "df",
            format!("requires df1 > 0 and df2 > 0, got ({}, {})", d1, d2),
        ))
    }
}

pub fn f_pdf(x: f64, df1: f64, df2: f64) -> Result<f64> {
    let (d1, d2) = require_dfs("f_pdf", df1, df2)?;
    if x < 0.0 {
        return Ok(0.0);
    }
    if x == 0.0 {
        return Ok(if d1 < 2.0 {
            f64::INFINITY
        } else if d1 == 2.0 {
            1.0
        } else {
            0.0
        });
    }

    let log_num = (d1 / 2.0) * d1.ln() + (d2 / 2.0) * d2.ln() + ((d1 / 2.0) - 1.0) * x.ln();
    let log_den = ln_gamma(d1 / 2.0) + ln_gamma(d2 / 2.0) - ln_gamma((d1 + d2) / 2.0)
        + ((d1 + d2) / 2.0) * (d1 * x + d2).ln();

    Ok((log_num - log_den).exp())
}

/// CDF = I_{d1·x/(d1·x+d2)}(d1/2, d2/2)
pub fn f_cdf(x: f64, df1: f64, df2: f64) -> Result<f64> {
    let (d1, d2) = require_dfs("f_cdf", df1, df2)?;
    if x <= 0.0 {
        return Ok(0.0);
    }
    Ok(regularized_incomplete_beta(d1 / 2.0, d2 / 2.0, d1 * x / (d1 * x + d2)))
}

/// Survival function P(F > x) = I_{d2/(d2+d1·x)}(d2/2, d1/2)
pub fn f_sf(x: f64, df1: f64, df2: f64) -> Result<f64> {
    let (d1, d2) = require_dfs("f_sf", df1, df2)?;
    if x <= 0.0 {
        return Ok(1.0);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }
    Ok(regularized_incomplete_beta(d2 / 2.0, d1 / 2.0, d2 / (d2 + d1 * x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_cdf() {
        // F(1, 5, 10) should be around 0.5
        let f = f_cdf(1.0, 5.0, 10.0).unwrap();
        assert!(f > 0.4 && f < 0.6);
    }

    #[test]
    fn test_known_critical_value() {
        // 95th percentile of F(2, 6) is 5.143
        let sf = f_sf(5.143_252_849_784, 2.0, 6.0).unwrap();
        assert!((sf - 0.05).abs() < 1e-8);
    }

    #[test]
    fn test_sf_complements_cdf() {
        let x = 2.7;
        let total = f_cdf(x, 3.0, 12.0).unwrap() + f_sf(x, 3.0, 12.0).unwrap();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sf_at_zero_is_one() {
        assert_eq!(f_sf(0.0, 2.0, 6.0).unwrap(), 1.0);
        assert_eq!(f_cdf(0.0, 2.0, 6.0).unwrap(), 0.0);
    }

    #[test]
    fn test_pdf_integrates_near_one() {
        let step = 0.001;
        let mut total = 0.0;
        let mut x = step / 2.0;
        while x < 60.0 {
            total += f_pdf(x, 4.0, 9.0).unwrap() * step;
            x += step;
        }
        assert!((total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_df() {
        assert!(f_cdf(1.0, 0.0, 3.0).is_err());
        assert!(f_sf(1.0, 3.0, -1.0).is_err());
    }
}
