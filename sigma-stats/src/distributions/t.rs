//! Student's t distribution

use super::normal::inverse_normal_cdf;
use super::special::{ln_gamma, regularized_incomplete_beta};
use sigma_core::{require_probability, Result, StatsError};

fn require_df(operation: &'static str, df: f64) -> Result<f64> {
    if df > 0.0 && df.is_finite() {
        Ok(df)
    } else {
        Err(StatsError::invalid_parameter(
            operation,
            "df",
            format!("degrees of freedom must be positive, got {}", df),
        ))
    }
}

/// PDF(x) = Γ((ν+1)/2) / (√(νπ) * Γ(ν/2)) * (1 + x²/ν)^(-(ν+1)/2)
pub fn t_pdf(x: f64, df: f64) -> Result<f64> {
    let nu = require_df("t_pdf", df)?;
    Ok(t_pdf_unchecked(x, nu))
}

fn t_pdf_unchecked(x: f64, nu: f64) -> f64 {
    let coef = ln_gamma((nu + 1.0) / 2.0) - ln_gamma(nu / 2.0) - 0.5 * (nu * std::f64::consts::PI).ln();
    let term = -(nu + 1.0) / 2.0 * (1.0 + x * x / nu).ln();
    (coef + term).exp()
}

/// CDF P(T ≤ x)
pub fn t_cdf(x: f64, df: f64) -> Result<f64> {
    let nu = require_df("t_cdf", df)?;
    Ok(t_cdf_unchecked(x, nu))
}

/// Survival function P(T > x)
pub fn t_sf(x: f64, df: f64) -> Result<f64> {
    let nu = require_df("t_sf", df)?;
    Ok(t_cdf_unchecked(-x, nu))
}

/// Two-tailed p-value P(|T| ≥ |t|)
pub fn t_two_tailed(t: f64, df: f64) -> Result<f64> {
    let nu = require_df("t_two_tailed", df)?;
    Ok((2.0 * t_cdf_unchecked(-t.abs(), nu)).min(1.0))
}

fn t_cdf_unchecked(x: f64, nu: f64) -> f64 {
    if x.is_infinite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }
    // Tail mass on one side is ½·I_{ν/(ν+x²)}(ν/2, ½)
    let tail = 0.5 * regularized_incomplete_beta(nu / 2.0, 0.5, nu / (nu + x * x));
    if x >= 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Quantile for p in (0, 1)
pub fn t_inv(p: f64, df: f64) -> Result<f64> {
    let p = require_probability("t_inv", p)?;
    let nu = require_df("t_inv", df)?;

    // Newton-Raphson iteration starting from normal approximation
    let mut x = inverse_normal_cdf(p);
    for _ in 0..50 {
        let cdf = t_cdf_unchecked(x, nu);
        let pdf = t_pdf_unchecked(x, nu);
        if pdf.abs() < 1e-300 {
            break;
        }
        let dx = (cdf - p) / pdf;
        x -= dx;
        if dx.abs() < 1e-12 * x.abs().max(1.0) {
            break;
        }
    }

    Ok(x)
}

/// Critical value t with P(|T| ≤ t) = confidence
pub fn t_critical(confidence: f64, df: f64) -> Result<f64> {
    let confidence = require_probability("t_critical", confidence)?;
    t_inv(1.0 - (1.0 - confidence) / 2.0, df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_cdf_zero() {
        assert!((t_cdf(0.0, 10.0).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_t_cdf_known_values() {
        // One degree of freedom is Cauchy: F(1) = 3/4
        assert!((t_cdf(1.0, 1.0).unwrap() - 0.75).abs() < 1e-10);
        // t = 2.228 is the 97.5% point at df = 10
        assert!((t_cdf(2.228_138_851_986, 10.0).unwrap() - 0.975).abs() < 1e-8);
    }

    #[test]
    fn test_symmetry() {
        let lower = t_cdf(-1.3, 7.0).unwrap();
        let upper = t_sf(1.3, 7.0).unwrap();
        assert!((lower - upper).abs() < 1e-14);
    }

    #[test]
    fn test_two_tailed() {
        assert!((t_two_tailed(0.0, 5.0).unwrap() - 1.0).abs() < 1e-12);
        let p = t_two_tailed(-2.570_581_836_615, 5.0).unwrap();
        assert!((p - 0.05).abs() < 1e-8);
    }

    #[test]
    fn test_inverse() {
        assert!((t_inv(0.975, 30.0).unwrap() - 2.042_272_456_301).abs() < 1e-7);
        assert!(t_inv(0.5, 4.0).unwrap().abs() < 1e-10);
        assert!((t_critical(0.95, 10.0).unwrap() - 2.228_138_851_986).abs() < 1e-7);
    }

    #[test]
    fn test_pdf() {
        // Cauchy density at zero is 1/π
        assert!((t_pdf(0.0, 1.0).unwrap() - 1.0 / std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_df() {
        assert!(t_cdf(1.0, 0.0).is_err());
        assert!(t_sf(1.0, -2.0).is_err());
        assert!(t_inv(0.5, f64::NAN).is_err());
    }
}
