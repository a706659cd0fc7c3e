//! Helper functions for statistical operations
//!
//! Shared numeric kernels. Callers validate their inputs first.

/// Sum of values
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Mean of a non-empty slice, computed around the first element.
///
/// Shifting keeps the accumulated deviations small and makes the mean of a
/// constant sequence exactly that constant.
pub fn shifted_mean(xs: &[f64]) -> f64 {
    let shift = xs[0];
    let deviation: f64 = xs.iter().map(|x| x - shift).sum();
    shift + deviation / xs.len() as f64
}

/// Σ(x - center)²
pub fn sum_squared_deviations(xs: &[f64], center: f64) -> f64 {
    xs.iter().map(|x| (x - center) * (x - center)).sum()
}

/// Sort values ascending (returns new sorted vector)
pub fn sorted(xs: &[f64]) -> Vec<f64> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_shifted_mean_constant_is_exact() {
        let xs = [0.1; 7];
        assert_eq!(shifted_mean(&xs), 0.1);
    }

    #[test]
    fn test_shifted_mean() {
        assert_eq!(shifted_mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_sum_squared_deviations() {
        assert_eq!(sum_squared_deviations(&[1.0, 2.0, 3.0], 2.0), 2.0);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }
}
