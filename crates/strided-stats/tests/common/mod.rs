//! Shared test utilities for strided-stats tests.
//!
//! Reference implementations here are deliberately naive (two-pass, one
//! element at a time) so kernel and accumulator output can be checked
//! against something obviously correct.

/// Approximate equality check; two NaN values compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Relative approximate equality for values of varying magnitude.
///
/// Values within `1e-12` of each other also match, so results near zero do
/// not need a relative bound.
#[allow(dead_code)]
pub fn approx_eq_rel(a: f64, b: f64, rel: f64) -> bool {
    if approx_eq(a, b, 1e-12) {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() / scale < rel
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Gathers the logical elements of a strided view into a contiguous vector.
#[allow(dead_code)]
pub fn gather(n: usize, x: &[f64], stride: isize, offset: usize) -> Vec<f64> {
    (0..n)
        .map(|k| x[(offset as isize + k as isize * stride) as usize])
        .collect()
}

/// One-at-a-time dot product in logical order.
#[allow(dead_code)]
pub fn naive_dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |acc, (a, b)| acc + a * b)
}

/// Two-pass variance with divisor `n - correction`.
#[allow(dead_code)]
pub fn naive_variance(data: &[f64], correction: usize) -> f64 {
    let n = data.len();
    if n == 0 || correction >= n {
        return f64::NAN;
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - correction) as f64
}

/// Sliding sample standard deviation over `window`, `0` for a single value.
#[allow(dead_code)]
pub fn naive_moving_stdev(data: &[f64], window: usize) -> Vec<f64> {
    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &data[start..=i];
            if slice.len() == 1 {
                if slice[0].is_nan() {
                    f64::NAN
                } else {
                    0.0
                }
            } else {
                naive_variance(slice, 1).sqrt()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_negative_stride() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(gather(2, &x, -2, 3), vec![4.0, 2.0]);
    }

    #[test]
    fn test_naive_variance_degenerate() {
        assert!(naive_variance(&[], 0).is_nan());
        assert!(naive_variance(&[1.0], 1).is_nan());
        assert_eq!(naive_variance(&[1.0], 0), 0.0);
    }
}
