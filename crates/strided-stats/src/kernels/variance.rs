//! Strided mean, variance and standard deviation reductions.
//!
//! All reductions make a single Welford pass over the visited elements:
//!
//! ```text
//! n     += 1
//! delta  = x - mean
//! mean  += delta / n
//! m2    += delta * (x - mean)
//! ```
//!
//! and divide the final sum of squared deviations by `N - correction`
//! (`0` for the population statistic, `1` for the Bessel-corrected sample
//! statistic).
//!
//! # Degenerate inputs
//!
//! | Condition                 | Mean        | Variance / stdev |
//! |---------------------------|-------------|------------------|
//! | `N == 0`                  | `NaN`       | `NaN`            |
//! | `N <= correction`         | computed    | `NaN`            |
//! | `N == 1` or `stride == 0` | `x[offset]` | `0` (`NaN` if `x[offset]` is `NaN`) |
//! | any visited `NaN`         | `NaN`       | `NaN`            |

use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Arithmetic mean of `n` strided elements using a BLAS offset.
#[must_use]
pub fn mean<T: Real>(n: usize, x: &[T], stride_x: isize) -> T {
    mean_ndarray(n, x, stride_x, offset_from_stride(n, stride_x))
}

/// Arithmetic mean of `n` strided elements with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn mean_ndarray<T: Real>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> T {
    if n == 0 {
        return T::nan();
    }
    if n == 1 || stride_x == 0 {
        return x[offset_x];
    }
    welford(n, x, stride_x, offset_x).0
}

/// Variance of `n` strided elements using a BLAS offset.
///
/// # Example
///
/// ```
/// use strided_stats::kernels::variance::variance;
///
/// let x = [1.0_f64, -2.0, 2.0];
/// assert!((variance(3, 1, &x, 1) - 4.333333333333333).abs() < 1e-12);
/// ```
#[must_use]
pub fn variance<T: Real>(n: usize, correction: usize, x: &[T], stride_x: isize) -> T {
    variance_ndarray(n, correction, x, stride_x, offset_from_stride(n, stride_x))
}

/// Variance of `n` strided elements with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn variance_ndarray<T: Real>(
    n: usize,
    correction: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
) -> T {
    mean_variance_ndarray(n, correction, x, stride_x, offset_x).1
}

/// Standard deviation of `n` strided elements using a BLAS offset.
#[must_use]
pub fn stdev<T: Real>(n: usize, correction: usize, x: &[T], stride_x: isize) -> T {
    stdev_ndarray(n, correction, x, stride_x, offset_from_stride(n, stride_x))
}

/// Standard deviation of `n` strided elements with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn stdev_ndarray<T: Real>(
    n: usize,
    correction: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
) -> T {
    variance_ndarray(n, correction, x, stride_x, offset_x).sqrt()
}

/// Mean and variance from one pass, using a BLAS offset.
#[must_use]
pub fn mean_variance<T: Real>(n: usize, correction: usize, x: &[T], stride_x: isize) -> (T, T) {
    mean_variance_ndarray(n, correction, x, stride_x, offset_from_stride(n, stride_x))
}

/// Mean and variance from one pass with an explicit offset.
///
/// Returns `(mean, variance)`. When the divisor `n - correction` is not
/// positive the mean is still reported and the variance is `NaN`.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn mean_variance_ndarray<T: Real>(
    n: usize,
    correction: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
) -> (T, T) {
    if n == 0 {
        return (T::nan(), T::nan());
    }
    if n == 1 || stride_x == 0 {
        let v = x[offset_x];
        if correction >= n || v.is_nan() {
            return (v, T::nan());
        }
        return (v, T::zero());
    }
    let (mu, m2) = welford(n, x, stride_x, offset_x);
    if correction >= n {
        return (mu, T::nan());
    }
    (mu, m2 / T::from_count(n - correction))
}

/// Mean and standard deviation from one pass, using a BLAS offset.
#[must_use]
pub fn mean_stdev<T: Real>(n: usize, correction: usize, x: &[T], stride_x: isize) -> (T, T) {
    mean_stdev_ndarray(n, correction, x, stride_x, offset_from_stride(n, stride_x))
}

/// Mean and standard deviation from one pass with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn mean_stdev_ndarray<T: Real>(
    n: usize,
    correction: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
) -> (T, T) {
    let (mu, var) = mean_variance_ndarray(n, correction, x, stride_x, offset_x);
    (mu, var.sqrt())
}

/// Running `(mean, m2)` over the visited elements.
#[inline]
fn welford<T: Real>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> (T, T) {
    let mut mu = T::zero();
    let mut m2 = T::zero();
    let mut ix = offset_x as isize;
    for k in 1..=n {
        let v = x[ix as usize];
        let delta = v - mu;
        mu = mu + delta / T::from_count(k);
        m2 = m2 + delta * (v - mu);
        ix += stride_x;
    }
    (mu, m2)
}
