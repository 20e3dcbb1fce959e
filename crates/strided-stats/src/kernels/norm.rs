//! Norms of strided vectors (`dasum`, `dnrm2`).

use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Block size of the contiguous `asum` fast path.
const ASUM_UNROLL: usize = 6;

/// Sum of absolute values of `n` elements of `x` using BLAS offsets.
///
/// Returns `0` when `n == 0`.
#[must_use]
pub fn asum<T: Real>(n: usize, x: &[T], stride_x: isize) -> T {
    asum_ndarray(n, x, stride_x, offset_from_stride(n, stride_x))
}

/// Sum of absolute values of `n` elements of `x` with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn asum_ndarray<T: Real>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> T {
    if n == 0 {
        return T::zero();
    }
    let mut acc = T::zero();
    if stride_x == 1 {
        let xs = &x[offset_x..offset_x + n];
        let m = n % ASUM_UNROLL;
        for v in &xs[..m] {
            acc = acc + v.abs();
        }
        for i in (m..n).step_by(ASUM_UNROLL) {
            acc = acc
                + (xs[i].abs()
                    + xs[i + 1].abs()
                    + xs[i + 2].abs()
                    + xs[i + 3].abs()
                    + xs[i + 4].abs()
                    + xs[i + 5].abs());
        }
        return acc;
    }

    let mut ix = offset_x as isize;
    for _ in 0..n {
        acc = acc + x[ix as usize].abs();
        ix += stride_x;
    }
    acc
}

/// Euclidean norm of `n` elements of `x` using BLAS offsets.
#[must_use]
pub fn nrm2<T: Real>(n: usize, x: &[T], stride_x: isize) -> T {
    nrm2_ndarray(n, x, stride_x, offset_from_stride(n, stride_x))
}

/// Euclidean norm of `n` elements of `x` with an explicit offset.
///
/// The sum of squares is kept relative to the largest magnitude seen so
/// far (`scale * sqrt(ssq)`), so intermediate squares neither overflow nor
/// underflow. Returns `0` when `n == 0`, `NaN` if any element is `NaN`,
/// and otherwise `inf` if any element is infinite.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
#[must_use]
pub fn nrm2_ndarray<T: Real>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> T {
    if n == 0 {
        return T::zero();
    }
    let mut scale = T::zero();
    let mut ssq = T::one();
    let mut infinite = false;
    let mut ix = offset_x as isize;
    for _ in 0..n {
        let v = x[ix as usize];
        if v.is_nan() {
            return T::nan();
        }
        if v.is_infinite() {
            // Keep scanning: a later NaN still wins.
            infinite = true;
        } else if v != T::zero() {
            let ax = v.abs();
            if scale < ax {
                let r = scale / ax;
                ssq = T::one() + ssq * r * r;
                scale = ax;
            } else {
                let r = ax / scale;
                ssq = ssq + r * r;
            }
        }
        ix += stride_x;
    }
    if infinite {
        return T::infinity();
    }
    scale * ssq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asum_contiguous() {
        let x = [1.0_f64, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0];
        assert_eq!(asum(7, &x, 1), 28.0);
    }

    #[test]
    fn test_asum_strided() {
        let x = [-1.0_f64, 100.0, -2.0, 100.0, -3.0];
        assert_eq!(asum(3, &x, 2), 6.0);
        assert_eq!(asum(3, &x, -2), 6.0);
    }

    #[test]
    fn test_asum_zero_length() {
        assert_eq!(asum::<f64>(0, &[], 1), 0.0);
    }

    #[test]
    fn test_nrm2_basic() {
        let x = [3.0_f64, -4.0];
        assert!((nrm2(2, &x, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_nrm2_avoids_overflow() {
        let x = [3e200_f64, 4e200];
        let norm = nrm2(2, &x, 1);
        assert!(norm.is_finite());
        assert!((norm / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nrm2_zeros_and_nan() {
        assert_eq!(nrm2(3, &[0.0_f64; 3], 1), 0.0);
        assert!(nrm2(2, &[1.0_f64, f64::NAN], 1).is_nan());
    }

    #[test]
    fn test_nrm2_infinities() {
        let x = [f64::INFINITY, 2.0, f64::NEG_INFINITY];
        assert_eq!(nrm2(3, &x, 1), f64::INFINITY);
        assert_eq!(nrm2(2, &x, -2), f64::INFINITY);
        assert!(nrm2(3, &[f64::INFINITY, f64::INFINITY, f64::NAN], 1).is_nan());
    }

    #[test]
    fn test_nrm2_offset() {
        let x = [100.0_f64, 6.0, 8.0];
        assert!((nrm2_ndarray(2, &x, 1, 1) - 10.0).abs() < 1e-12);
    }
}
