//! Dot product of two strided vectors (`ddot`).
//!
//! # Algorithm
//!
//! When both strides are `1` the loop is unrolled by five: the `n % 5`
//! leading elements are accumulated one at a time, then the remainder is
//! consumed in blocks of five whose partial sum is added to the running
//! total. Any other stride combination takes the plain one-at-a-time loop.
//!
//! Summation is ordinary IEEE-754 accumulation in visitation order (no
//! compensation), so the unrolled and plain paths agree exactly on data whose
//! partial sums are representable, and to within rounding otherwise.
//!
//! # Example
//!
//! ```
//! use strided_stats::kernels::dot::dot;
//!
//! let x = [3.0_f64, -4.0, 1.0];
//! let y = [1.0_f64, -2.0, 3.0];
//! assert_eq!(dot(3, &x, 1, &y, 1), 14.0);
//! ```

use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Block size of the contiguous fast path.
const UNROLL: usize = 5;

/// Computes the dot product of `x` and `y` using BLAS offsets.
///
/// Offsets are implied by the strides (see
/// [`offset_from_stride`]): a negative stride starts at the far end of the
/// buffer. Returns `0` when `n == 0`.
#[must_use]
pub fn dot<T: Real>(n: usize, x: &[T], stride_x: isize, y: &[T], stride_y: isize) -> T {
    dot_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
    )
}

/// Computes the dot product of `x` and `y` with explicit offsets.
///
/// # Arguments
///
/// * `n` - Number of logical elements
/// * `x`, `stride_x`, `offset_x` - First operand and its addressing
/// * `y`, `stride_y`, `offset_y` - Second operand and its addressing
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
#[must_use]
pub fn dot_ndarray<T: Real>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &[T],
    stride_y: isize,
    offset_y: usize,
) -> T {
    if n == 0 {
        return T::zero();
    }
    if stride_x == 1 && stride_y == 1 {
        return dot_contiguous(&x[offset_x..offset_x + n], &y[offset_y..offset_y + n]);
    }

    let mut acc = T::zero();
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        acc = acc + x[ix as usize] * y[iy as usize];
        ix += stride_x;
        iy += stride_y;
    }
    acc
}

/// Five-way unrolled accumulation over equally long contiguous slices.
#[inline]
fn dot_contiguous<T: Real>(x: &[T], y: &[T]) -> T {
    let n = x.len();
    let m = n % UNROLL;

    let mut acc = T::zero();
    for i in 0..m {
        acc = acc + x[i] * y[i];
    }
    for i in (m..n).step_by(UNROLL) {
        acc = acc
            + (x[i] * y[i]
                + x[i + 1] * y[i + 1]
                + x[i + 2] * y[i + 2]
                + x[i + 3] * y[i + 3]
                + x[i + 4] * y[i + 4]);
    }
    acc
}
