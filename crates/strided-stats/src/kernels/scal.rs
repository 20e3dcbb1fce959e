//! Scaling and scaled accumulation of strided vectors (`dscal`, `daxpy`).

use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Block size of the contiguous `scal` fast path.
const SCAL_UNROLL: usize = 5;

/// Block size of the contiguous `axpy` fast path.
const AXPY_UNROLL: usize = 4;

/// Multiplies `n` elements of `x` by `alpha` in place using BLAS offsets.
pub fn scal<T: Real>(n: usize, alpha: T, x: &mut [T], stride_x: isize) -> &mut [T] {
    scal_ndarray(n, alpha, x, stride_x, offset_from_stride(n, stride_x))
}

/// Multiplies `n` elements of `x` by `alpha` in place with an explicit offset.
///
/// # Panics
///
/// Panics if the layout addresses an index outside `x`.
pub fn scal_ndarray<T: Real>(
    n: usize,
    alpha: T,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
) -> &mut [T] {
    if n == 0 {
        return x;
    }
    if stride_x == 1 {
        let xs = &mut x[offset_x..offset_x + n];
        let m = n % SCAL_UNROLL;
        for v in &mut xs[..m] {
            *v = alpha * *v;
        }
        for i in (m..n).step_by(SCAL_UNROLL) {
            xs[i] = alpha * xs[i];
            xs[i + 1] = alpha * xs[i + 1];
            xs[i + 2] = alpha * xs[i + 2];
            xs[i + 3] = alpha * xs[i + 3];
            xs[i + 4] = alpha * xs[i + 4];
        }
        return x;
    }

    let mut ix = offset_x as isize;
    for _ in 0..n {
        x[ix as usize] = alpha * x[ix as usize];
        ix += stride_x;
    }
    x
}

/// Computes `y = alpha * x + y` using BLAS offsets.
///
/// # Example
///
/// ```
/// use strided_stats::kernels::scal::axpy;
///
/// let x = [1.0_f64, 2.0, 3.0];
/// let mut y = [1.0_f64, 1.0, 1.0];
/// axpy(3, 2.0, &x, 1, &mut y, 1);
/// assert_eq!(y, [3.0, 5.0, 7.0]);
/// ```
pub fn axpy<'a, T: Real>(
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    y: &'a mut [T],
    stride_y: isize,
) -> &'a mut [T] {
    axpy_ndarray(
        n,
        alpha,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
    )
}

/// Computes `y = alpha * x + y` with explicit offsets.
///
/// `y` is returned untouched when `n == 0` or `alpha == 0`.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
#[allow(clippy::too_many_arguments)]
pub fn axpy_ndarray<'a, T: Real>(
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [T] {
    if n == 0 || alpha == T::zero() {
        return y;
    }
    if stride_x == 1 && stride_y == 1 {
        let xs = &x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let m = n % AXPY_UNROLL;
        for i in 0..m {
            ys[i] = ys[i] + alpha * xs[i];
        }
        for i in (m..n).step_by(AXPY_UNROLL) {
            ys[i] = ys[i] + alpha * xs[i];
            ys[i + 1] = ys[i + 1] + alpha * xs[i + 1];
            ys[i + 2] = ys[i + 2] + alpha * xs[i + 2];
            ys[i + 3] = ys[i + 3] + alpha * xs[i + 3];
        }
        return y;
    }

    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = y[iy as usize] + alpha * x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    y
}
