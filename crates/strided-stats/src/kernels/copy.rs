//! Strided copies of real (`dcopy`) and complex (`ccopy`/`zcopy`) vectors.
//!
//! Both kernels write into a caller-supplied destination and hand the same
//! buffer back. A zero-length copy leaves the destination untouched.

use num_complex::Complex;

use crate::strided::complex::{reinterpret, reinterpret_mut};
use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Block size of the contiguous real fast path.
const UNROLL: usize = 8;

/// Copies `n` elements of `x` into `y` using BLAS offsets.
pub fn copy<'a, T: Real>(
    n: usize,
    x: &[T],
    stride_x: isize,
    y: &'a mut [T],
    stride_y: isize,
) -> &'a mut [T] {
    copy_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
    )
}

/// Copies `n` elements of `x` into `y` with explicit offsets.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
pub fn copy_ndarray<'a, T: Real>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [T] {
    if n == 0 {
        return y;
    }
    if stride_x == 1 && stride_y == 1 {
        let src = &x[offset_x..offset_x + n];
        let dst = &mut y[offset_y..offset_y + n];
        let m = n % UNROLL;
        dst[..m].copy_from_slice(&src[..m]);
        for i in (m..n).step_by(UNROLL) {
            dst[i..i + UNROLL].copy_from_slice(&src[i..i + UNROLL]);
        }
        return y;
    }

    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    y
}

/// Copies `n` complex elements of `x` into `y` using BLAS offsets.
///
/// # Example
///
/// ```
/// use num_complex::Complex;
/// use strided_stats::kernels::copy::copy_complex;
///
/// let x = [Complex::new(1.0_f32, 2.0), Complex::new(3.0, 4.0)];
/// let mut y = [Complex::new(0.0_f32, 0.0); 2];
/// copy_complex(2, &x, 1, &mut y, -1);
/// assert_eq!(y, [Complex::new(3.0, 4.0), Complex::new(1.0, 2.0)]);
/// ```
pub fn copy_complex<'a, T: Real>(
    n: usize,
    x: &[Complex<T>],
    stride_x: isize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
) -> &'a mut [Complex<T>] {
    copy_complex_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
    )
}

/// Copies `n` complex elements of `x` into `y` with explicit offsets.
///
/// Strides and offsets count complex elements; they are doubled internally
/// to address the interleaved `[re, im]` view, and each logical element is
/// copied as a real/imaginary pair.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
pub fn copy_complex_ndarray<'a, T: Real>(
    n: usize,
    x: &[Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [Complex<T>] {
    if n == 0 {
        return y;
    }
    {
        let view_x = reinterpret(x);
        let view_y = reinterpret_mut(y);
        let sx = stride_x * 2;
        let sy = stride_y * 2;
        let mut ix = (offset_x * 2) as isize;
        let mut iy = (offset_y * 2) as isize;
        for _ in 0..n {
            view_y[iy as usize] = view_x[ix as usize];
            view_y[iy as usize + 1] = view_x[ix as usize + 1];
            ix += sx;
            iy += sy;
        }
    }
    y
}
