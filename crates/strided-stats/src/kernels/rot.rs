//! Plane rotations of real (`drot`) and complex (`csrot`/`zdrot`) vectors.
//!
//! For every logical pair `(x_i, y_i)`:
//!
//! ```text
//! x_i' = c * x_i + s * y_i
//! y_i' = c * y_i - s * x_i
//! ```
//!
//! For complex vectors the real scalars `c` and `s` are applied to the real
//! parts and to the imaginary parts independently. When `c^2 + s^2 = 1`,
//! rotating by `(c, -s)` undoes a rotation by `(c, s)`.
//!
//! The `*_within` variants take a single buffer holding both operands, which
//! is how overlapping or interleaved views of one allocation are rotated.
//! Pairs are processed strictly in logical order, each one reading both
//! operands before writing either.

use num_complex::Complex;

use crate::strided::complex::reinterpret_mut;
use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Applies a plane rotation to `x` and `y` using BLAS offsets.
///
/// Returns the rotated `y`.
pub fn rot<'a, T: Real>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    y: &'a mut [T],
    stride_y: isize,
    c: T,
    s: T,
) -> &'a mut [T] {
    rot_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
        c,
        s,
    )
}

/// Applies a plane rotation to `x` and `y` with explicit offsets.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
#[allow(clippy::too_many_arguments)]
pub fn rot_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [T],
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &'a mut [T] {
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let (xi, yi) = (x[ix as usize], y[iy as usize]);
        y[iy as usize] = c * yi - s * xi;
        x[ix as usize] = c * xi + s * yi;
        ix += stride_x;
        iy += stride_y;
    }
    y
}

/// Applies a plane rotation to two strided views of the same buffer.
///
/// # Panics
///
/// Panics if either layout addresses an index outside `buffer`.
#[allow(clippy::too_many_arguments)]
pub fn rot_within<T: Real>(
    n: usize,
    buffer: &mut [T],
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &mut [T] {
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        rotate_pair(buffer, ix as usize, iy as usize, c, s);
        ix += stride_x;
        iy += stride_y;
    }
    buffer
}

/// Applies a real plane rotation to complex `x` and `y` using BLAS offsets.
///
/// Returns the rotated `y`.
///
/// # Example
///
/// ```
/// use num_complex::Complex;
/// use strided_stats::kernels::rot::rot_complex;
///
/// let mut x = [Complex::new(1.0_f64, 2.0)];
/// let mut y = [Complex::new(3.0_f64, 4.0)];
/// rot_complex(1, &mut x, 1, &mut y, 1, 0.0, 1.0);
/// assert_eq!(x[0], Complex::new(3.0, 4.0));
/// assert_eq!(y[0], Complex::new(-1.0, -2.0));
/// ```
pub fn rot_complex<'a, T: Real>(
    n: usize,
    x: &mut [Complex<T>],
    stride_x: isize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    c: T,
    s: T,
) -> &'a mut [Complex<T>] {
    rot_complex_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
        c,
        s,
    )
}

/// Applies a real plane rotation to complex `x` and `y` with explicit offsets.
///
/// Strides and offsets count complex elements and are doubled internally to
/// address the interleaved `[re, im]` views.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
#[allow(clippy::too_many_arguments)]
pub fn rot_complex_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [Complex<T>],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [Complex<T>],
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &'a mut [Complex<T>] {
    if n == 0 {
        return y;
    }
    {
        let view_x = reinterpret_mut(x);
        let view_y = reinterpret_mut(y);
        let sx = stride_x * 2;
        let sy = stride_y * 2;
        let mut ix = (offset_x * 2) as isize;
        let mut iy = (offset_y * 2) as isize;
        for _ in 0..n {
            for part in 0..2 {
                let (px, py) = (ix as usize + part, iy as usize + part);
                let (xi, yi) = (view_x[px], view_y[py]);
                view_y[py] = c * yi - s * xi;
                view_x[px] = c * xi + s * yi;
            }
            ix += sx;
            iy += sy;
        }
    }
    y
}

/// Applies a real plane rotation to two strided views of the same complex buffer.
///
/// # Panics
///
/// Panics if either layout addresses an index outside `buffer`.
#[allow(clippy::too_many_arguments)]
pub fn rot_complex_within<T: Real>(
    n: usize,
    buffer: &mut [Complex<T>],
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> &mut [Complex<T>] {
    if n == 0 {
        return buffer;
    }
    {
        let view = reinterpret_mut(buffer);
        let sx = stride_x * 2;
        let sy = stride_y * 2;
        let mut ix = (offset_x * 2) as isize;
        let mut iy = (offset_y * 2) as isize;
        for _ in 0..n {
            rotate_pair(view, ix as usize, iy as usize, c, s);
            rotate_pair(view, ix as usize + 1, iy as usize + 1, c, s);
            ix += sx;
            iy += sy;
        }
    }
    buffer
}

#[inline]
fn rotate_pair<T: Real>(buffer: &mut [T], ix: usize, iy: usize, c: T, s: T) {
    let (xi, yi) = (buffer[ix], buffer[iy]);
    buffer[iy] = c * yi - s * xi;
    buffer[ix] = c * xi + s * yi;
}
