//! Interleaved views of complex buffers.
//!
//! A buffer of `Complex<T>` is laid out in memory as `[re0, im0, re1, im1, ...]`.
//! Complex kernels operate on that real-valued view, addressing logical
//! element `k` through [`StridedLayout::interleaved`](super::StridedLayout::interleaved):
//! the real part sits at `2 * (offset + k * stride)` and the imaginary part
//! immediately after it.

use num_complex::Complex;

use crate::traits::Real;

/// Reinterprets a complex buffer as its interleaved real-valued view.
///
/// `Complex<T>` is `#[repr(C)]` with `re` then `im`, so `n` complex values
/// are exactly `2n` values of `T`.
///
/// # Example
///
/// ```
/// use num_complex::Complex;
/// use strided_stats::strided::complex::reinterpret;
///
/// let z = [Complex::new(1.0_f64, 2.0), Complex::new(3.0, 4.0)];
/// assert_eq!(reinterpret(&z), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[inline]
#[must_use]
pub fn reinterpret<T: Real>(buffer: &[Complex<T>]) -> &[T] {
    bytemuck::cast_slice(buffer)
}

/// Mutable counterpart of [`reinterpret`].
#[inline]
#[must_use]
pub fn reinterpret_mut<T: Real>(buffer: &mut [Complex<T>]) -> &mut [T] {
    bytemuck::cast_slice_mut(buffer)
}
