//! Interchange of two strided vectors (`dswap`).

use crate::strided::offset_from_stride;
use crate::traits::Real;

/// Block size of the contiguous fast path.
const UNROLL: usize = 3;

/// Swaps `n` elements of `x` and `y` using BLAS offsets. Returns `y`.
pub fn swap<'a, T: Real>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    y: &'a mut [T],
    stride_y: isize,
) -> &'a mut [T] {
    swap_ndarray(
        n,
        x,
        stride_x,
        offset_from_stride(n, stride_x),
        y,
        stride_y,
        offset_from_stride(n, stride_y),
    )
}

/// Swaps `n` elements of `x` and `y` with explicit offsets. Returns `y`.
///
/// # Panics
///
/// Panics if the layouts address an index outside `x` or `y`.
pub fn swap_ndarray<'a, T: Real>(
    n: usize,
    x: &mut [T],
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
        let xs = &mut x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let m = n % UNROLL;
        xs[..m].swap_with_slice(&mut ys[..m]);
        for i in (m..n).step_by(UNROLL) {
            xs[i..i + UNROLL].swap_with_slice(&mut ys[i..i + UNROLL]);
        }
        return y;
    }

    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        std::mem::swap(&mut x[ix as usize], &mut y[iy as usize]);
        ix += stride_x;
        iy += stride_y;
    }
    y
}
