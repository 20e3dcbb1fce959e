//! Stateless kernels over strided buffers.
//!
//! Every kernel reads (and, for transformations, writes) caller-supplied
//! buffers addressed by `(n, stride, offset)` triples as described in
//! [`crate::strided`]. Kernels keep no state between calls and never
//! allocate an output buffer; transformations hand the destination back.
//!
//! # Entry Points
//!
//! Each kernel comes in two flavours:
//!
//! - `kernel(n, x, stride_x, ...)`: the BLAS convention, where the offset is
//!   implied by the stride sign (see [`offset_from_stride`](crate::strided::offset_from_stride))
//! - `kernel_ndarray(n, x, stride_x, offset_x, ...)`: explicit offsets, for
//!   views into a larger shared buffer
//!
//! # Kernels
//!
//! ## Reductions
//!
//! - [`dot`] - Inner product, 5-way unrolled when both strides are `1`
//! - [`asum`] - Sum of absolute values
//! - [`nrm2`] - Euclidean norm without intermediate overflow
//! - [`mean`], [`variance`], [`stdev`], [`mean_variance`], [`mean_stdev`] -
//!   Welford reductions with a configurable correction
//!
//! ## Transformations
//!
//! - [`copy`], [`copy_complex`] - Strided copies
//! - [`rot`], [`rot_complex`] - Plane rotation
//! - [`swap`] - Interchange two vectors
//! - [`scal`], [`axpy`] - Scaling and scaled accumulation
//!
//! # Degenerate Sizes
//!
//! `n == 0` never dereferences a buffer. Reductions return their identity
//! (`0`) or `NaN` for statistics that are undefined on an empty range;
//! transformations return the destination unchanged.

pub mod copy;
pub mod dot;
pub mod norm;
pub mod rot;
pub mod scal;
pub mod swap;
pub mod variance;

// Re-export kernels for convenient access, e.g.
// `use strided_stats::kernels::dot;`

pub use copy::{copy, copy_complex, copy_complex_ndarray, copy_ndarray};
pub use dot::{dot, dot_ndarray};
pub use norm::{asum, asum_ndarray, nrm2, nrm2_ndarray};
pub use rot::{
    rot, rot_complex, rot_complex_ndarray, rot_complex_within, rot_ndarray, rot_within,
};
pub use scal::{axpy, axpy_ndarray, scal, scal_ndarray};
pub use swap::{swap, swap_ndarray};
pub use variance::{
    mean, mean_ndarray, mean_stdev, mean_stdev_ndarray, mean_variance, mean_variance_ndarray,
    stdev, stdev_ndarray, variance, variance_ndarray,
};
