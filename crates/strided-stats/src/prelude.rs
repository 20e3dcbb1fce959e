//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use strided_stats::prelude::*;
//!
//! let x = [1.0_f64, 2.0, 3.0, 4.0];
//! assert_eq!(asum(4, &x, 1), 10.0);
//! assert_eq!(mean(4, &x, -1), 2.5);
//!
//! let mut acc = MovingMean::<f64>::new(2).unwrap();
//! assert_eq!(acc.observe_all(x), vec![1.0, 1.5, 2.5, 3.5]);
//! ```
//!
//! # Contents
//!
//! - [`Error`], [`Result`]
//! - [`Real`], [`Accumulator`]
//! - [`StridedLayout`], [`offset_from_stride`]
//! - every kernel entry point from [`crate::kernels`]
//! - every accumulator and its output types from [`crate::incr`]
//! - [`BatchProcessor`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::incr::Accumulator;
pub use crate::traits::Real;

// Addressing
pub use crate::strided::{offset_from_stride, StridedLayout};

// Kernels
pub use crate::kernels::{
    asum, asum_ndarray, axpy, axpy_ndarray, copy, copy_complex, copy_complex_ndarray,
    copy_ndarray, dot, dot_ndarray, mean, mean_ndarray, mean_stdev, mean_stdev_ndarray,
    mean_variance, mean_variance_ndarray, nrm2, nrm2_ndarray, rot, rot_complex,
    rot_complex_ndarray, rot_complex_within, rot_ndarray, rot_within, scal, scal_ndarray,
    stdev, stdev_ndarray, swap, swap_ndarray, variance, variance_ndarray,
};

// Accumulators
pub use crate::incr::{
    Mean, MeanStdev, MeanVariance, MovingCovariance, MovingMean, MovingMeanStdev,
    MovingMeanVariance, MovingStats, MovingStdev, MovingVariance, Stdev, Variance, WeightedMean,
    Window,
};

// Batch processing
pub use crate::batch::BatchProcessor;
