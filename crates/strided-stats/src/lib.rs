//! strided-stats: strided numeric kernels and streaming statistics
//!
//! This crate provides two independent families of numeric building blocks:
//!
//! - **Strided kernels**: BLAS-style operations (dot product, copy, plane
//!   rotation, variance reductions, ...) over flat buffers addressed by
//!   `(n, stride, offset)`, with positive, negative and zero strides
//! - **Incremental accumulators**: O(1)-space, single-pass statistics (mean,
//!   variance, standard deviation, covariance) over unbounded streams or a
//!   fixed sliding window
//!
//! # Features
//!
//! - **Access patterns**: any stride sign, explicit offsets into shared buffers
//! - **Numerical stability**: Welford recurrences instead of sums of squares
//! - **Generics**: works with both `f32` and `f64`
//! - **NaN policy**: `NaN` poisons a statistic until it leaves the window
//!
//! # Quick Start
//!
//! ```
//! use strided_stats::prelude::*;
//!
//! // Kernels take an explicit length, stride and (for `_ndarray`) offset.
//! let x = [3.0_f64, -4.0, 1.0];
//! let y = [1.0_f64, -2.0, 3.0];
//! assert_eq!(dot_ndarray(3, &x, 1, 0, &y, 1, 0), 14.0);
//!
//! // Accumulators ingest one value at a time.
//! let mut acc = MovingStdev::<f64>::new(3).unwrap();
//! for v in [2.0, -5.0, 3.0] {
//!     acc.observe(v);
//! }
//! assert!((acc.value().unwrap() - 4.358_898_943_540_674).abs() < 1e-12);
//! ```
//!
//! # Error Handling
//!
//! Kernels never fail: an empty range returns `0`, `NaN` or the untouched
//! output buffer. Fallible operations (layout validation, accumulator
//! construction) return [`Result<T, Error>`]:
//!
//! ```
//! use strided_stats::prelude::*;
//!
//! assert!(MovingVariance::<f64>::new(0).is_err());
//! assert!(StridedLayout::new(3, 2, 0).validate(4).is_err());
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: accumulator
//! construction and window rescans at `debug`, failed layout validation at
//! `trace`. Install any logger (e.g. `env_logger`) to see them.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_arguments)]

pub mod batch;
pub mod error;
pub mod incr;
pub mod kernels;
pub mod prelude;
pub mod strided;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use incr::Accumulator;
pub use strided::{offset_from_stride, StridedLayout};
pub use traits::Real;
