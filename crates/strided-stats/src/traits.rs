//! Core numeric traits for strided-stats.
//!
//! The primary trait is [`Real`], a thin extension of `num_traits::Float`
//! implemented for every floating-point type the kernels and accumulators
//! operate on (`f32` and `f64` in practice).
//!
//! # Example
//!
//! ```
//! use strided_stats::traits::Real;
//!
//! fn average<T: Real>(data: &[T]) -> T {
//!     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
//!     sum / T::from_count(data.len())
//! }
//!
//! assert!((average(&[1.0_f64, 2.0, 3.0]) - 2.0).abs() < 1e-12);
//! ```

use bytemuck::Pod;
use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for floating-point element types stored in strided buffers and
/// fed into accumulators.
///
/// # Type Bounds
///
/// - `Float`: IEEE-754 arithmetic, `NaN` handling, `sqrt`
/// - `NumCast`: conversion of counts and parameters into the element type
/// - `Default`, `Copy`, `Send`, `Sync`: plain data that may cross threads
/// - `Pod`: complex buffers can be viewed as interleaved `[re, im]` pairs
pub trait Real:
    Float + NumCast + Pod + Copy + Default + Send + Sync + std::fmt::Debug + 'static
{
    /// Converts an observation count into this type.
    ///
    /// Counts are always representable (possibly rounded) by `f32`/`f64`;
    /// an unrepresentable count yields `NaN` rather than panicking.
    #[inline]
    #[must_use]
    fn from_count(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::nan)
    }

    /// Creates an element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to real element",
        })
    }

    /// Creates an element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to real element",
        })
    }
}

impl<T> Real for T where
    T: Float + NumCast + Pod + Copy + Default + Send + Sync + std::fmt::Debug + 'static
{
}
