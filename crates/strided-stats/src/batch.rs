//! Batch processing of many independent series.
//!
//! Runs a kernel or an accumulator over each series of a batch, in parallel
//! with Rayon when the `parallel` feature is enabled and sequentially
//! otherwise. Each series is handled by exactly one task, so accumulators
//! never see concurrent mutation.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! strided-stats = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use strided_stats::batch::BatchProcessor;
//! use strided_stats::incr::MovingMean;
//! use strided_stats::kernels::nrm2;
//!
//! let series = vec![vec![3.0_f64, 4.0], vec![6.0, 8.0]];
//!
//! let norms = BatchProcessor::new()
//!     .process(&series, |s| Ok(nrm2(s.len(), s, 1)))
//!     .unwrap();
//! assert!((norms[1] - 10.0).abs() < 1e-12);
//!
//! let means = BatchProcessor::new()
//!     .accumulate(&series, || MovingMean::new(2))
//!     .unwrap();
//! assert_eq!(means[0], vec![3.0, 3.5]);
//! ```

use crate::error::Result;
use crate::incr::Accumulator;
use crate::traits::Real;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for kernels and accumulators over many series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series before work is spread across threads.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a batch processor with the default threshold (64 series).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Smaller batches run sequentially to avoid thread-pool overhead. Has
    /// no effect without the `parallel` feature.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `f` to every series, returning one result per series in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], f: F) -> Result<Vec<R>>
    where
        T: Real,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            series.iter().map(|s| f(s)).collect()
        } else {
            series.par_iter().map(|s| f(s)).collect()
        }
    }

    /// Applies `f` to every series, returning one result per series in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], f: F) -> Result<Vec<R>>
    where
        T: Real,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| f(s)).collect()
    }

    /// Feeds every series through its own freshly built accumulator,
    /// collecting the statistic after each observation.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `make`.
    #[cfg(feature = "parallel")]
    pub fn accumulate<T, A, F>(&self, series: &[Vec<T>], make: F) -> Result<Vec<Vec<A::Output>>>
    where
        T: Real,
        A: Accumulator<Input = T>,
        A::Output: Send,
        F: Fn() -> Result<A> + Send + Sync,
    {
        let run = |s: &Vec<T>| -> Result<Vec<A::Output>> {
            let mut acc = make()?;
            Ok(acc.observe_all(s.iter().copied()))
        };
        if series.len() < self.min_parallel_threshold {
            series.iter().map(run).collect()
        } else {
            series.par_iter().map(run).collect()
        }
    }

    /// Feeds every series through its own freshly built accumulator,
    /// collecting the statistic after each observation.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `make`.
    #[cfg(not(feature = "parallel"))]
    pub fn accumulate<T, A, F>(&self, series: &[Vec<T>], make: F) -> Result<Vec<Vec<A::Output>>>
    where
        T: Real,
        A: Accumulator<Input = T>,
        F: Fn() -> Result<A>,
    {
        series
            .iter()
            .map(|s| {
                let mut acc = make()?;
                Ok(acc.observe_all(s.iter().copied()))
            })
            .collect()
    }
}

/// Convenience wrapper for [`BatchProcessor::process`] with default settings.
///
/// # Errors
///
/// Returns the first error produced by `f`.
#[cfg(feature = "parallel")]
pub fn process_batch<T, F, R>(series: &[Vec<T>], f: F) -> Result<Vec<R>>
where
    T: Real,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, f)
}

/// Convenience wrapper for [`BatchProcessor::process`] with default settings.
///
/// # Errors
///
/// Returns the first error produced by `f`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, F, R>(series: &[Vec<T>], f: F) -> Result<Vec<R>>
where
    T: Real,
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(series, f)
}
