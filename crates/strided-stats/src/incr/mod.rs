//! Incremental (streaming) statistics accumulators.
//!
//! An accumulator owns a small, fixed amount of state and ingests one
//! observation at a time. Every accumulator exposes two explicit operations
//! through the [`Accumulator`] trait:
//!
//! - [`Accumulator::observe`] ingests a value and returns the updated statistic
//! - [`Accumulator::value`] queries the current statistic, `None` before the
//!   first observation
//!
//! # Accumulators
//!
//! ## Unbounded
//!
//! - [`Mean`] - running arithmetic mean
//! - [`Variance`], [`Stdev`] - Welford running variance / standard deviation
//! - [`WeightedMean`] - running weighted mean of `(value, weight)` pairs
//!
//! ## Fixed window
//!
//! - [`MovingMean`]
//! - [`MovingVariance`], [`MovingStdev`]
//! - [`MovingMeanVariance`], [`MovingMeanStdev`]
//! - [`MovingCovariance`] - paired `(x, y)` observations
//!
//! Windowed accumulators keep the last `W` raw inputs in a [`Window`] and
//! update in O(1) once full.
//!
//! # NaN Handling
//!
//! A `NaN` observation poisons the statistic. Unbounded accumulators stay
//! poisoned; windowed accumulators recover once the `NaN` slides out of the
//! window.
//!
//! # Thread Safety
//!
//! Accumulators are plain owned values (`Send` when `T` is). They carry no
//! interior synchronisation, so each instance has exactly one mutator.

pub mod config;
pub mod covariance;
pub mod mean;
mod moments;
pub mod moving;
pub mod variance;
pub mod window;
pub mod wmean;

pub use config::MovingStats;
pub use covariance::MovingCovariance;
pub use mean::{Mean, MovingMean};
pub use moving::{
    MeanStdev, MeanVariance, MovingMeanStdev, MovingMeanVariance, MovingStdev, MovingVariance,
};
pub use variance::{Stdev, Variance};
pub use window::Window;
pub use wmean::WeightedMean;

/// A single-pass statistic over a stream of observations.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, Mean};
///
/// let mut acc = Mean::<f64>::new();
/// assert_eq!(acc.value(), None);
/// let outputs = acc.observe_all([1.0, 2.0, 3.0]);
/// assert_eq!(outputs, vec![1.0, 1.5, 2.0]);
/// assert_eq!(acc.count(), 3);
/// ```
pub trait Accumulator {
    /// The type of one observation.
    type Input;
    /// The type of the statistic.
    type Output;

    /// Ingests one observation and returns the updated statistic.
    fn observe(&mut self, input: Self::Input) -> Self::Output;

    /// Returns the current statistic, or `None` before the first observation.
    fn value(&self) -> Option<Self::Output>;

    /// Returns the number of observations currently contributing.
    ///
    /// Windowed accumulators saturate at the window size.
    fn count(&self) -> usize;

    /// Returns the accumulator to its freshly constructed state.
    fn reset(&mut self);

    /// Observes every input in order, collecting the statistic after each.
    fn observe_all<I>(&mut self, inputs: I) -> Vec<Self::Output>
    where
        I: IntoIterator<Item = Self::Input>,
        Self: Sized,
    {
        inputs.into_iter().map(|input| self.observe(input)).collect()
    }
}
