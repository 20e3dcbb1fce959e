//! Running arithmetic means.

use super::moments::Moments;
use super::moving::WindowedMoments;
use super::Accumulator;
use crate::error::Result;
use crate::traits::Real;

/// Arithmetic mean of every observation so far.
///
/// A `NaN` observation poisons the mean permanently.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, Mean};
///
/// let mut acc = Mean::<f64>::new();
/// acc.observe(2.0);
/// acc.observe(4.0);
/// assert_eq!(acc.value(), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Mean<T> {
    count: usize,
    moments: Moments<T>,
}

impl<T: Real> Default for Mean<T> {
    fn default() -> Self {
        Self {
            count: 0,
            moments: Moments::centred(T::zero()),
        }
    }
}

impl<T: Real> Mean<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Real> Accumulator for Mean<T> {
    type Input = T;
    type Output = T;

    fn observe(&mut self, x: T) -> T {
        self.count += 1;
        if x.is_nan() {
            self.moments = Moments::Poisoned;
        } else if let Moments::Valid { mean, .. } = &mut self.moments {
            *mean = *mean + (x - *mean) / T::from_count(self.count);
        }
        self.moments.mean()
    }

    fn value(&self) -> Option<T> {
        (self.count > 0).then(|| self.moments.mean())
    }

    fn count(&self) -> usize {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Arithmetic mean over the last `W` observations.
///
/// Once full, each observation slides the mean by `(x - evicted) / W`. A
/// `NaN` poisons the mean until it leaves the window.
#[derive(Debug, Clone)]
pub struct MovingMean<T> {
    core: WindowedMoments<T>,
}

impl<T: Real> MovingMean<T> {
    /// Creates a moving mean over `window` observations.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if `window` is zero.
    pub fn new(window: usize) -> Result<Self> {
        Ok(Self {
            core: WindowedMoments::new(window, None)?,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.core.capacity()
    }
}

impl<T: Real> Accumulator for MovingMean<T> {
    type Input = T;
    type Output = T;

    fn observe(&mut self, x: T) -> T {
        self.core.observe(x);
        self.core.mean()
    }

    fn value(&self) -> Option<T> {
        (self.core.count() > 0).then(|| self.core.mean())
    }

    fn count(&self) -> usize {
        self.core.count()
    }

    fn reset(&mut self) {
        self.core.reset();
    }
}
