//! Running weighted arithmetic mean.

use super::Accumulator;
use crate::traits::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State<T> {
    Valid { weight_sum: T, mean: T },
    Poisoned,
}

/// Weighted mean of every `(value, weight)` pair observed so far.
///
/// Each observation updates
///
/// ```text
/// wsum += w
/// mean += (w / wsum) * (x - mean)
/// ```
///
/// so equal weights reproduce the unweighted mean. A `NaN` value or weight
/// poisons the mean permanently. Weights are taken as given: a leading zero
/// weight divides `0 / 0` and follows IEEE-754 from there.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, WeightedMean};
///
/// let mut acc = WeightedMean::<f64>::new();
/// acc.observe((2.0, 1.0));
/// acc.observe((5.0, 2.0));
/// assert_eq!(acc.value(), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedMean<T> {
    count: usize,
    state: State<T>,
}

impl<T: Real> Default for WeightedMean<T> {
    fn default() -> Self {
        Self {
            count: 0,
            state: State::Valid {
                weight_sum: T::zero(),
                mean: T::zero(),
            },
        }
    }
}

impl<T: Real> WeightedMean<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sum of weights seen so far (`NaN` once poisoned).
    #[must_use]
    pub fn weight_sum(&self) -> T {
        match self.state {
            State::Valid { weight_sum, .. } => weight_sum,
            State::Poisoned => T::nan(),
        }
    }

    fn current(&self) -> T {
        match self.state {
            State::Valid { mean, .. } => mean,
            State::Poisoned => T::nan(),
        }
    }
}

impl<T: Real> Accumulator for WeightedMean<T> {
    type Input = (T, T);
    type Output = T;

    fn observe(&mut self, (x, w): (T, T)) -> T {
        self.count += 1;
        if x.is_nan() || w.is_nan() {
            self.state = State::Poisoned;
        } else if let State::Valid { weight_sum, mean } = &mut self.state {
            *weight_sum = *weight_sum + w;
            *mean = *mean + (w / *weight_sum) * (x - *mean);
        }
        self.current()
    }

    fn value(&self) -> Option<T> {
        (self.count > 0).then(|| self.current())
    }

    fn count(&self) -> usize {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
