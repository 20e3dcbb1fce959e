//! Unbounded running variance and standard deviation.

use log::debug;

use super::moments::{scale_m2, Moments};
use super::Accumulator;
use crate::traits::Real;

/// Variance of every observation so far, updated with Welford's method.
///
/// The sample divisor `N - 1` is used by default; [`Variance::with_mean`]
/// switches to the population divisor `N` around a known mean. A `NaN`
/// observation poisons the accumulator permanently.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, Variance};
///
/// let mut acc = Variance::<f64>::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.observe(x);
/// }
/// assert!((acc.value().unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Variance<T> {
    known_mean: Option<T>,
    correction: usize,
    count: usize,
    moments: Moments<T>,
}

impl<T: Real> Default for Variance<T> {
    fn default() -> Self {
        Self::build(None)
    }
}

impl<T: Real> Variance<T> {
    /// Creates an empty accumulator that estimates the mean.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator around a known `mean`.
    #[must_use]
    pub fn with_mean(mean: T) -> Self {
        Self::build(Some(mean))
    }

    fn build(known_mean: Option<T>) -> Self {
        debug!("unbounded variance: known_mean={known_mean:?}");
        Self {
            known_mean,
            correction: usize::from(known_mean.is_none()),
            count: 0,
            moments: Moments::centred(known_mean.unwrap_or_else(T::zero)),
        }
    }

    /// Overrides the divisor correction (`count - correction`).
    #[must_use]
    pub fn correction(mut self, correction: usize) -> Self {
        self.correction = correction;
        self
    }

    /// Returns the running mean, or `None` before the first observation.
    #[must_use]
    pub fn mean(&self) -> Option<T> {
        (self.count > 0).then(|| self.moments.mean())
    }

    fn current(&self) -> T {
        scale_m2(
            self.moments.m2(),
            self.count,
            self.correction,
            self.known_mean.is_none(),
        )
    }
}

impl<T: Real> Accumulator for Variance<T> {
    type Input = T;
    type Output = T;

    fn observe(&mut self, x: T) -> T {
        self.count += 1;
        if x.is_nan() {
            self.moments = Moments::Poisoned;
        } else if self.known_mean.is_some() {
            self.moments.deviation(x);
        } else {
            self.moments.welford(x, self.count);
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
        self.count = 0;
        self.moments = Moments::centred(self.known_mean.unwrap_or_else(T::zero));
    }
}

/// Standard deviation of every observation so far.
///
/// The square root of [`Variance`] with the same divisor rules.
#[derive(Debug, Clone)]
pub struct Stdev<T> {
    inner: Variance<T>,
}

impl<T: Real> Default for Stdev<T> {
    fn default() -> Self {
        Self {
            inner: Variance::default(),
        }
    }
}

impl<T: Real> Stdev<T> {
    /// Creates an empty accumulator that estimates the mean.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator around a known `mean`.
    #[must_use]
    pub fn with_mean(mean: T) -> Self {
        Self {
            inner: Variance::with_mean(mean),
        }
    }

    /// Overrides the divisor correction (`count - correction`).
    #[must_use]
    pub fn correction(self, correction: usize) -> Self {
        Self {
            inner: self.inner.correction(correction),
        }
    }

    /// Returns the running mean, or `None` before the first observation.
    #[must_use]
    pub fn mean(&self) -> Option<T> {
        self.inner.mean()
    }
}

impl<T: Real> Accumulator for Stdev<T> {
    type Input = T;
    type Output = T;

    fn observe(&mut self, x: T) -> T {
        self.inner.observe(x).sqrt()
    }

    fn value(&self) -> Option<T> {
        self.inner.value().map(|v| v.sqrt())
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_variance_empty_is_none() {
        assert_eq!(Variance::<f64>::new().value(), None);
        assert_eq!(Stdev::<f64>::new().value(), None);
        assert_eq!(Variance::<f64>::new().mean(), None);
    }

    #[test]
    fn test_variance_single_observation_is_zero() {
        let mut acc = Variance::<f64>::new();
        assert_eq!(acc.observe(5.0), 0.0);
    }

    #[test]
    fn test_stdev_sequence() {
        let mut acc = Stdev::<f64>::new();
        let out: Vec<f64> = [2.0, 3.0, 2.0, 4.0, 3.0, 4.0]
            .iter()
            .map(|&x| acc.observe(x))
            .collect();
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5_f64.sqrt()).abs() < EPSILON);
        assert!((out[5] - 0.894_427_190_999_915_9).abs() < EPSILON);
        assert!((acc.mean().unwrap() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_population_correction() {
        let mut acc = Variance::<f64>::new().correction(0);
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.observe(x);
        }
        assert!((acc.value().unwrap() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_known_mean() {
        let mut acc = Variance::with_mean(3.0_f64);
        assert_eq!(acc.observe(2.0), 1.0);
        assert_eq!(acc.observe(6.0), 5.0);
        assert_eq!(acc.mean(), Some(3.0));

        let mut sd = Stdev::with_mean(0.0_f64);
        sd.observe(3.0);
        assert_eq!(sd.observe(-5.0), 17.0_f64.sqrt());
    }

    #[test]
    fn test_excessive_correction_is_nan() {
        let mut acc = Variance::<f64>::new().correction(3);
        acc.observe(1.0);
        assert!(acc.observe(2.0).is_nan());
        assert!(acc.observe(3.0).is_nan());
        assert!(!acc.observe(4.0).is_nan());
    }

    #[test]
    fn test_large_correction_is_nan_from_first_observation() {
        let mut acc = Variance::<f64>::new().correction(2);
        assert!(acc.observe(1.0).is_nan());
        assert!(acc.observe(2.0).is_nan());
        assert_eq!(acc.observe(3.0), 2.0);
    }

    #[test]
    fn test_nan_is_permanent() {
        let mut acc = Stdev::<f64>::new();
        acc.observe(1.0);
        assert!(acc.observe(f64::NAN).is_nan());
        assert!(acc.observe(2.0).is_nan());
        assert!(acc.mean().unwrap().is_nan());
        acc.reset();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.observe(2.0), 0.0);
    }
}
