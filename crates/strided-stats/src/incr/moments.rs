//! Running first and second moments with an explicit poison state.

use crate::traits::Real;

/// Running mean and sum of squared deviations, or a poisoned marker once a
/// `NaN` has entered the statistic.
///
/// A poisoned state reports `NaN` for both moments, which is what callers
/// observe; the tag keeps the update paths from doing arithmetic on `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Moments<T> {
    Valid { mean: T, m2: T },
    Poisoned,
}

impl<T: Real> Moments<T> {
    /// Empty moments centred on `mean`.
    #[inline]
    pub(crate) fn centred(mean: T) -> Self {
        Self::Valid {
            mean,
            m2: T::zero(),
        }
    }

    #[inline]
    pub(crate) fn mean(&self) -> T {
        match *self {
            Self::Valid { mean, .. } => mean,
            Self::Poisoned => T::nan(),
        }
    }

    #[inline]
    pub(crate) fn m2(&self) -> T {
        match *self {
            Self::Valid { m2, .. } => m2,
            Self::Poisoned => T::nan(),
        }
    }

    /// Welford step for the `n`-th observation (`n` counts `x`).
    #[inline]
    pub(crate) fn welford(&mut self, x: T, n: usize) {
        if let Self::Valid { mean, m2 } = self {
            let delta = x - *mean;
            *mean = *mean + delta / T::from_count(n);
            *m2 = *m2 + delta * (x - *mean);
        }
    }

    /// Accumulates a squared deviation from a fixed mean.
    #[inline]
    pub(crate) fn deviation(&mut self, x: T) {
        if let Self::Valid { mean, m2 } = self {
            let d = x - *mean;
            *m2 = *m2 + d * d;
        }
    }
}

/// Divides a sum of squared deviations by `count - correction`.
///
/// A single observation with an estimated mean has zero spread when the
/// correction is at most one; otherwise a non-positive divisor yields `NaN`.
#[inline]
pub(crate) fn scale_m2<T: Real>(m2: T, count: usize, correction: usize, estimated: bool) -> T {
    if m2.is_nan() {
        return m2;
    }
    if estimated && count == 1 && correction <= 1 {
        return T::zero();
    }
    match count.checked_sub(correction) {
        Some(d) if d > 0 => m2 / T::from_count(d),
        _ => T::nan(),
    }
}
