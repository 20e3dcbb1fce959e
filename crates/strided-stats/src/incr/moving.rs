//! Fixed-window moving variance and standard deviation.
//!
//! # Algorithm
//!
//! While the window is filling, each observation takes a Welford step. Once
//! the window is full, the new value `x` displaces the oldest value `x0` and
//! both moments slide in O(1):
//!
//! ```text
//! delta = x - x0
//! d1    = x0 - mean
//! mean += delta / W
//! d2    = x - mean
//! m2   += delta * (d1 + d2)
//! ```
//!
//! With a known mean `mu` the mean is not estimated and the second moment
//! slides as `m2 += (x - mu)^2 - (x0 - mu)^2`.
//!
//! # NaN Handling
//!
//! - An incoming `NaN` poisons the statistic and the count jumps to `W`.
//! - While poisoned, ordinary evictions leave the state untouched.
//! - When the poisoning `NaN` itself is evicted, the moments are rebuilt by
//!   rescanning the window (O(W)). If another `NaN` is still buffered the
//!   statistic stays poisoned.
//!
//! # Example
//!
//! ```
//! use strided_stats::incr::{Accumulator, MovingStdev};
//!
//! let mut acc = MovingStdev::<f64>::new(3).unwrap();
//! assert_eq!(acc.value(), None);
//! assert_eq!(acc.observe(2.0), 0.0);
//! assert!((acc.observe(-5.0) - 4.949_747_468_305_833).abs() < 1e-12);
//! assert!((acc.observe(3.0) - 4.358_898_943_540_674).abs() < 1e-12);
//! assert!((acc.observe(5.0) - 5.291_502_622_129_181).abs() < 1e-12);
//! ```

use log::debug;

use super::moments::{scale_m2, Moments};
use super::window::Window;
use super::Accumulator;
use crate::error::Result;
use crate::traits::Real;

/// Shared state of every windowed moment accumulator.
#[derive(Debug, Clone)]
pub(crate) struct WindowedMoments<T> {
    window: Window<T>,
    known_mean: Option<T>,
    correction: usize,
    count: usize,
    moments: Moments<T>,
}

impl<T: Real> WindowedMoments<T> {
    pub(crate) fn new(window: usize, known_mean: Option<T>) -> Result<Self> {
        let window = Window::new(window)?;
        debug!(
            "windowed moments: window={}, known_mean={:?}",
            window.capacity(),
            known_mean
        );
        Ok(Self {
            window,
            known_mean,
            correction: usize::from(known_mean.is_none()),
            count: 0,
            moments: Moments::centred(known_mean.unwrap_or_else(T::zero)),
        })
    }

    pub(crate) fn set_correction(&mut self, correction: usize) {
        self.correction = correction;
    }

    pub(crate) fn capacity(&self) -> usize {
        self.window.capacity()
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn observe(&mut self, x: T) {
        let evicted = self.window.push(x);
        if x.is_nan() {
            self.moments = Moments::Poisoned;
            self.count = self.window.capacity();
            return;
        }
        match evicted {
            None if self.count < self.window.capacity() => {
                self.count += 1;
                match self.known_mean {
                    Some(_) => self.moments.deviation(x),
                    None => self.moments.welford(x, self.count),
                }
            }
            // Poisoned before the window filled; nothing has left it yet.
            None => {}
            Some(old) if old.is_nan() => self.rescan(),
            Some(old) => self.slide(old, x),
        }
    }

    fn slide(&mut self, old: T, x: T) {
        let w = T::from_count(self.window.capacity());
        if let Moments::Valid { mean, m2 } = &mut self.moments {
            if self.known_mean.is_some() {
                let dn = x - *mean;
                let d0 = old - *mean;
                *m2 = *m2 + dn * dn - d0 * d0;
            } else {
                let delta = x - old;
                let d1 = old - *mean;
                *mean = *mean + delta / w;
                let d2 = x - *mean;
                *m2 = *m2 + delta * (d1 + d2);
            }
            // Cancellation after a large value leaves can undershoot zero.
            if *m2 < T::zero() {
                *m2 = T::zero();
            }
        }
    }

    fn rescan(&mut self) {
        debug!(
            "NaN left a window of {}; rescanning buffered values",
            self.window.capacity()
        );
        let mut moments = Moments::centred(self.known_mean.unwrap_or_else(T::zero));
        let mut count = 0;
        for v in self.window.iter() {
            if v.is_nan() {
                moments = Moments::Poisoned;
                count = self.window.capacity();
                break;
            }
            count += 1;
            match self.known_mean {
                Some(_) => moments.deviation(v),
                None => moments.welford(v, count),
            }
        }
        self.moments = moments;
        self.count = count;
    }

    /// Current mean. Meaningful only after at least one observation.
    pub(crate) fn mean(&self) -> T {
        self.moments.mean()
    }

    /// Current variance. Meaningful only after at least one observation.
    pub(crate) fn variance(&self) -> T {
        scale_m2(
            self.moments.m2(),
            self.count,
            self.correction,
            self.known_mean.is_none(),
        )
    }

    pub(crate) fn reset(&mut self) {
        self.window.clear();
        self.count = 0;
        self.moments = Moments::centred(self.known_mean.unwrap_or_else(T::zero));
    }
}

/// Output of [`MovingMeanVariance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanVariance<T> {
    /// Mean of the current window.
    pub mean: T,
    /// Variance of the current window.
    pub variance: T,
}

/// Output of [`MovingMeanStdev`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStdev<T> {
    /// Mean of the current window.
    pub mean: T,
    /// Standard deviation of the current window.
    pub stdev: T,
}

macro_rules! windowed_accumulator {
    ($(#[$meta:meta])* $name:ident, $output:ty, |$core:ident| $value:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            core: WindowedMoments<T>,
        }

        impl<T: Real> $name<T> {
            /// Creates an accumulator over the last `window` observations,
            /// estimating the mean.
            ///
            /// # Errors
            ///
            /// Returns `Error::InvalidWindow` if `window` is zero.
            pub fn new(window: usize) -> Result<Self> {
                Ok(Self {
                    core: WindowedMoments::new(window, None)?,
                })
            }

            /// Creates an accumulator over the last `window` observations
            /// around a known `mean`. The default divisor becomes the
            /// number of observations (population statistic).
            ///
            /// # Errors
            ///
            /// Returns `Error::InvalidWindow` if `window` is zero.
            pub fn with_mean(window: usize, mean: T) -> Result<Self> {
                Ok(Self {
                    core: WindowedMoments::new(window, Some(mean))?,
                })
            }

            /// Overrides the divisor correction (`count - correction`).
            #[must_use]
            pub fn correction(mut self, correction: usize) -> Self {
                self.core.set_correction(correction);
                self
            }

            /// Returns the window size.
            #[must_use]
            pub fn window(&self) -> usize {
                self.core.capacity()
            }
        }

        impl<T: Real> Accumulator for $name<T> {
            type Input = T;
            type Output = $output;

            fn observe(&mut self, x: T) -> $output {
                self.core.observe(x);
                let $core = &self.core;
                $value
            }

            fn value(&self) -> Option<$output> {
                let $core = &self.core;
                ($core.count() > 0).then(|| $value)
            }

            fn count(&self) -> usize {
                self.core.count()
            }

            fn reset(&mut self) {
                self.core.reset();
            }
        }
    };
}

windowed_accumulator!(
    /// Moving variance over a fixed window.
    ///
    /// Uses the sample divisor (`N - 1` while filling, `W - 1` once full)
    /// unless constructed with a known mean.
    MovingVariance,
    T,
    |core| core.variance()
);

windowed_accumulator!(
    /// Moving standard deviation over a fixed window.
    MovingStdev,
    T,
    |core| core.variance().sqrt()
);

windowed_accumulator!(
    /// Moving mean and variance over a fixed window.
    ///
    /// A `NaN` in the window poisons both outputs.
    MovingMeanVariance,
    MeanVariance<T>,
    |core| MeanVariance {
        mean: core.mean(),
        variance: core.variance(),
    }
);

windowed_accumulator!(
    /// Moving mean and standard deviation over a fixed window.
    ///
    /// A `NaN` in the window poisons both outputs.
    MovingMeanStdev,
    MeanStdev<T>,
    |core| MeanStdev {
        mean: core.mean(),
        stdev: core.variance().sqrt(),
    }
);
