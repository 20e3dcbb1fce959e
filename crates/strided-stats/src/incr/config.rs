//! Builder configuration for the windowed accumulators.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{MovingMean, MovingMeanStdev, MovingMeanVariance, MovingStdev, MovingVariance};
use crate::error::{Error, Result};
use crate::traits::Real;

/// Moving statistics configuration with fluent builder API.
///
/// Defaults to a window of 20 with an estimated mean and the sample divisor.
/// Implements `Serialize`/`Deserialize` so a configuration can be stored next
/// to the data it describes.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, MovingStats};
///
/// let mut acc = MovingStats::new().window(3).build_moving_stdev::<f64>().unwrap();
/// acc.observe(2.0);
/// acc.observe(-5.0);
/// assert!((acc.observe(3.0) - 4.358_898_943_540_674).abs() < 1e-12);
///
/// let cfg: MovingStats = serde_json::from_str(r#"{"window": 5, "mean": 0.0}"#).unwrap();
/// assert_eq!(cfg.get_window(), 5);
/// assert_eq!(cfg.get_mean(), Some(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingStats {
    window: usize,
    mean: Option<f64>,
    correction: Option<usize>,
}

impl Default for MovingStats {
    /// Creates a configuration with a window of 20 and no known mean.
    fn default() -> Self {
        Self {
            window: 20,
            mean: None,
            correction: None,
        }
    }
}

impl MovingStats {
    /// Creates a configuration with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window size.
    ///
    /// Default: 20
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Supplies a known mean instead of estimating one.
    ///
    /// Default: none (estimated)
    #[must_use]
    pub const fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Overrides the divisor correction.
    ///
    /// Default: `1` with an estimated mean, `0` with a known mean
    #[must_use]
    pub const fn correction(mut self, correction: usize) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Returns the window size.
    #[must_use]
    pub const fn get_window(&self) -> usize {
        self.window
    }

    /// Returns the known mean, if any.
    #[must_use]
    pub const fn get_mean(&self) -> Option<f64> {
        self.mean
    }

    /// Returns the effective divisor correction.
    #[must_use]
    pub const fn get_correction(&self) -> usize {
        match (self.correction, self.mean) {
            (Some(c), _) => c,
            (None, Some(_)) => 0,
            (None, None) => 1,
        }
    }

    /// Builds a [`MovingMean`]. A known mean and correction do not apply.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero.
    pub fn build_moving_mean<T: Real>(&self) -> Result<MovingMean<T>> {
        self.check()?;
        MovingMean::new(self.window)
    }

    /// Builds a [`MovingVariance`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero, or
    /// `Error::NumericConversion` if the mean is not representable in `T`.
    pub fn build_moving_variance<T: Real>(&self) -> Result<MovingVariance<T>> {
        self.check()?;
        let acc = match self.mean {
            Some(mu) => MovingVariance::with_mean(self.window, T::from_f64(mu)?)?,
            None => MovingVariance::new(self.window)?,
        };
        Ok(acc.correction(self.get_correction()))
    }

    /// Builds a [`MovingStdev`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero, or
    /// `Error::NumericConversion` if the mean is not representable in `T`.
    pub fn build_moving_stdev<T: Real>(&self) -> Result<MovingStdev<T>> {
        self.check()?;
        let acc = match self.mean {
            Some(mu) => MovingStdev::with_mean(self.window, T::from_f64(mu)?)?,
            None => MovingStdev::new(self.window)?,
        };
        Ok(acc.correction(self.get_correction()))
    }

    /// Builds a [`MovingMeanVariance`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero, or
    /// `Error::NumericConversion` if the mean is not representable in `T`.
    pub fn build_moving_mean_variance<T: Real>(&self) -> Result<MovingMeanVariance<T>> {
        self.check()?;
        let acc = match self.mean {
            Some(mu) => MovingMeanVariance::with_mean(self.window, T::from_f64(mu)?)?,
            None => MovingMeanVariance::new(self.window)?,
        };
        Ok(acc.correction(self.get_correction()))
    }

    /// Builds a [`MovingMeanStdev`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero, or
    /// `Error::NumericConversion` if the mean is not representable in `T`.
    pub fn build_moving_mean_stdev<T: Real>(&self) -> Result<MovingMeanStdev<T>> {
        self.check()?;
        let acc = match self.mean {
            Some(mu) => MovingMeanStdev::with_mean(self.window, T::from_f64(mu)?)?,
            None => MovingMeanStdev::new(self.window)?,
        };
        Ok(acc.correction(self.get_correction()))
    }

    fn check(&self) -> Result<()> {
        debug!("moving stats config: {self:?}");
        if self.window == 0 {
            return Err(Error::InvalidWindow {
                window: self.window,
                reason: "window size must be at least 1",
            });
        }
        Ok(())
    }
}
