//! Moving sample covariance of paired observations.
//!
//! # Algorithm
//!
//! The co-moment `C = sum((x - mx) * (y - my))` over the window is updated in
//! O(1). While filling:
//!
//! ```text
//! dx  = x - mx
//! mx += dx / N
//! my += (y - my) / N
//! C  += dx * (y - my)
//! ```
//!
//! Once full, with `(x0, y0)` the evicted pair:
//!
//! ```text
//! dx0 = x0 - mx;  dy0 = y0 - my
//! dxN = x  - mx;  dyN = y  - my
//! C  += dxN*dyN - dx0*dy0 - (dxN - dx0)*(dyN - dy0)/W
//! mx += (dxN - dx0) / W
//! my += (dyN - dy0) / W
//! ```
//!
//! With known means the co-moment slides as
//! `C += (x - mx)(y - my) - (x0 - mx)(y0 - my)`.
//!
//! A `NaN` in either coordinate poisons the covariance until that pair
//! leaves the window, exactly as for [`MovingVariance`](super::MovingVariance).

use log::debug;

use super::window::Window;
use super::Accumulator;
use crate::error::Result;
use crate::traits::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CoMoment<T> {
    Valid { mean_x: T, mean_y: T, c: T },
    Poisoned,
}

/// Windowed covariance of `(x, y)` pairs.
///
/// Uses the sample divisor (`N - 1` while filling, `W - 1` once full) when
/// the means are estimated and the population divisor when they are known.
///
/// # Example
///
/// ```
/// use strided_stats::incr::{Accumulator, MovingCovariance};
///
/// let mut acc = MovingCovariance::<f64>::new(3).unwrap();
/// acc.observe((2.0, 1.0));
/// acc.observe((-5.0, 3.25));
/// let cov = acc.observe((3.0, -1.0));
/// assert!((cov + 8.625).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MovingCovariance<T> {
    window: Window<(T, T)>,
    known_means: Option<(T, T)>,
    count: usize,
    state: CoMoment<T>,
}

impl<T: Real> MovingCovariance<T> {
    /// Creates a moving covariance over `window` pairs, estimating both means.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if `window` is zero.
    pub fn new(window: usize) -> Result<Self> {
        Self::build(window, None)
    }

    /// Creates a moving covariance over `window` pairs around known means.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if `window` is zero.
    pub fn with_means(window: usize, mean_x: T, mean_y: T) -> Result<Self> {
        Self::build(window, Some((mean_x, mean_y)))
    }

    fn build(window: usize, known_means: Option<(T, T)>) -> Result<Self> {
        let window = Window::new(window)?;
        debug!(
            "moving covariance: window={}, known_means={:?}",
            window.capacity(),
            known_means
        );
        Ok(Self {
            window,
            known_means,
            count: 0,
            state: Self::initial(known_means),
        })
    }

    fn initial(known_means: Option<(T, T)>) -> CoMoment<T> {
        let (mean_x, mean_y) = known_means.unwrap_or_else(|| (T::zero(), T::zero()));
        CoMoment::Valid {
            mean_x,
            mean_y,
            c: T::zero(),
        }
    }

    /// Returns the window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window.capacity()
    }

    fn accumulate(state: &mut CoMoment<T>, known: bool, n: usize, x: T, y: T) {
        if let CoMoment::Valid { mean_x, mean_y, c } = state {
            if known {
                *c = *c + (x - *mean_x) * (y - *mean_y);
            } else {
                let n = T::from_count(n);
                let dx = x - *mean_x;
                *mean_x = *mean_x + dx / n;
                *mean_y = *mean_y + (y - *mean_y) / n;
                *c = *c + dx * (y - *mean_y);
            }
        }
    }

    fn slide(&mut self, (x0, y0): (T, T), x: T, y: T) {
        let w = T::from_count(self.window.capacity());
        let known = self.known_means.is_some();
        if let CoMoment::Valid { mean_x, mean_y, c } = &mut self.state {
            let dx_old = x0 - *mean_x;
            let dy_old = y0 - *mean_y;
            let dx_new = x - *mean_x;
            let dy_new = y - *mean_y;
            if known {
                *c = *c + dx_new * dy_new - dx_old * dy_old;
            } else {
                *c = *c + dx_new * dy_new
                    - dx_old * dy_old
                    - (dx_new - dx_old) * (dy_new - dy_old) / w;
                *mean_x = *mean_x + (dx_new - dx_old) / w;
                *mean_y = *mean_y + (dy_new - dy_old) / w;
            }
        }
    }

    fn rescan(&mut self) {
        debug!(
            "NaN pair left a covariance window of {}; rescanning",
            self.window.capacity()
        );
        let known = self.known_means.is_some();
        let mut state = Self::initial(self.known_means);
        let mut count = 0;
        for (vx, vy) in self.window.iter() {
            if vx.is_nan() || vy.is_nan() {
                state = CoMoment::Poisoned;
                count = self.window.capacity();
                break;
            }
            count += 1;
            Self::accumulate(&mut state, known, count, vx, vy);
        }
        self.state = state;
        self.count = count;
    }

    fn current(&self) -> T {
        let c = match self.state {
            CoMoment::Valid { c, .. } => c,
            CoMoment::Poisoned => return T::nan(),
        };
        if self.known_means.is_some() {
            return c / T::from_count(self.count);
        }
        if self.count == 1 {
            return T::zero();
        }
        c / T::from_count(self.count - 1)
    }
}

impl<T: Real> Accumulator for MovingCovariance<T> {
    type Input = (T, T);
    type Output = T;

    fn observe(&mut self, (x, y): (T, T)) -> T {
        let evicted = self.window.push((x, y));
        if x.is_nan() || y.is_nan() {
            self.state = CoMoment::Poisoned;
            self.count = self.window.capacity();
            return T::nan();
        }
        match evicted {
            None if self.count < self.window.capacity() => {
                self.count += 1;
                let known = self.known_means.is_some();
                Self::accumulate(&mut self.state, known, self.count, x, y);
            }
            None => {}
            Some((x0, y0)) if x0.is_nan() || y0.is_nan() => self.rescan(),
            Some(old) => self.slide(old, x, y),
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
        self.window.clear();
        self.count = 0;
        self.state = Self::initial(self.known_means);
    }
}
