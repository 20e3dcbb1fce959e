//! Fixed-capacity circular buffer backing the windowed accumulators.

use crate::error::{Error, Result};

/// A fixed-length ring of the last `capacity` observations.
///
/// The backing storage is allocated once at construction and never resized;
/// a modulo cursor marks the slot the next observation overwrites.
///
/// # Example
///
/// ```
/// use strided_stats::incr::Window;
///
/// let mut window: Window<f64> = Window::new(2).unwrap();
/// assert_eq!(window.push(1.0), None);
/// assert_eq!(window.push(2.0), None);
/// assert_eq!(window.push(3.0), Some(1.0));
/// assert_eq!(window.iter().collect::<Vec<_>>(), vec![2.0, 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Window<T> {
    buf: Vec<T>,
    cursor: usize,
    filled: usize,
}

impl<T: Copy + Default> Window<T> {
    /// Creates an empty window holding at most `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidWindow {
                window: capacity,
                reason: "window size must be at least 1",
            });
        }
        Ok(Self {
            buf: vec![T::default(); capacity],
            cursor: 0,
            filled: 0,
        })
    }

    /// Returns the window size.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of values currently buffered.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.filled
    }

    /// Returns true if nothing has been pushed since construction or the last clear.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns true once `capacity` values have been pushed.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.buf.len()
    }

    /// Writes `value` into the next slot.
    ///
    /// Returns the value it displaced once the window is full, `None` while
    /// it is still filling.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        let old = std::mem::replace(&mut self.buf[self.cursor], value);
        self.cursor = (self.cursor + 1) % self.buf.len();
        if self.filled < self.buf.len() {
            self.filled += 1;
            None
        } else {
            Some(old)
        }
    }

    /// Iterates over the buffered values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let (head, tail) = if self.is_full() {
            (&self.buf[self.cursor..], &self.buf[..self.cursor])
        } else {
            (&self.buf[..self.filled], &self.buf[..0])
        };
        head.iter().chain(tail.iter()).copied()
    }

    /// Empties the window without releasing its storage.
    pub fn clear(&mut self) {
        self.buf.iter_mut().for_each(|slot| *slot = T::default());
        self.cursor = 0;
        self.filled = 0;
    }
}
