//! Strided buffer addressing.
//!
//! Every kernel in this crate addresses its operands with the triple
//! `(len, stride, offset)`: logical element `k` lives at physical index
//! `offset + k * stride`. Strides are signed (negative strides walk the buffer
//! backwards) and may be zero (every logical element aliases one slot).
//!
//! Kernels trust their callers: they do not bounds-check the layout up front
//! and only rely on slice indexing to stop an out-of-bounds access. Callers
//! that receive layouts from untrusted sources validate them first with
//! [`StridedLayout::validate`].
//!
//! # Example
//!
//! ```
//! use strided_stats::strided::{offset_from_stride, StridedLayout};
//!
//! // Walk [1, 2, 3, 4, 5, 6] backwards, two elements at a time.
//! let layout = StridedLayout::from_stride(3, -2);
//! assert_eq!(layout.offset(), offset_from_stride(3, -2));
//! assert_eq!(layout.indices().collect::<Vec<_>>(), vec![4, 2, 0]);
//! assert!(layout.validate(6).is_ok());
//! ```

pub mod complex;

use log::trace;

use crate::error::{Error, Result};

/// Returns the offset implied by the BLAS calling convention.
///
/// For non-negative strides iteration starts at the front of the buffer; for
/// negative strides it starts at the element that the last logical step
/// reaches, i.e. `(1 - len) * stride`.
#[inline]
#[must_use]
pub const fn offset_from_stride(len: usize, stride: isize) -> usize {
    if stride >= 0 || len == 0 {
        0
    } else {
        (len - 1) * stride.unsigned_abs()
    }
}

/// The addressing triple of a strided view into a flat buffer.
///
/// This is a calling convention made explicit: it owns no data and is cheap
/// to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StridedLayout {
    len: usize,
    stride: isize,
    offset: usize,
}

impl StridedLayout {
    /// Creates a layout with an explicit offset.
    #[must_use]
    pub const fn new(len: usize, stride: isize, offset: usize) -> Self {
        Self {
            len,
            stride,
            offset,
        }
    }

    /// Creates a layout whose offset follows [`offset_from_stride`].
    #[must_use]
    pub const fn from_stride(len: usize, stride: isize) -> Self {
        Self::new(len, stride, offset_from_stride(len, stride))
    }

    /// Number of logical elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the layout addresses no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Signed step between consecutive logical elements.
    #[must_use]
    pub const fn stride(&self) -> isize {
        self.stride
    }

    /// Physical index of the first logical element.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Physical index of logical element `k`.
    ///
    /// The result is only meaningful for `k < len` on a validated layout.
    #[inline]
    #[must_use]
    pub const fn index(&self, k: usize) -> usize {
        (self.offset as isize + k as isize * self.stride) as usize
    }

    /// Physical index of the last logical element, or `None` for an empty layout.
    #[must_use]
    pub const fn last_index(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index(self.len - 1))
        }
    }

    /// Iterates over the physical indices in logical order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |k| self.index(k))
    }

    /// Layout of the same logical elements within the interleaved `[re, im]`
    /// view of a complex buffer: stride and offset are doubled.
    #[must_use]
    pub const fn interleaved(&self) -> Self {
        Self::new(self.len, self.stride * 2, self.offset * 2)
    }

    /// Checks that every addressed index lies within a buffer of `buffer_len`
    /// elements.
    ///
    /// Because the index sequence is affine in `k`, checking the first and
    /// last logical elements covers all of them.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` naming the first offending index.
    pub fn validate(&self, buffer_len: usize) -> Result<()> {
        if self.len == 0 {
            return Ok(());
        }
        let out_of_bounds = |index: isize| {
            trace!(
                "layout {self:?} escapes buffer of length {buffer_len} at index {index}"
            );
            Error::OutOfBounds {
                index,
                len: buffer_len,
            }
        };

        let first = isize::try_from(self.offset).map_err(|_| out_of_bounds(isize::MAX))?;
        if first as usize >= buffer_len {
            return Err(out_of_bounds(first));
        }

        let steps = isize::try_from(self.len - 1).map_err(|_| out_of_bounds(isize::MAX))?;
        let last = steps
            .checked_mul(self.stride)
            .and_then(|span| first.checked_add(span))
            .ok_or_else(|| out_of_bounds(isize::MAX))?;
        if last < 0 || last as usize >= buffer_len {
            return Err(out_of_bounds(last));
        }
        Ok(())
    }
}
