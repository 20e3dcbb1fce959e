//! Error types for strided-stats.
//!
//! Kernels never fail: degenerate sizes yield sentinel values (`0`, `NaN`, or
//! an untouched output buffer). The variants below are produced by the layers
//! around them: layout validation, accumulator construction and generic
//! numeric conversion.

use thiserror::Error;

/// The main error type for strided-stats operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window size of a moving accumulator is invalid.
    ///
    /// Windows must hold at least one observation.
    #[error("invalid window {window}: {reason}")]
    InvalidWindow {
        /// The window size that was provided.
        window: usize,
        /// Description of why the window is invalid.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert counts
    /// (e.g., converting a `usize` window to a generic `Float` type) and the
    /// conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// A strided layout addresses an element outside of its buffer.
    #[error("strided index {index} is out of bounds for a buffer of length {len}")]
    OutOfBounds {
        /// The first offending physical index (may be negative).
        index: isize,
        /// The length of the buffer the layout was validated against.
        len: usize,
    },

    /// Two paired inputs do not have the same length.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The length of the reference input.
        expected: usize,
        /// The length of the mismatched input.
        actual: usize,
    },
}

/// Convenience type alias for Results using the strided-stats Error type.
pub type Result<T> = std::result::Result<T, Error>;
