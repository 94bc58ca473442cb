//! Error types for digit-sequence arithmetic.

use thiserror::Error;

/// Errors that can occur during digit-sequence arithmetic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DigitError {
    /// Equal-length arithmetic was called with operands of different length.
    ///
    /// This is an internal invariant violation: the interpolation engine pads
    /// both operands to a common length before any arithmetic runs.
    #[error("operands must have the same length ({left} vs {right})")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Subtraction found no more-significant digit to borrow from.
    ///
    /// Signals that the minuend is smaller than the subtrahend.
    #[error("cannot borrow from any more-significant digit")]
    Underflow,

    /// The two boundary values compare equal once padded to a common length,
    /// so no value fits strictly between them.
    #[error("start and end strings are lexicographically inseparable")]
    InseparableBoundaries,
}
