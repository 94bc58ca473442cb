//! Error types for symbol tables and key generation.

use lexmid_digits::DigitError;
use thiserror::Error;

/// Errors that can occur constructing a symbol table or generating keys.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    /// An explicit symbol→index mapping left some index in `[0, symbols)`
    /// unreachable. Fatal at construction.
    #[error("{symbols} symbols given but index {missing} not found in the mapping")]
    IncompleteSymbolMapping {
        /// Number of symbols in the table.
        symbols: usize,
        /// The first index no symbol maps to.
        missing: usize,
    },

    /// A plain string cannot be tokenized because the symbol set is not a
    /// prefix code; splitting it into symbols would be ambiguous.
    #[error("cannot tokenize a plain string without a prefix-code alphabet; \
             pass an explicit sequence of symbols instead")]
    AmbiguousTokenization,

    /// An explicitly supplied token is not a symbol of this table.
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),

    /// The effective base cannot support positional arithmetic.
    #[error("base {0} is too small; at least two symbols are required")]
    UnsupportedBase(usize),

    /// A boundary decoded to a digit value that an explicitly overridden
    /// base cannot represent.
    #[error("boundary digit value {digit} is not representable in base {base}")]
    DigitExceedsBase {
        /// The offending digit value.
        digit: usize,
        /// The effective base of the request.
        base: usize,
    },

    /// A failure inside the digit arithmetic.
    #[error(transparent)]
    Digits(#[from] DigitError),
}
