//! # lexmid
//!
//! Generates strings that sort lexicographically strictly between two
//! boundary strings, over any user-defined symbol alphabet. Useful for
//! assigning "between" keys in ordered collections, such as insertable
//! list positions and sortable identifiers, without renumbering what is
//! already there.
//!
//! The arithmetic runs directly on digit-value sequences, never on
//! fixed-width integers, so boundary strings of any length interpolate
//! exactly: no floating point, no cumulative drift.
//!
//! ## Quick start
//!
//! ```rust
//! use lexmid::prelude::*;
//!
//! let decimal = builtin::decimal();
//! assert_eq!(decimal.generate_between("1", "2", 1).unwrap(), vec!["15"]);
//!
//! // A custom alphabet works the same way.
//! let hex = SymbolTable::new("0123456789abcdef".chars().map(String::from)).unwrap();
//! let keys = hex.generate_between("a", "b", 3).unwrap();
//! assert!(keys.iter().all(|k| k.as_str() > "a" && k.as_str() < "b"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lexmid_alphabet as alphabet;
pub use lexmid_digits as digits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lexmid_alphabet::{builtin, AlphabetError, Boundary, SymbolTable};
    pub use lexmid_digits::{DigitError, DigitSeq, Midpoint};
}
