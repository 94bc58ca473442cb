//! # lexmid-alphabet
//!
//! Symbol tables and between-key generation.
//!
//! A [`SymbolTable`] maps an ordered alphabet of symbols to digit values and
//! back, and exposes the public operation of this workspace: generating
//! strings that sort strictly between two boundary strings. The digit
//! arithmetic itself lives in `lexmid-digits`; this crate supplies the
//! symbol-aware codec halves, boundary defaults, and prebuilt alphabets.
//!
//! ```rust
//! use lexmid_alphabet::builtin;
//!
//! let decimal = builtin::decimal();
//! let keys = decimal.generate_between("1", "2", 1).unwrap();
//! assert_eq!(keys, vec!["15".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtin;
pub mod error;
pub mod generate;
pub mod table;

#[cfg(test)]
mod proptests;

pub use error::AlphabetError;
pub use generate::Boundary;
pub use table::SymbolTable;
