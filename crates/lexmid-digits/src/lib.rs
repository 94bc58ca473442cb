//! # lexmid-digits
//!
//! Exact arithmetic over base-B digit sequences for lexmid.
//!
//! Boundary strings decode into digit sequences of unbounded length, so all
//! arithmetic here is long-form over digit vectors rather than fixed-width
//! integers:
//!
//! - Codec between integers, digit sequences, and padding (`codec`)
//! - Long division, borrow subtraction, carry addition (`longform`)
//! - Evenly-spaced interpolation points with exact remainders (`linspace`)
//! - Half-up rounding of a leftover fraction into extra digits (`round`)
//! - Trimming neighbours to their shortest distinguishing prefix (`chop`)
//!
//! Digit sequences are most-significant first. A sequence used as a
//! fractional position keeps its trailing zero digits: they are significant
//! placeholders, not padding to strip.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chop;
pub mod codec;
pub mod error;
pub mod linspace;
pub mod longform;
pub mod round;

#[cfg(test)]
mod proptests;

pub use chop::{chop_digits, chop_successive};
pub use codec::{decode_digits, encode_number, left_pad, right_pad, Digit, DigitSeq};
pub use error::DigitError;
pub use linspace::{long_linspace, Midpoint};
pub use longform::{long_add_same_len, long_div, long_sub_same_len};
pub use round::round_fraction;
