//! Conversion between integers and digit sequences.
//!
//! The symbol-aware halves of the codec (string ↔ digits) live in the
//! alphabet crate; this module only knows about digit values.

use dashu::integer::UBig;
use smallvec::{smallvec, SmallVec};

/// A single digit value, always strictly less than the active base.
pub type Digit = usize;

/// A digit sequence, most-significant digit first.
///
/// Keys are short in the common case, so small sequences stay inline.
pub type DigitSeq = SmallVec<[Digit; 8]>;

/// Encodes a non-negative integer as base-`base` digits.
///
/// Returns `[0]` for zero; the result is never empty.
///
/// # Panics
///
/// Panics if `base < 2`.
#[must_use]
pub fn encode_number(n: &UBig, base: usize) -> DigitSeq {
    assert!(base >= 2, "base must be at least 2");
    let big_base = UBig::from(base);
    let mut n = n.clone();
    let mut digits = DigitSeq::new();
    while n != UBig::ZERO {
        let digit = &n % &big_base;
        n = n / &big_base;
        digits.push(usize::try_from(digit).expect("digit is below base"));
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits.reverse();
    digits
}

/// Decodes base-`base` digits back into an integer (Horner evaluation,
/// most-significant first).
#[must_use]
pub fn decode_digits(digits: &[Digit], base: usize) -> UBig {
    let big_base = UBig::from(base);
    let mut accum = UBig::ZERO;
    for &digit in digits {
        accum = accum * &big_base + UBig::from(digit);
    }
    accum
}

/// Copies `digits`, zero-filled on the left to at least `to_length`.
#[must_use]
pub fn left_pad(digits: &[Digit], to_length: usize) -> DigitSeq {
    let pad = to_length.saturating_sub(digits.len());
    let mut out: DigitSeq = smallvec![0; pad];
    out.extend_from_slice(digits);
    out
}

/// Copies `digits`, zero-filled on the right to at least `to_length`.
///
/// For fractional positions this preserves the value: appended trailing
/// zeros only add empty less-significant places.
#[must_use]
pub fn right_pad(digits: &[Digit], to_length: usize) -> DigitSeq {
    let mut out: DigitSeq = digits.iter().copied().collect();
    if out.len() < to_length {
        out.resize(to_length, 0);
    }
    out
}
