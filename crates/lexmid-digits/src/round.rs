//! Half-up rounding of a leftover fraction into trailing digits.

use dashu::integer::UBig;

use crate::codec::{encode_number, left_pad, DigitSeq};

/// Converts `remainder / denominator` into the minimal number of extra
/// trailing digits in base `base`.
///
/// The digit count is the smallest `places` with `base^places >=
/// denominator`; the fraction is scaled by `base^places` and rounded
/// half-up with integer arithmetic. The result is left-padded to exactly
/// `places` digits and its encoded value never reaches `base^places`, so
/// appending it to an interpolated value extends precision without
/// disturbing the digits already in place.
///
/// # Panics
///
/// Panics if `denominator` is zero or `base < 2`.
#[must_use]
pub fn round_fraction(remainder: usize, denominator: usize, base: usize) -> DigitSeq {
    assert!(denominator > 0, "denominator must be positive");
    assert!(base >= 2, "base must be at least 2");
    debug_assert!(remainder < denominator);

    let mut places = 0usize;
    let mut scale: u128 = 1;
    while scale < denominator as u128 {
        scale *= base as u128;
        places += 1;
    }

    // floor((2·r·scale + d) / 2d) rounds r/d·scale half-up exactly.
    let scaled = (2 * remainder as u128 * scale + denominator as u128)
        / (2 * denominator as u128);

    let digits = encode_number(&UBig::from(scaled), base);
    left_pad(&digits, places)
}
