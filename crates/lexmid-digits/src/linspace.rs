//! Evenly-spaced interpolation points between two digit sequences.

use crate::codec::{right_pad, Digit, DigitSeq};
use crate::error::DigitError;
use crate::longform::{long_add_same_len, long_div, long_sub_same_len};

/// One interpolated point: an integral digit part plus the exact leftover
/// fraction `remainder / denominator` that the digits cannot yet express.
///
/// Produced by [`long_linspace`] and consumed by
/// [`round_fraction`](crate::round::round_fraction), which folds the
/// fraction into extra trailing digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Midpoint {
    /// Integral digit part, most-significant first.
    pub value: DigitSeq,
    /// Leftover fraction numerator; always below `denominator`.
    pub remainder: usize,
    /// Leftover fraction denominator (the division count).
    pub denominator: usize,
}

/// Computes `n` points evenly spaced at positions `k/m` between `a` and `b`.
///
/// The shorter input is right-padded with zeros to the longer one's length,
/// which preserves its value: these sequences are fixed-point fractional
/// positions, so trailing zeros only add empty places. Each step is an
/// exact remainder-threading add or subtract of `a/m` and `b/m`, never a
/// floating-point multiply, so no rounding error accumulates no matter how
/// long the sequences get. O(n·L) digit operations for padded length L.
///
/// # Errors
///
/// - [`DigitError::InseparableBoundaries`] if `a` and `b` compare equal
///   after padding.
/// - [`DigitError::Underflow`] if the walk steps past `a`, which only
///   happens when `n + 1` exceeds `m`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn long_linspace(
    a: &[Digit],
    b: &[Digit],
    base: usize,
    n: usize,
    m: usize,
) -> Result<Vec<Midpoint>, DigitError> {
    let len = a.len().max(b.len());
    let a = right_pad(a, len);
    let b = right_pad(b, len);
    if a == b {
        return Err(DigitError::InseparableBoundaries);
    }

    let (a_div, a_div_rem) = long_div(&a, m, base);
    let (b_div, b_div_rem) = long_div(&b, m, base);

    // Walk inward from both ends: a_prev descends from a by a/m per step
    // while b_prev ascends from b/m, so their sum sweeps the interior.
    let (mut a_prev, mut a_prev_rem) =
        long_sub_same_len(&a, &a_div, base, Some((0, a_div_rem)), m)?;
    let mut b_prev = b_div.clone();
    let mut b_prev_rem = b_div_rem;

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let (value, _carry, remainder, denominator) =
            long_add_same_len(&a_prev, &b_prev, base, a_prev_rem + b_prev_rem, m)?;
        points.push(Midpoint {
            value,
            remainder,
            denominator,
        });

        let (next_a, next_a_rem) =
            long_sub_same_len(&a_prev, &a_div, base, Some((a_prev_rem, a_div_rem)), m)?;
        a_prev = next_a;
        a_prev_rem = next_a_rem;

        let (next_b, _carry, next_b_rem, _den) =
            long_add_same_len(&b_prev, &b_div, base, b_prev_rem + b_div_rem, m)?;
        b_prev = next_b;
        b_prev_rem = next_b_rem;
    }
    Ok(points)
}
