//! Long-form arithmetic over equal-length digit sequences.
//!
//! These are the primitive operations the interpolation engine is built on.
//! Subtraction and addition optionally carry an extra least-significant
//! "remainder digit" whose base is the interpolation denominator rather than
//! the alphabet base, which lets callers thread exact fractions through a
//! chain of operations without ever touching floating point.
//!
//! All three operations copy their inputs before mutating anything; a
//! caller-supplied sequence is never modified.

use smallvec::smallvec;

use crate::codec::{Digit, DigitSeq};
use crate::error::DigitError;

/// Divides a digit sequence by a small integer, left to right.
///
/// Returns the quotient digits (same length as the input) and the final
/// remainder, which is always below `divisor`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
pub fn long_div(numerator: &[Digit], divisor: usize, base: usize) -> (DigitSeq, usize) {
    assert!(divisor > 0, "divisor must be positive");
    let mut quotient = DigitSeq::with_capacity(numerator.len());
    let mut remainder = 0;
    for &digit in numerator {
        let acc = digit + remainder * base;
        quotient.push(acc / divisor);
        remainder = acc % divisor;
    }
    (quotient, remainder)
}

/// Subtracts `b` from `a`, right to left with borrowing.
///
/// When `remainder` is `Some((ra, rb))`, the pair is treated as one extra
/// least-significant digit appended to both operands, in base `denominator`
/// instead of `base`; the subtracted value of that position comes back as
/// the returned remainder. Without a remainder pair the returned remainder
/// is zero.
///
/// A digit too small to subtract from borrows from the nearest nonzero
/// digit to its left, however far away: that digit is decremented and every
/// digit crossed on the way becomes `base - 1`.
///
/// # Errors
///
/// - [`DigitError::LengthMismatch`] if the operands differ in length.
/// - [`DigitError::Underflow`] if no digit can be borrowed from, i.e.
///   `a < b`.
pub fn long_sub_same_len(
    a: &[Digit],
    b: &[Digit],
    base: usize,
    remainder: Option<(usize, usize)>,
    denominator: usize,
) -> Result<(DigitSeq, usize), DigitError> {
    if a.len() != b.len() {
        return Err(DigitError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    // Private working copies; borrow propagation mutates `a` in place.
    let mut a: DigitSeq = a.iter().copied().collect();
    let mut b: DigitSeq = b.iter().copied().collect();
    if let Some((ra, rb)) = remainder {
        a.push(ra);
        b.push(rb);
    }

    let last = a.len().saturating_sub(1);
    let mut ret: DigitSeq = smallvec![0; a.len()];

    for i in (0..a.len()).rev() {
        if a[i] >= b[i] {
            ret[i] = a[i] - b[i];
            continue;
        }
        if i == 0 {
            return Err(DigitError::Underflow);
        }
        // Find the nearest digit to the left that can lend.
        let Some(j) = (0..i).rev().find(|&j| a[j] > 0) else {
            return Err(DigitError::Underflow);
        };
        a[j] -= 1;
        for k in (j + 1)..i {
            a[k] += base - 1;
        }
        // The appended remainder position carries in the denominator's base.
        let borrow_base = if remainder.is_some() && i == last {
            denominator
        } else {
            base
        };
        ret[i] = a[i] + borrow_base - b[i];
    }

    if remainder.is_some() {
        let out_remainder = ret[last];
        ret.truncate(last);
        Ok((ret, out_remainder))
    } else {
        Ok((ret, 0))
    }
}

/// Adds `b` to `a`, right to left with carrying.
///
/// The incoming `remainder` is resolved against `denominator` first: a
/// remainder at or above the denominator rolls one unit into the
/// least-significant digit. The reduced remainder and the denominator come
/// back unchanged for the caller to thread into the next operation.
///
/// The returned flag reports a carry out of the most-significant digit.
///
/// # Errors
///
/// Returns [`DigitError::LengthMismatch`] if the operands differ in length.
pub fn long_add_same_len(
    a: &[Digit],
    b: &[Digit],
    base: usize,
    remainder: usize,
    denominator: usize,
) -> Result<(DigitSeq, bool, usize, usize), DigitError> {
    if a.len() != b.len() {
        return Err(DigitError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut carry = remainder >= denominator;
    let remainder = if carry { remainder - denominator } else { remainder };

    let mut res: DigitSeq = b.iter().copied().collect();
    for i in (0..a.len()).rev() {
        let sum = a[i] + b[i] + usize::from(carry);
        carry = sum >= base;
        res[i] = if carry { sum - base } else { sum };
    }

    Ok((res, carry, remainder, denominator))
}
