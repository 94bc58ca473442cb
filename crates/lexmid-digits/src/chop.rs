//! Trimming neighbouring sequences to their shortest distinguishing prefix.

use crate::codec::{Digit, DigitSeq};

/// Trims `water` to the shortest prefix still distinguishable from its
/// already-trimmed neighbour `rock`.
///
/// Keeps digits up to and including the first nonzero digit of `water`
/// that either lies past the end of `rock` or differs from `rock` at the
/// same position; if no such digit exists the full sequence is kept.
#[must_use]
pub fn chop_digits(rock: &[Digit], water: &[Digit]) -> DigitSeq {
    for (i, &digit) in water.iter().enumerate() {
        if digit != 0 && (i >= rock.len() || rock[i] != digit) {
            return water[..=i].iter().copied().collect();
        }
    }
    water.iter().copied().collect()
}

/// Trims every sequence to the shortest prefix that still sorts strictly
/// apart from its predecessor.
///
/// Sequences compare digit-wise with shorter-is-less on prefix ties. A
/// descending list is processed in ascending order and reversed back, so
/// the trim always sees its lesser neighbour as the rock.
#[must_use]
pub fn chop_successive(mut seqs: Vec<DigitSeq>) -> Vec<DigitSeq> {
    let descending = seqs.len() >= 2 && seqs[0].as_slice() >= seqs[1].as_slice();
    if descending {
        seqs.reverse();
    }

    let mut result: Vec<DigitSeq> = Vec::with_capacity(seqs.len());
    for seq in &seqs {
        match result.last() {
            Some(rock) => result.push(chop_digits(rock, seq)),
            None => result.push(seq.clone()),
        }
    }

    if descending {
        result.reverse();
    }
    result
}
