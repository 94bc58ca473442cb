//! Property-based tests for the public generation surface.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use lexmid_digits::DigitError;

    use crate::builtin::{base36, decimal};
    use crate::error::AlphabetError;

    // Strategy for decimal boundary strings
    fn decimal_string() -> impl Strategy<Value = String> {
        "[0-9]{1,6}"
    }

    proptest! {
        #[test]
        fn outputs_are_strictly_monotonic_and_inside(
            start in decimal_string(),
            end in decimal_string(),
            count in 1usize..20,
        ) {
            let table = decimal();
            match table.generate_between(start.as_str(), end.as_str(), count) {
                Ok(keys) => {
                    prop_assert_eq!(keys.len(), count);
                    // Single-character symbols in digit order: string order
                    // and digit-sequence order coincide.
                    let mut chain = Vec::with_capacity(count + 2);
                    chain.push(start.clone());
                    chain.extend(keys);
                    chain.push(end.clone());
                    if start < end {
                        prop_assert!(chain.windows(2).all(|p| p[0] < p[1]));
                    } else {
                        prop_assert!(chain.windows(2).all(|p| p[0] > p[1]));
                    }
                }
                // The only failure the public surface may report for valid
                // boundaries: equal once padded. Length mismatches and
                // underflow must never escape.
                Err(err) => prop_assert_eq!(
                    err,
                    AlphabetError::Digits(DigitError::InseparableBoundaries)
                ),
            }
        }

        #[test]
        fn swapping_boundaries_reverses_the_keys(
            start in decimal_string(),
            end in decimal_string(),
            count in 1usize..12,
        ) {
            let table = decimal();
            let forward = table.generate_between(start.as_str(), end.as_str(), count);
            let backward = table.generate_between(end.as_str(), start.as_str(), count);
            match (forward, backward) {
                (Ok(forward), Ok(backward)) => {
                    let mut flipped = backward;
                    flipped.reverse();
                    prop_assert_eq!(forward, flipped);
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "asymmetric outcome: {a:?} vs {b:?}"),
            }
        }

        #[test]
        fn case_folding_makes_spelling_irrelevant(
            seed in "[0-9a-z]{1,8}",
            count in 1usize..8,
        ) {
            let table = base36();
            let upper = seed.to_uppercase();
            let folded = table.generate_between(seed.as_str(), "", count);
            let spelled = table.generate_between(upper.as_str(), "", count);
            prop_assert_eq!(folded, spelled);
        }

        #[test]
        fn small_base_overrides_report_typed_errors(
            start in decimal_string(),
            end in decimal_string(),
            base in 2usize..10,
        ) {
            let table = decimal();
            match table.generate_with(start.as_str(), end.as_str(), 2, Some(base), None) {
                Ok(keys) => prop_assert_eq!(keys.len(), 2),
                Err(AlphabetError::DigitExceedsBase { digit, base: b }) => {
                    prop_assert!(digit >= b);
                    prop_assert_eq!(b, base);
                }
                Err(err) => prop_assert_eq!(
                    err,
                    AlphabetError::Digits(DigitError::InseparableBoundaries)
                ),
            }
        }

        #[test]
        fn denser_counts_refine_coarser_ones(
            start in "[0-9]{1,3}",
            count in 1usize..8,
        ) {
            let table = decimal();
            let fine = table.generate_with(start.as_str(), "", 40, None, None);
            let partial = table.generate_with(start.as_str(), "", count, None, Some(41));
            match (fine, partial) {
                (Ok(fine), Ok(partial)) => {
                    prop_assert_eq!(&fine[..count], &partial[..]);
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "asymmetric outcome: {a:?} vs {b:?}"),
            }
        }
    }
}
