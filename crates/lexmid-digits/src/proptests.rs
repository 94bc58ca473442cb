//! Property-based tests for digit-sequence arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use proptest::prelude::*;

    use crate::chop::chop_digits;
    use crate::codec::{decode_digits, encode_number, DigitSeq};
    use crate::longform::{long_add_same_len, long_div, long_sub_same_len};
    use crate::round::round_fraction;

    // Strategy for a base and a digit sequence valid in that base
    fn base_and_digits() -> impl Strategy<Value = (usize, Vec<usize>)> {
        (2usize..62).prop_flat_map(|base| {
            (Just(base), proptest::collection::vec(0..base, 1..16))
        })
    }

    // Strategy for a base and two equal-length digit sequences
    fn base_and_digit_pair() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
        (2usize..62, 1usize..12).prop_flat_map(|(base, len)| {
            (
                Just(base),
                proptest::collection::vec(0..base, len),
                proptest::collection::vec(0..base, len),
            )
        })
    }

    proptest! {
        #[test]
        fn encode_decode_round_trip(x in any::<u64>(), base in 2usize..62) {
            let n = UBig::from(x);
            let digits = encode_number(&n, base);
            prop_assert_eq!(decode_digits(&digits, base), n);
        }

        #[test]
        fn encoded_digits_stay_below_the_base(x in any::<u64>(), base in 2usize..62) {
            let digits = encode_number(&UBig::from(x), base);
            prop_assert!(!digits.is_empty());
            prop_assert!(digits.iter().all(|&d| d < base));
        }

        #[test]
        fn long_div_reconstructs_the_numerator(
            (base, digits) in base_and_digits(),
            divisor in 1usize..100,
        ) {
            let (quotient, remainder) = long_div(&digits, divisor, base);
            prop_assert!(remainder < divisor);
            prop_assert_eq!(quotient.len(), digits.len());
            let rebuilt = decode_digits(&quotient, base) * UBig::from(divisor)
                + UBig::from(remainder);
            prop_assert_eq!(rebuilt, decode_digits(&digits, base));
        }

        #[test]
        fn subtraction_undoes_addition((base, a, b) in base_and_digit_pair()) {
            let (sum, carry, _rem, _den) =
                long_add_same_len(&a, &b, base, 0, 1).unwrap();
            prop_assume!(!carry); // overflow out of the top digit loses a place
            let (diff, _) = long_sub_same_len(&sum, &b, base, None, 0).unwrap();
            prop_assert_eq!(diff.as_slice(), a.as_slice());
        }

        #[test]
        fn subtraction_matches_integer_subtraction((base, a, b) in base_and_digit_pair()) {
            let big_a = decode_digits(&a, base);
            let big_b = decode_digits(&b, base);
            prop_assume!(big_a >= big_b);
            let (diff, _) = long_sub_same_len(&a, &b, base, None, 0).unwrap();
            prop_assert_eq!(decode_digits(&diff, base), big_a - big_b);
        }

        #[test]
        fn rounded_fraction_fits_its_places(
            base in 2usize..62,
            denominator in 1usize..10_000,
            remainder_seed in any::<usize>(),
        ) {
            let remainder = remainder_seed % denominator;
            let digits = round_fraction(remainder, denominator, base);

            let mut places = 0usize;
            let mut scale = UBig::from(1u8);
            while scale < UBig::from(denominator) {
                scale *= UBig::from(base);
                places += 1;
            }
            // A denominator of 1 needs no places but still encodes zero as [0].
            prop_assert_eq!(digits.len(), places.max(1));
            prop_assert!(decode_digits(&digits, base) < UBig::from(base).pow(places.max(1)));
        }

        #[test]
        fn chopping_preserves_strict_order((_base, a, b) in base_and_digit_pair()) {
            prop_assume!(a < b);
            let trimmed = chop_digits(&a, &b);
            let a: DigitSeq = a.into_iter().collect();
            prop_assert!(a.as_slice() < trimmed.as_slice());
            prop_assert!(b.starts_with(&trimmed));
        }
    }
}
