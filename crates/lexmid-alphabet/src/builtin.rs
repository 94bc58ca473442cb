//! Prebuilt symbol tables for common alphabets.

use crate::table::SymbolTable;

const DIGITS: &str = "0123456789";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn chars(s: &str) -> impl Iterator<Item = String> + '_ {
    s.chars().map(String::from)
}

/// The ten decimal digits.
#[must_use]
pub fn decimal() -> SymbolTable {
    SymbolTable::new(chars(DIGITS)).expect("decimal alphabet is well formed")
}

/// Digits and lowercase letters, with uppercase folded onto lowercase.
///
/// `"AZ"` and `"az"` tokenize to the same digit values, so either spelling
/// generates identical keys.
#[must_use]
pub fn base36() -> SymbolTable {
    let mapping = chars(DIGITS)
        .chain(chars(LOWER))
        .chain(chars(UPPER))
        .enumerate()
        .map(|(i, c)| (c, if i < 36 { i } else { i - 26 }));
    SymbolTable::with_mapping(chars(DIGITS).chain(chars(LOWER)), mapping)
        .expect("base36 alphabet is well formed")
}

/// Digits, uppercase, then lowercase: the full case-sensitive base62.
#[must_use]
pub fn base62() -> SymbolTable {
    SymbolTable::new(chars(DIGITS).chain(chars(UPPER)).chain(chars(LOWER)))
        .expect("base62 alphabet is well formed")
}

/// Lowercase letters, with uppercase folded onto lowercase.
#[must_use]
pub fn letters() -> SymbolTable {
    let mapping = chars(LOWER)
        .chain(chars(UPPER))
        .enumerate()
        .map(|(i, c)| (c, i % 26));
    SymbolTable::with_mapping(chars(LOWER), mapping)
        .expect("letters alphabet is well formed")
}
