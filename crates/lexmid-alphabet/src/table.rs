//! Symbol tables: ordered alphabets with a symbol→digit mapping.

use std::fmt;

use dashu::integer::UBig;
use rustc_hash::{FxHashMap, FxHashSet};

use lexmid_digits::{decode_digits, encode_number, DigitSeq};

use crate::error::AlphabetError;

/// An ordered alphabet with a digit value for every symbol.
///
/// The ordered symbol list fixes the meaning of each digit value; the
/// mapping may additionally fold several spellings onto the same value
/// (e.g. upper- and lowercase letters), which is why it is supplied
/// separately in [`SymbolTable::with_mapping`].
///
/// A table is immutable after construction and can be shared freely across
/// any number of generation calls.
#[derive(Clone)]
pub struct SymbolTable {
    /// Symbol for each digit value, in digit order.
    num2sym: Vec<String>,
    /// Digit value for each accepted symbol spelling.
    sym2num: FxHashMap<String, usize>,
    /// Number of distinct digit values; the natural arithmetic radix.
    max_base: usize,
    /// Whether no symbol is a string-prefix of another, i.e. whether plain
    /// strings can be tokenized unambiguously.
    prefix_code: bool,
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("max_base", &self.max_base)
            .field("prefix_code", &self.prefix_code)
            .field("symbols", &self.num2sym)
            .finish()
    }
}

fn is_prefix_code(symbols: &[String]) -> bool {
    let mut sorted: Vec<&str> = symbols.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .all(|pair| pair[0] == pair[1] || !pair[1].starts_with(pair[0]))
}

impl SymbolTable {
    /// Builds a table where each symbol maps to its position.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::IncompleteSymbolMapping`] if a duplicate
    /// symbol shadows an earlier position, leaving that digit value with
    /// no spelling.
    pub fn new<I, S>(symbols: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let mapping = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self::build(symbols, mapping)
    }

    /// Builds a table with an explicit symbol→value mapping.
    ///
    /// The mapping may contain more spellings than there are symbols;
    /// every digit value in `[0, symbols)` must be reachable from at least
    /// one of them.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::IncompleteSymbolMapping`] if some digit
    /// value has no spelling.
    pub fn with_mapping<I, S, M, K>(symbols: I, mapping: M) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        M: IntoIterator<Item = (K, usize)>,
        K: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let mapping = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        Self::build(symbols, mapping)
    }

    fn build(
        num2sym: Vec<String>,
        sym2num: FxHashMap<String, usize>,
    ) -> Result<Self, AlphabetError> {
        let max_base = num2sym.len();
        let reachable: FxHashSet<usize> = sym2num.values().copied().collect();
        for value in 0..max_base {
            if !reachable.contains(&value) {
                return Err(AlphabetError::IncompleteSymbolMapping {
                    symbols: max_base,
                    missing: value,
                });
            }
        }
        let prefix_code = is_prefix_code(&num2sym);
        Ok(Self {
            num2sym,
            sym2num,
            max_base,
            prefix_code,
        })
    }

    /// The number of distinct digit values, i.e. the natural radix.
    #[must_use]
    pub fn max_base(&self) -> usize {
        self.max_base
    }

    /// Whether plain strings can be tokenized unambiguously.
    #[must_use]
    pub fn is_prefix_code(&self) -> bool {
        self.prefix_code
    }

    /// The canonical symbol for a digit value, if in range.
    #[must_use]
    pub fn symbol(&self, value: usize) -> Option<&str> {
        self.num2sym.get(value).map(String::as_str)
    }

    pub(crate) fn first_symbol(&self) -> &str {
        self.num2sym.first().map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn last_symbol(&self) -> &str {
        self.num2sym.last().map(String::as_str).unwrap_or_default()
    }

    /// Renders digit values as a string of this table's symbols.
    ///
    /// # Panics
    ///
    /// Panics if a digit value is out of range for the table; digits
    /// produced by this table's own codec never are.
    #[must_use]
    pub fn digits_to_string(&self, digits: &[usize]) -> String {
        digits.iter().map(|&d| self.num2sym[d].as_str()).collect()
    }

    /// Tokenizes a plain string into digit values, one character at a time.
    ///
    /// Characters with no digit value are silently skipped. This leniency
    /// is deliberate and load-bearing: folding tables rely on it so that
    /// mixed-case input tokenizes to the case-folded digit values without
    /// the caller pre-normalizing. Do not tighten it into a validation
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::AmbiguousTokenization`] if the symbol set
    /// is not a prefix code, in which case per-character splitting would be
    /// ambiguous and the caller must use [`SymbolTable::symbols_to_digits`].
    pub fn string_to_digits(&self, string: &str) -> Result<DigitSeq, AlphabetError> {
        if !self.prefix_code {
            return Err(AlphabetError::AmbiguousTokenization);
        }
        let mut buf = [0u8; 4];
        Ok(string
            .chars()
            .filter_map(|c| {
                let key: &str = c.encode_utf8(&mut buf);
                self.sym2num.get(key).copied()
            })
            .collect())
    }

    /// Converts an explicit sequence of symbol tokens into digit values.
    ///
    /// Works for any table, prefix code or not.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::UnknownSymbol`] for a token the mapping
    /// does not contain.
    pub fn symbols_to_digits(&self, tokens: &[&str]) -> Result<DigitSeq, AlphabetError> {
        tokens
            .iter()
            .map(|&token| {
                self.sym2num
                    .get(token)
                    .copied()
                    .ok_or_else(|| AlphabetError::UnknownSymbol(token.to_owned()))
            })
            .collect()
    }

    /// Encodes a non-negative integer in this table's natural base.
    #[must_use]
    pub fn number_to_digits(&self, n: &UBig) -> DigitSeq {
        encode_number(n, self.max_base)
    }

    /// Decodes digit values in this table's natural base.
    #[must_use]
    pub fn digits_to_number(&self, digits: &[usize]) -> UBig {
        decode_digits(digits, self.max_base)
    }

    /// Renders a non-negative integer as a string of this table's symbols.
    #[must_use]
    pub fn number_to_string(&self, n: &UBig) -> String {
        self.digits_to_string(&self.number_to_digits(n))
    }

    /// Parses a string of this table's symbols into an integer.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SymbolTable::string_to_digits`].
    pub fn string_to_number(&self, string: &str) -> Result<UBig, AlphabetError> {
        Ok(self.digits_to_number(&self.string_to_digits(string)?))
    }
}
