//! Generating strings that sort strictly between two boundaries.

use lexmid_digits::{chop_successive, long_linspace, round_fraction, DigitSeq};

use crate::error::AlphabetError;
use crate::table::SymbolTable;

/// One boundary of a generation request.
///
/// `Auto` uses the table's default for that side: the first symbol as the
/// start, the last symbol repeated past the start's length as the end. An
/// empty string or empty token slice resolves the same way as `Auto`.
#[derive(Clone, Copy, Debug, Default)]
pub enum Boundary<'a> {
    /// Use the table's default boundary for this side.
    #[default]
    Auto,
    /// A plain string, tokenized per character (prefix-code tables only).
    Text(&'a str),
    /// An explicit sequence of symbol tokens; works for any table.
    Symbols(&'a [&'a str]),
}

impl<'a> From<&'a str> for Boundary<'a> {
    fn from(s: &'a str) -> Self {
        Boundary::Text(s)
    }
}

impl<'a> From<&'a String> for Boundary<'a> {
    fn from(s: &'a String) -> Self {
        Boundary::Text(s)
    }
}

impl<'a> From<&'a [&'a str]> for Boundary<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        Boundary::Symbols(tokens)
    }
}

impl SymbolTable {
    /// Generates `count` strings between this table's default boundaries.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SymbolTable::generate_with`].
    pub fn generate(&self, count: usize) -> Result<Vec<String>, AlphabetError> {
        self.generate_with(Boundary::Auto, Boundary::Auto, count, None, None)
    }

    /// Generates `count` strings sorting strictly between `start` and `end`.
    ///
    /// The outputs are strictly monotonic in the direction of the
    /// boundaries: increasing when `start < end`, decreasing otherwise, and
    /// every output sorts strictly inside the pair. Uses the table's
    /// natural base and `count + 1` divisions.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SymbolTable::generate_with`].
    pub fn generate_between<'a>(
        &self,
        start: impl Into<Boundary<'a>>,
        end: impl Into<Boundary<'a>>,
        count: usize,
    ) -> Result<Vec<String>, AlphabetError> {
        self.generate_with(start, end, count, None, None)
    }

    /// Generates `count` strings between `start` and `end` with explicit
    /// base and division count.
    ///
    /// `divisions` sets the interpolation granularity independently of
    /// `count`: asking for 5 strings over 101 divisions yields the first 5
    /// of the 100 strings a `count` of 100 would produce. Defaults (also
    /// used when `Some(0)` is passed) are the table's natural base and
    /// `count + 1`.
    ///
    /// # Errors
    ///
    /// - [`AlphabetError::UnsupportedBase`] for an effective base below 2.
    /// - [`AlphabetError::DigitExceedsBase`] when an overridden base is
    ///   smaller than a digit value decoded from a boundary.
    /// - [`AlphabetError::AmbiguousTokenization`] /
    ///   [`AlphabetError::UnknownSymbol`] from boundary tokenization.
    /// - [`AlphabetError::Digits`] wrapping
    ///   [`InseparableBoundaries`](lexmid_digits::DigitError::InseparableBoundaries)
    ///   when the padded boundaries compare equal, and
    ///   [`Underflow`](lexmid_digits::DigitError::Underflow) when
    ///   `divisions` is too small for `count + 1` steps.
    pub fn generate_with<'a>(
        &self,
        start: impl Into<Boundary<'a>>,
        end: impl Into<Boundary<'a>>,
        count: usize,
        base: Option<usize>,
        divisions: Option<usize>,
    ) -> Result<Vec<String>, AlphabetError> {
        let base = base.filter(|&b| b > 0).unwrap_or(self.max_base());
        if base < 2 {
            return Err(AlphabetError::UnsupportedBase(base));
        }
        let divisions = divisions.filter(|&m| m > 0).unwrap_or(count + 1);

        let (start_digits, start_len) = self.resolve_start(start.into())?;
        let end_digits = self.resolve_end(end.into(), start_len)?;

        // An overridden base must still cover every boundary digit, or the
        // long arithmetic would be handed digits it cannot borrow against.
        if let Some(&digit) = start_digits
            .iter()
            .chain(end_digits.iter())
            .find(|&&digit| digit >= base)
        {
            return Err(AlphabetError::DigitExceedsBase { digit, base });
        }

        let midpoints = long_linspace(&start_digits, &end_digits, base, count, divisions)?;

        let mut all: Vec<DigitSeq> = Vec::with_capacity(count + 2);
        all.push(start_digits);
        for midpoint in midpoints {
            let mut digits = midpoint.value;
            digits.extend(round_fraction(
                midpoint.remainder,
                midpoint.denominator,
                base,
            ));
            all.push(digits);
        }
        all.push(end_digits);

        let chopped = chop_successive(all);
        Ok(chopped[1..chopped.len() - 1]
            .iter()
            .map(|digits| self.digits_to_string(digits))
            .collect())
    }

    /// Resolves the start boundary to digits plus its length in characters
    /// (or tokens), which sizes the default end.
    fn resolve_start(
        &self,
        boundary: Boundary<'_>,
    ) -> Result<(DigitSeq, usize), AlphabetError> {
        match boundary {
            Boundary::Auto | Boundary::Text("") | Boundary::Symbols([]) => {
                let first = self.first_symbol();
                Ok((self.string_to_digits(first)?, first.chars().count()))
            }
            Boundary::Text(s) => Ok((self.string_to_digits(s)?, s.chars().count())),
            Boundary::Symbols(tokens) => {
                Ok((self.symbols_to_digits(tokens)?, tokens.len()))
            }
        }
    }

    fn resolve_end(
        &self,
        boundary: Boundary<'_>,
        start_len: usize,
    ) -> Result<DigitSeq, AlphabetError> {
        match boundary {
            Boundary::Auto | Boundary::Text("") | Boundary::Symbols([]) => {
                let default = self.last_symbol().repeat(start_len + 6);
                self.string_to_digits(&default)
            }
            Boundary::Text(s) => self.string_to_digits(s),
            Boundary::Symbols(tokens) => self.symbols_to_digits(tokens),
        }
    }
}
