use indexmap::IndexSet;

use crate::error::{ElemTallyError, Result};

/// Longest symbol the tokenizer will try to match.
pub const MAX_SYMBOL_LEN: usize = 2;

/// Immutable, insertion-ordered set of element symbols.
///
/// Lookup is bucketed by symbol length (in characters) so the tokenizer can
/// try the longest candidate first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: IndexSet<String>,
    /// Distinct symbol lengths present, longest first.
    lengths: Vec<usize>,
}

impl SymbolSet {
    /// Builds a set from a list of symbols, keeping first-seen order.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` if a symbol is empty, longer than
    /// [`MAX_SYMBOL_LEN`] characters, or contains whitespace.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = IndexSet::new();
        let mut lengths = Vec::with_capacity(MAX_SYMBOL_LEN);

        for symbol in symbols {
            let symbol = symbol.as_ref();
            let len = validate_symbol(symbol)?;
            if !lengths.contains(&len) {
                lengths.push(len);
            }
            set.insert(symbol.to_string());
        }

        lengths.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self {
            symbols: set,
            lengths,
        })
    }

    /// Returns the stored symbol equal to `candidate`, if any.
    #[must_use]
    pub fn get(&self, candidate: &str) -> Option<&str> {
        self.symbols.get(candidate).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.symbols.contains(candidate)
    }

    /// Symbol lengths in characters, longest first.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

fn validate_symbol(symbol: &str) -> Result<usize> {
    let invalid = |reason: &str| ElemTallyError::InvalidSymbol {
        symbol: symbol.to_string(),
        reason: reason.to_string(),
    };

    if symbol.is_empty() {
        return Err(invalid("symbol is empty"));
    }
    if symbol.chars().any(char::is_whitespace) {
        return Err(invalid("symbol contains whitespace"));
    }

    let len = symbol.chars().count();
    if len > MAX_SYMBOL_LEN {
        return Err(invalid(&format!(
            "symbol has {len} characters, at most {MAX_SYMBOL_LEN} are allowed"
        )));
    }
    Ok(len)
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
