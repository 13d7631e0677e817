use indexmap::IndexMap;
use serde::Serialize;

use crate::symbols::SymbolSet;

/// Occurrences found on a single line. Only symbols that occurred are present,
/// in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineTally {
    counts: IndexMap<String, usize>,
}

impl LineTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, symbol: &str) {
        if let Some(count) = self.counts.get_mut(symbol) {
            *count += 1;
        } else {
            self.counts.insert(symbol.to_string(), 1);
        }
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts on the line.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }
}

/// Running total over every symbol in the set, zero-initialized.
///
/// Passed by value into each line step and handed back, so a run is a plain fold
/// with no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlobalTally {
    counts: IndexMap<String, usize>,
}

impl GlobalTally {
    #[must_use]
    pub fn new(symbols: &SymbolSet) -> Self {
        Self {
            counts: symbols.iter().map(|s| (s.to_string(), 0)).collect(),
        }
    }

    /// Adds a line's counts. Symbols outside the set are ignored.
    #[must_use]
    pub fn absorb(mut self, line: &LineTally) -> Self {
        for (symbol, count) in line.iter() {
            if let Some(total) = self.counts.get_mut(symbol) {
                *total += count;
            }
        }
        self
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in symbol-set order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }
}

/// Outcome of tallying a whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRun {
    /// One entry per input line, in input order.
    pub lines: Vec<LineTally>,
    pub total: GlobalTally,
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod tests;
