use serde::Serialize;

use crate::tally::GlobalTally;

/// One row of the sorted summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementCount {
    pub symbol: String,
    pub count: usize,
}

impl ElementCount {
    #[must_use]
    pub fn new(symbol: impl Into<String>, count: usize) -> Self {
        Self {
            symbol: symbol.into(),
            count,
        }
    }
}

/// Global tally ordered by count, highest first.
///
/// Every symbol of the set is present, zeros included. Ties keep symbol-set
/// order. The CSV table uses [`Self::entries`]; console output and the chart
/// use [`Self::occurring`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    entries: Vec<ElementCount>,
}

impl Summary {
    #[must_use]
    pub fn from_tally(total: &GlobalTally) -> Self {
        let mut entries: Vec<_> = total
            .iter()
            .map(|(symbol, count)| ElementCount::new(symbol, count))
            .collect();
        // Stable: equal counts stay in symbol-set order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// All rows, zeros included.
    #[must_use]
    pub fn entries(&self) -> &[ElementCount] {
        &self.entries
    }

    /// Rows with a count of at least one.
    #[must_use]
    pub fn occurring(&self) -> &[ElementCount] {
        // Sorted descending, so the zeros form a suffix.
        let end = self.entries.partition_point(|entry| entry.count > 0);
        &self.entries[..end]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
