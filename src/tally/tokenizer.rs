use std::iter::FusedIterator;

use crate::symbols::SymbolSet;

use super::{GlobalTally, LineTally, TallyRun};

/// Greedy longest-match scanner over a [`SymbolSet`].
///
/// At each position the longest symbol length is tried first, so with both `Y`
/// and `Yb` in the set, `Yb` wins. Characters that start no symbol are skipped.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    symbols: &'a SymbolSet,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(symbols: &'a SymbolSet) -> Self {
        Self { symbols }
    }

    #[must_use]
    pub const fn symbols(&self) -> &'a SymbolSet {
        self.symbols
    }

    /// Iterates over the symbols matched in `line`, left to right.
    #[must_use]
    pub const fn matches<'l>(&self, line: &'l str) -> Matches<'a, 'l> {
        Matches {
            symbols: self.symbols,
            rest: line,
        }
    }

    /// Tallies one line and folds it into the running total.
    ///
    /// The line is expected to be stripped already; see [`Self::tally_text`].
    #[must_use]
    pub fn tally_line(&self, line: &str, total: GlobalTally) -> (LineTally, GlobalTally) {
        let mut tally = LineTally::new();
        for symbol in self.matches(line) {
            tally.record(symbol);
        }
        let total = total.absorb(&tally);
        (tally, total)
    }

    /// Tallies every line of `text`.
    #[must_use]
    pub fn tally_text(&self, text: &str) -> TallyRun {
        self.tally_text_with(text, |_, _| {})
    }

    /// Tallies every line of `text`, calling `on_line` with the 1-based line
    /// number and the line's tally as soon as it is computed.
    ///
    /// Lines are split on `\n`, `\r\n` or a lone `\r` and trimmed of
    /// surrounding whitespace.
    pub fn tally_text_with<F>(&self, text: &str, mut on_line: F) -> TallyRun
    where
        F: FnMut(usize, &LineTally),
    {
        let (lines, total) = split_lines(text).enumerate().fold(
            (Vec::new(), GlobalTally::new(self.symbols)),
            |(mut lines, total), (index, raw)| {
                let (tally, total) = self.tally_line(raw.trim(), total);
                on_line(index + 1, &tally);
                lines.push(tally);
                (lines, total)
            },
        );

        TallyRun { lines, total }
    }
}

/// Iterator returned by [`Tokenizer::matches`].
#[derive(Debug, Clone)]
pub struct Matches<'a, 'l> {
    symbols: &'a SymbolSet,
    rest: &'l str,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let symbols: &'a SymbolSet = self.symbols;

        while !self.rest.is_empty() {
            let rest = self.rest;
            let hit = symbols.lengths().iter().find_map(|&len| {
                let end = char_boundary(rest, len)?;
                symbols.get(&rest[..end]).map(|symbol| (symbol, end))
            });

            if let Some((symbol, end)) = hit {
                self.rest = &rest[end..];
                return Some(symbol);
            }

            // Noise: skip one character.
            let skip = rest.chars().next().map_or(0, char::len_utf8);
            self.rest = &rest[skip..];
        }
        None
    }
}

impl FusedIterator for Matches<'_, '_> {}

/// Splits on `\n`, `\r\n` and `\r`. A trailing terminator does not start
/// another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Byte offset just past the first `chars` characters, or `None` if `s` is shorter.
fn char_boundary(s: &str, chars: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(chars)
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
