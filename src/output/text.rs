use std::fmt::Write;

use crate::error::Result;
use crate::report::{Summary, TallyReport};
use crate::tally::LineTally;

use super::{ColorMode, ReportFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// One line of per-line output: `Line 3: {Fe: 2, Co: 1}`.
    #[must_use]
    pub fn format_line(&self, number: usize, tally: &LineTally) -> String {
        let mut counts = String::new();
        for (i, (symbol, count)) in tally.iter().enumerate() {
            if i > 0 {
                counts.push_str(", ");
            }
            let _ = write!(counts, "{}: {count}", self.paint(symbol, ansi::CYAN));
        }
        format!("Line {number}: {{{counts}}}")
    }

    /// Sorted totals, restricted to symbols that occurred.
    #[must_use]
    pub fn format_summary(&self, summary: &Summary) -> String {
        let mut output = String::new();
        let occurring = summary.occurring();

        if occurring.is_empty() {
            output.push_str(&self.paint("No elements with count >= 1.", ansi::YELLOW));
            output.push('\n');
            return output;
        }

        let _ = writeln!(
            output,
            "{}",
            self.paint("Global totals (sorted by count, descending):", ansi::BOLD)
        );
        let width = occurring
            .iter()
            .map(|entry| entry.symbol.chars().count())
            .max()
            .unwrap_or(0);
        for entry in occurring {
            let padded = format!("{:<width$}", entry.symbol);
            let _ = writeln!(output, "  {}: {}", self.paint(&padded, ansi::GREEN), entry.count);
        }

        if self.verbose > 0 {
            let _ = writeln!(
                output,
                "\n{} of {} symbols occurred, {} occurrences in total",
                occurring.len(),
                summary.len(),
                summary.total()
            );
        }
        output
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &TallyReport<'_>) -> Result<String> {
        let mut output = String::new();

        if self.verbose > 0 {
            let _ = writeln!(output, "Encoding: {}", report.encoding);
        }
        for (i, tally) in report.run.lines.iter().enumerate() {
            output.push_str(&self.format_line(i + 1, tally));
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&self.format_summary(report.summary));

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
