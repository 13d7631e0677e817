mod chart;
mod error_output;
mod json;
mod table;
mod text;

pub use chart::{
    ChartOutcome, ChartRenderer, ChartStyle, PlottersRenderer, TAB20, pixel_size, points_to_pixels,
    render_chart,
};
pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::JsonFormatter;
pub use table::{write_csv, write_csv_to};
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::TallyReport;

/// Trait for formatting a finished tally into various output formats.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &TallyReport<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}
