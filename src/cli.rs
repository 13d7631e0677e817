use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{DPI_RANGE, LOCAL_CONFIG_NAME};
use crate::output::{ColorMode, OutputFormat};
use crate::symbols::Preset;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "elem-tally")]
#[command(author, version, about = "Count chemical element symbols in formula listings")]
#[command(long_about = "Reads a text file of formula-like tokens in any common encoding, \
    counts element symbol occurrences per line and overall, and writes a CSV table and a PNG \
    bar chart of the totals.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Runtime error (unreadable input, undetectable encoding, chart failure)\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        match self.color {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }

    /// Log level implied by `-q` / `-v`; `RUST_LOG` may still override it.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count element symbols in a file and write the CSV table and chart
    Count(CountArgs),

    /// Re-encode a file as UTF-8
    Convert(ConvertArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Input file, one formula per line
    pub input: PathBuf,

    /// CSV output path (default from config: element_counts.csv)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// PNG chart output path (default from config: element_counts.png)
    #[arg(long, conflicts_with = "no_chart")]
    pub chart: Option<PathBuf>,

    /// Do not render the chart
    #[arg(long)]
    pub no_chart: bool,

    /// Chart resolution in dots per inch
    #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(*DPI_RANGE.start())..=i64::from(*DPI_RANGE.end())))]
    pub dpi: Option<u32>,

    /// Symbols to count (comma-separated, e.g., Fe,Co,Ni); overrides the preset
    #[arg(long, value_delimiter = ',', conflicts_with = "preset")]
    pub symbols: Option<Vec<String>>,

    /// Built-in symbol list
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Candidate encodings tried in order (comma-separated, e.g., utf-8,gbk,latin1)
    #[arg(long, value_delimiter = ',')]
    pub encodings: Option<Vec<String>>,

    /// Do not fall back to statistical encoding detection
    #[arg(long)]
    pub no_detect: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// File to convert
    pub input: PathBuf,

    /// Destination for the UTF-8 copy
    pub output: PathBuf,

    /// Candidate encodings tried in order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub encodings: Option<Vec<String>>,

    /// Do not fall back to statistical encoding detection
    #[arg(long)]
    pub no_detect: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file (default: the file `count` would load)
        path: Option<PathBuf>,
    },

    /// Display the effective configuration
    Show {
        /// Output format [possible values: text, json]
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
