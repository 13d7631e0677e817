use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::encoding::{ChardetDetector, DEFAULT_CANDIDATES, EncodingResolver};
use crate::error::Result;
use crate::output::ChartStyle;
use crate::symbols::{CUSTOM_CHART_TITLE, Preset, SymbolSet};

pub const DEFAULT_CSV_PATH: &str = "element_counts.csv";
pub const DEFAULT_CHART_PATH: &str = "element_counts.png";
pub const DEFAULT_DPI: u32 = 300;

/// Top-level `.elem-tally.toml` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub symbols: SymbolsConfig,

    #[serde(default)]
    pub encoding: EncodingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Which symbols are counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SymbolsConfig {
    #[serde(default)]
    pub preset: Preset,

    /// Explicit symbol list; replaces the preset when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EncodingConfig {
    /// WHATWG labels tried in order.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Fall back to statistical detection after every candidate failed.
    #[serde(default = "default_true")]
    pub detect: bool,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            detect: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv: PathBuf,

    #[serde(default = "default_chart_path")]
    pub chart: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: default_csv_path(),
            chart: default_chart_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Derived from the symbol selection when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Inches.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Inches.
    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_dpi")]
    pub dpi: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            title: None,
            width: style.width,
            height: style.height,
            dpi: DEFAULT_DPI,
            font: style.font,
        }
    }
}

impl Config {
    /// Builds the symbol set: the explicit list if given, otherwise the preset.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` if a listed symbol is malformed.
    pub fn symbol_set(&self) -> Result<SymbolSet> {
        match &self.symbols.list {
            Some(list) => SymbolSet::new(list),
            None => SymbolSet::new(self.symbols.preset.symbols()),
        }
    }

    /// Builds the encoding resolver described by `[encoding]`.
    ///
    /// # Errors
    /// Returns `UnknownEncoding` if a candidate label is not recognized.
    pub fn resolver(&self) -> Result<EncodingResolver> {
        let resolver = EncodingResolver::from_labels(&self.encoding.candidates)?;
        Ok(if self.encoding.detect {
            resolver.with_detector(ChardetDetector)
        } else {
            resolver
        })
    }

    /// The configured title, or one matching the symbol selection.
    #[must_use]
    pub fn chart_title(&self) -> &str {
        match (&self.chart.title, &self.symbols.list) {
            (Some(title), _) => title.as_str(),
            (None, Some(_)) => CUSTOM_CHART_TITLE,
            (None, None) => self.symbols.preset.chart_title(),
        }
    }

    #[must_use]
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            title: self.chart_title().to_string(),
            width: self.chart.width,
            height: self.chart.height,
            font: self.chart.font.clone(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| (*s).to_string()).collect()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_PATH)
}

fn default_width() -> f64 {
    ChartStyle::default().width
}

fn default_height() -> f64 {
    ChartStyle::default().height
}

const fn default_dpi() -> u32 {
    DEFAULT_DPI
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
