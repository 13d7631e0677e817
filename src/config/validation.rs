//! Semantic checks applied after a configuration parses.

use std::ops::RangeInclusive;

use crate::config::Config;
use crate::encoding::lookup_label;
use crate::{ElemTallyError, Result};

pub const DPI_RANGE: RangeInclusive<u32> = 1..=1200;

/// Validates a parsed configuration.
///
/// # Errors
/// Returns `Config` for out-of-range chart settings or an empty candidate or
/// symbol list, `UnknownEncoding` for an unrecognized label, and
/// `InvalidSymbol` for a malformed symbol.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_symbols(config)?;
    validate_encoding(config)?;
    validate_chart(config)?;
    Ok(())
}

fn validate_symbols(config: &Config) -> Result<()> {
    if config.symbols.list.as_ref().is_some_and(Vec::is_empty) {
        return Err(ElemTallyError::Config(
            "symbols.list must contain at least one symbol".to_string(),
        ));
    }
    config.symbol_set().map(drop)
}

fn validate_encoding(config: &Config) -> Result<()> {
    if config.encoding.candidates.is_empty() {
        return Err(ElemTallyError::Config(
            "encoding.candidates must name at least one encoding".to_string(),
        ));
    }
    for label in &config.encoding.candidates {
        lookup_label(label)?;
    }
    Ok(())
}

fn validate_chart(config: &Config) -> Result<()> {
    let chart = &config.chart;

    if !DPI_RANGE.contains(&chart.dpi) {
        return Err(ElemTallyError::Config(format!(
            "chart.dpi must be between {} and {}, got {}",
            DPI_RANGE.start(),
            DPI_RANGE.end(),
            chart.dpi
        )));
    }
    for (name, value) in [("width", chart.width), ("height", chart.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ElemTallyError::Config(format!(
                "chart.{name} must be a positive number of inches, got {value}"
            )));
        }
    }
    if chart.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(ElemTallyError::Config("chart.title must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
