use serde::Serialize;

use crate::error::Result;
use crate::report::{ElementCount, TallyReport};
use crate::tally::LineTally;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    encoding: &'a str,
    lines: &'a [LineTally],
    summary: &'a [ElementCount],
    total: Totals,
}

#[derive(Serialize)]
struct Totals {
    lines: usize,
    symbols: usize,
    occurring: usize,
    occurrences: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &TallyReport<'_>) -> Result<String> {
        let occurring = report.summary.occurring();
        let output = JsonOutput {
            encoding: report.encoding,
            lines: &report.run.lines,
            summary: occurring,
            total: Totals {
                lines: report.run.lines.len(),
                symbols: report.summary.len(),
                occurring: occurring.len(),
                occurrences: report.summary.total(),
            },
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}
