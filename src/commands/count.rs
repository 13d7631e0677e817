use std::io::Write;
use std::path::PathBuf;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, CountArgs};
use crate::config::{Config, validate_config_semantics};
use crate::encoding::{Charset, EncodingResolver};
use crate::error::Result;
use crate::output::{
    ChartOutcome, ChartRenderer, ColorMode, JsonFormatter, OutputFormat, PlottersRenderer,
    ReportFormatter, TextFormatter, render_chart, write_csv,
};
use crate::report::{Summary, TallyReport};
use crate::symbols::SymbolSet;
use crate::tally::{TallyRun, Tokenizer};

/// Everything one `count` invocation needs once config and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountPlan {
    pub input: PathBuf,
    pub csv: PathBuf,
    /// `None` when charting is disabled.
    pub chart: Option<PathBuf>,
    pub dpi: u32,
    pub format: OutputFormat,
    /// Report destination; stdout when `None`.
    pub report: Option<PathBuf>,
    pub color: ColorMode,
    pub verbose: u8,
    pub quiet: bool,
}

impl CountPlan {
    /// Builds a plan from parsed arguments and an already-overridden config.
    #[must_use]
    pub fn new(args: &CountArgs, config: &Config) -> Self {
        Self {
            input: args.input.clone(),
            csv: config.output.csv.clone(),
            chart: (!args.no_chart).then(|| config.output.chart.clone()),
            dpi: config.chart.dpi,
            format: args.format,
            report: args.output.clone(),
            color: ColorMode::Auto,
            verbose: 0,
            quiet: false,
        }
    }

    #[must_use]
    pub fn with_display(mut self, color: ColorMode, verbose: u8, quiet: bool) -> Self {
        self.color = color;
        self.verbose = verbose;
        self.quiet = quiet;
        self
    }

    /// Per-line results are written as they are computed only for a text
    /// report going to the console.
    fn streams_lines(&self) -> bool {
        self.format == OutputFormat::Text && self.report.is_none() && !self.quiet
    }

    /// Status lines ("saved to ...") would corrupt a JSON document on stdout.
    fn prints_status(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }
}

#[derive(Debug, Clone)]
pub struct CountOutcome {
    pub summary: Summary,
    pub encoding: Charset,
    /// `None` when charting was disabled.
    pub chart: Option<ChartOutcome>,
}

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => super::fail(&e, cli.color_mode()),
    }
}

/// Runs `count` with the configuration selected by the global flags.
///
/// # Errors
/// Returns a configuration error for invalid settings, or a runtime error if
/// the input cannot be read or decoded or an output cannot be written.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<CountOutcome> {
    let mut config = super::load_config(cli)?.config;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let symbols = config.symbol_set()?;
    let resolver = config.resolver()?;
    let renderer = PlottersRenderer::new(config.chart_style());
    let plan = CountPlan::new(args, &config).with_display(cli.color_mode(), cli.verbose, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    execute_count(&plan, &symbols, &resolver, &renderer, &mut stdout)
}

/// Command-line flags take precedence over the loaded configuration.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CountArgs) {
    if let Some(preset) = args.preset {
        config.symbols.preset = preset;
        config.symbols.list = None;
    }
    if let Some(symbols) = &args.symbols {
        config.symbols.list = Some(symbols.clone());
    }
    if let Some(encodings) = &args.encodings {
        config.encoding.candidates.clone_from(encodings);
    }
    if args.no_detect {
        config.encoding.detect = false;
    }
    if let Some(csv) = &args.csv {
        config.output.csv.clone_from(csv);
    }
    if let Some(chart) = &args.chart {
        config.output.chart.clone_from(chart);
    }
    if let Some(dpi) = args.dpi {
        config.chart.dpi = dpi;
    }
}

/// Decodes, tallies and reports one input file.
///
/// Nothing is written when the input cannot be read or decoded. The CSV table
/// lists every symbol; the chart only those that occurred, and is skipped
/// when none did.
///
/// # Errors
/// Returns `FileRead` or `UndetectableEncoding` for the input, `FileWrite` or
/// `Csv` for the table and report, and `Chart` if rendering fails.
pub fn execute_count<W, R>(
    plan: &CountPlan,
    symbols: &SymbolSet,
    resolver: &EncodingResolver,
    renderer: &R,
    out: &mut W,
) -> Result<CountOutcome>
where
    W: Write,
    R: ChartRenderer + ?Sized,
{
    let decoded = resolver.read_file(&plan.input)?;
    let encoding = decoded.encoding.name();
    let tokenizer = Tokenizer::new(symbols);
    let text = TextFormatter::with_verbose(plan.color, plan.verbose);

    let run = if plan.streams_lines() {
        if plan.verbose > 0 {
            writeln!(out, "Encoding: {encoding}")?;
        }
        stream_lines(&tokenizer, &decoded.text, &text, out)?
    } else {
        tokenizer.tally_text(&decoded.text)
    };
    let summary = Summary::from_tally(&run.total);

    if plan.streams_lines() {
        writeln!(out)?;
        out.write_all(text.format_summary(&summary).as_bytes())?;
    } else {
        let report = TallyReport {
            run: &run,
            summary: &summary,
            encoding,
        };
        let rendered = match plan.format {
            OutputFormat::Text => text.format(&report)?,
            OutputFormat::Json => JsonFormatter.format(&report)?,
        };
        emit_report(plan, &rendered, out)?;
    }

    write_csv(summary.entries(), &plan.csv)?;
    if plan.prints_status() {
        writeln!(out, "CSV table saved to {}", plan.csv.display())?;
    }

    let chart = match &plan.chart {
        Some(path) => {
            let outcome = render_chart(renderer, &summary, path, plan.dpi)?;
            if plan.prints_status() {
                match outcome {
                    ChartOutcome::Rendered => writeln!(out, "Chart saved to {}", path.display())?,
                    ChartOutcome::Skipped => {
                        writeln!(out, "No element reached a count of 1; chart not generated.")?;
                    }
                }
            }
            Some(outcome)
        }
        None => None,
    };

    out.flush()?;
    Ok(CountOutcome {
        summary,
        encoding: decoded.encoding,
        chart,
    })
}

fn stream_lines<W: Write>(
    tokenizer: &Tokenizer<'_>,
    text: &str,
    formatter: &TextFormatter,
    out: &mut W,
) -> Result<TallyRun> {
    let mut failed = None;
    let run = tokenizer.tally_text_with(text, |number, line| {
        if failed.is_none() {
            failed = writeln!(out, "{}", formatter.format_line(number, line)).err();
        }
    });
    match failed {
        Some(e) => Err(e.into()),
        None => Ok(run),
    }
}

fn emit_report<W: Write>(plan: &CountPlan, rendered: &str, out: &mut W) -> Result<()> {
    super::write_output(plan.report.as_deref(), rendered, plan.quiet, out)?;
    match &plan.report {
        Some(path) if plan.prints_status() => writeln!(out, "Report saved to {}", path.display())?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
