use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, ConvertArgs};
use crate::config::{Config, validate_config_semantics};
use crate::encoding::{Decoded, convert_to_utf8};
use crate::error::Result;

#[must_use]
pub fn run_convert(args: &ConvertArgs, cli: &Cli) -> i32 {
    match run_convert_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => super::fail(&e, cli.color_mode()),
    }
}

/// Re-encodes `args.input` as UTF-8 at `args.output`.
///
/// # Errors
/// Returns a configuration error for bad encoding settings, or a runtime
/// error if the input cannot be read or decoded or the output cannot be written.
pub fn run_convert_impl(args: &ConvertArgs, cli: &Cli) -> Result<Decoded> {
    let mut config = super::load_config(cli)?.config;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let decoded = convert_to_utf8(&config.resolver()?, &args.input, &args.output)?;

    if !cli.quiet {
        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "Converted {} ({}) to UTF-8: {}",
            args.input.display(),
            decoded.encoding.name(),
            args.output.display()
        )?;
    }
    Ok(decoded)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) {
    if let Some(encodings) = &args.encodings {
        config.encoding.candidates.clone_from(encodings);
    }
    if args.no_detect {
        config.encoding.detect = false;
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
