use std::path::{Path, PathBuf};

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::Result;
use crate::output::OutputFormat;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { path } => {
            let path = path.as_deref().or(cli.config.as_deref());
            run_config_validate_impl(&FileConfigLoader::new(), path).map(|source| {
                if !cli.quiet {
                    println!("{}", validate_message(source.as_deref()));
                }
            })
        }
        ConfigAction::Show { format } => super::load_config(cli)
            .and_then(|loaded| run_config_show_impl(&loaded, *format))
            .and_then(|text| {
                super::write_output(None, &text, cli.quiet, &mut std::io::stdout().lock())
            }),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => super::fail(&e, cli.color_mode()),
    }
}

/// Validates `path`, or the file `count` would load when no path is given.
///
/// Returns the file that was validated, or `None` when no configuration
/// file exists and the built-in defaults apply.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, malformed or fails
/// semantic validation.
pub fn run_config_validate_impl<L: ConfigLoader>(
    loader: &L,
    path: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    Ok(loaded.source)
}

fn validate_message(source: Option<&Path>) -> String {
    source.map_or_else(
        || "No configuration file found; built-in defaults are valid".to_string(),
        |path| format!("Configuration is valid: {}", path.display()),
    )
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn run_config_show_impl(loaded: &LoadResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => format_config_text(loaded),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&loaded.config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// TOML rendering headed by a comment naming where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized as TOML.
pub fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let source = loaded.source.as_ref().map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let body = toml::to_string_pretty(&loaded.config)?;
    Ok(format!("# Effective configuration (source: {source})\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
