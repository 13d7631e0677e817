pub mod config;
pub mod convert;
pub mod count;
pub mod init;

use std::fs;
use std::io::Write;
use std::path::Path;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use convert::{run_convert, run_convert_impl};
pub use count::{CountOutcome, CountPlan, execute_count, run_count, run_count_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{ElemTallyError, Result};
use crate::output::{ColorMode, print_error_full};
use crate::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR};

/// Loads the configuration selected by the global flags.
///
/// # Errors
/// Returns an error if an explicit or discovered config file is invalid.
pub fn load_config(cli: &Cli) -> Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), cli.config.as_deref(), cli.no_config)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(err: &ElemTallyError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_RUNTIME_ERROR
    }
}

/// Prints `err` to stderr and returns its exit code.
pub(crate) fn fail(err: &ElemTallyError, color: ColorMode) -> i32 {
    print_error_full(err, color);
    exit_code_for(err)
}

/// Writes `content` to `path`, or to `out` when no path is given.
pub(crate) fn write_output<W: Write>(
    path: Option<&Path>,
    content: &str,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content).map_err(|source| ElemTallyError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote report to {}", path.display());
    } else if !quiet {
        out.write_all(content.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
