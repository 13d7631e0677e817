use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{ElemTallyError, Result};
use crate::EXIT_SUCCESS;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => super::fail(&e, cli.color_mode()),
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns a `Config` error if the file already exists and `--force` was not
/// given, or `FileWrite` if it cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ElemTallyError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ElemTallyError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;
    log::info!("wrote configuration template to {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# elem-tally configuration file
#
# Looked up as .elem-tally.toml in the current directory, then as config.toml
# in the per-user configuration directory. Command-line flags take precedence.

[symbols]
# Built-in list: "metals" (81 metallic elements) or "elements" (all 118)
preset = "metals"

# Explicit list of one- or two-character symbols; replaces the preset
# list = ["Fe", "Co", "Ni", "Cr", "Mo"]

[encoding]
# Encodings tried in order; the first that decodes the whole file wins
candidates = ["utf-8", "gbk", "latin1"]

# Guess the encoding statistically when every candidate fails
detect = true

[output]
csv = "element_counts.csv"
chart = "element_counts.png"

[chart]
# Defaults to "Metal Element Counts (Count >= 1)" for the metals preset and
# "Element Counts (Count >= 1)" otherwise
# title = "Alloy survey"

# Figure size in inches
width = 12.0
height = 6.0

# Resolution (1-1200)
dpi = 300

# TrueType/OpenType font for labels; common system fonts are tried when unset
# font = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
