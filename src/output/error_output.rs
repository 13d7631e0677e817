//! Error and warning output for the terminal.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::ElemTallyError;

use super::{ColorMode, ansi};

/// Writes errors and warnings to stderr, colored when the terminal supports it.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color.
        std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
    }

    /// Prints an [`ElemTallyError`] with its detail and suggestion.
    pub fn print(&self, err: &ElemTallyError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    /// Writes an error block to `w`.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write to stderr is not worth a second error.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {d}"), ansi::DIM));
        }
        if let Some(s) = suggestion {
            let _ = writeln!(w, "  {} {s}", self.paint("help:", ansi::CYAN));
        }
    }

    /// Writes a one-line warning to `w`.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        let _ = writeln!(
            w,
            "{} {message}",
            self.paint("⚠ Warning:", ansi::YELLOW)
        );
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error using the given color mode.
pub fn print_error_full(err: &ElemTallyError, mode: ColorMode) {
    ErrorOutput::new(mode).print(err);
}

/// Prints a warning using the given color mode.
pub fn print_warning(message: &str, mode: ColorMode) {
    ErrorOutput::new(mode).print_warning(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
