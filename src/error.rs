use std::path::PathBuf;

use thiserror::Error;

/// Every candidate encoding (and the detector, when enabled) rejected the input bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no candidate encoding could decode the input (tried: {})", tried.join(", "))]
pub struct DecodeFailure {
    /// Names of the encodings attempted, in order.
    pub tried: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ElemTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Undetectable encoding: {path}")]
    UndetectableEncoding {
        path: PathBuf,
        #[source]
        source: DecodeFailure,
    },

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Invalid element symbol '{symbol}': {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

impl ElemTallyError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::UndetectableEncoding { .. } => "Encoding",
            Self::UnknownEncoding(_) => "UnknownEncoding",
            Self::InvalidSymbol { .. } => "InvalidSymbol",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::TomlSerialize(_) => "TomlSerialize",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::Csv(_) => "Csv",
            Self::Chart(_) => "Chart",
        }
    }

    /// Error message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Chart(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("failed to read {}", path.display()),
            Self::FileWrite { path, .. } => format!("failed to write {}", path.display()),
            Self::UndetectableEncoding { path, .. } => {
                format!("cannot determine the encoding of {}", path.display())
            }
            Self::UnknownEncoding(label) => format!("'{label}' is not a known encoding label"),
            Self::InvalidSymbol { symbol, reason } => format!("'{symbol}': {reason}"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::Csv(e) => e.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::UndetectableEncoding { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint shown below the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UndetectableEncoding { .. } => Some(
                "check the file's encoding manually, or add it to [encoding].candidates",
            ),
            Self::UnknownEncoding(_) => {
                Some("use an encoding label such as utf-8, gbk, shift_jis or latin1")
            }
            Self::InvalidSymbol { .. } => {
                Some("element symbols must be one or two non-whitespace characters")
            }
            Self::Chart(_) => Some("set [chart].font to a TrueType font, or pass --no-chart"),
            _ => None,
        }
    }

    /// Configuration and usage errors map to a different exit code than runtime failures.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::UnknownEncoding(_)
                | Self::InvalidSymbol { .. }
                | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ElemTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
