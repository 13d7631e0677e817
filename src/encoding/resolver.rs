use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{DecodeFailure, ElemTallyError, Result};

use super::{ChardetDetector, EncodingDetector};

/// Candidate labels tried when no configuration overrides them.
pub const DEFAULT_CANDIDATES: &[&str] = &["utf-8", "gbk", "latin1"];

/// Labels that select [`Charset::Latin1`] instead of the WHATWG mapping.
///
/// WHATWG maps these to windows-1252, which turns bytes `0x80..=0x9F` into
/// punctuation. ISO-8859-1 maps every byte `N` to `U+00NN`.
const LATIN1_LABELS: &[&str] = &[
    "latin1",
    "latin-1",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "csisolatin1",
    "ibm819",
    "cp819",
];

/// A character encoding the resolver can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// An encoding from the WHATWG Encoding Standard.
    Whatwg(&'static Encoding),
    /// ISO-8859-1: each byte maps to the code point of the same value, so
    /// decoding never fails.
    Latin1,
}

impl Charset {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Whatwg(encoding) => encoding.name(),
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Decodes `bytes`, or `None` if they are malformed for this charset.
    fn decode_strict(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            Self::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        }
    }
}

impl From<&'static Encoding> for Charset {
    fn from(encoding: &'static Encoding) -> Self {
        Self::Whatwg(encoding)
    }
}

impl PartialEq<&'static Encoding> for Charset {
    fn eq(&self, other: &&'static Encoding) -> bool {
        matches!(self, Self::Whatwg(encoding) if encoding == other)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text decoded by an [`EncodingResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: Charset,
    /// True when the encoding came from the detector rather than the candidate list.
    pub detected: bool,
}

/// Tries an ordered list of encodings, then an optional detector.
///
/// Each attempt is a strict decode: malformed input fails the candidate
/// instead of producing replacement characters. A byte order mark is kept as
/// part of the text.
pub struct EncodingResolver {
    candidates: Vec<Charset>,
    detector: Option<Box<dyn EncodingDetector>>,
}

impl fmt::Debug for EncodingResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingResolver")
            .field(
                "candidates",
                &self.candidates.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("detector", &self.detector.is_some())
            .finish()
    }
}

impl Default for EncodingResolver {
    fn default() -> Self {
        let candidates = DEFAULT_CANDIDATES
            .iter()
            .filter_map(|label| lookup_label(label).ok())
            .collect();
        Self::new(candidates).with_detector(ChardetDetector)
    }
}

impl EncodingResolver {
    #[must_use]
    pub const fn new(candidates: Vec<Charset>) -> Self {
        Self {
            candidates,
            detector: None,
        }
    }

    /// Builds a resolver from encoding labels.
    ///
    /// # Errors
    /// Returns `UnknownEncoding` for a label `encoding_rs` does not recognize.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = labels
            .into_iter()
            .map(|label| lookup_label(label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(candidates))
    }

    #[must_use]
    pub fn with_detector(mut self, detector: impl EncodingDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    #[must_use]
    pub fn without_detector(mut self) -> Self {
        self.detector = None;
        self
    }

    #[must_use]
    pub fn candidates(&self) -> &[Charset] {
        &self.candidates
    }

    /// Decodes `bytes` with the first encoding that accepts them.
    ///
    /// # Errors
    /// Returns a [`DecodeFailure`] naming every encoding tried when none succeeds.
    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<Decoded, DecodeFailure> {
        let mut tried = Vec::with_capacity(self.candidates.len() + 1);

        for &encoding in &self.candidates {
            if let Some(text) = encoding.decode_strict(bytes) {
                log::debug!("decoded {} bytes as {}", bytes.len(), encoding.name());
                return Ok(Decoded {
                    text,
                    encoding,
                    detected: false,
                });
            }
            log::debug!("{} rejected the input", encoding.name());
            tried.push(encoding.name().to_string());
        }

        if let Some(detector) = &self.detector {
            match detector.detect(bytes) {
                Some(guess) => {
                    log::debug!("detector guessed {}", guess.name());
                    if let Some(text) = Charset::from(guess).decode_strict(bytes) {
                        return Ok(Decoded {
                            text,
                            encoding: guess.into(),
                            detected: true,
                        });
                    }
                    tried.push(format!("{} (detected)", guess.name()));
                }
                None => log::debug!("detector produced no guess"),
            }
        }

        Err(DecodeFailure { tried })
    }

    /// Reads and decodes a file.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read and
    /// `UndetectableEncoding` if no encoding accepts its contents.
    pub fn read_file(&self, path: &Path) -> Result<Decoded> {
        let bytes = fs::read(path).map_err(|source| ElemTallyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = self
            .decode(&bytes)
            .map_err(|source| ElemTallyError::UndetectableEncoding {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "read {} as {}{}",
            path.display(),
            decoded.encoding.name(),
            if decoded.detected { " (detected)" } else { "" }
        );
        Ok(decoded)
    }
}

/// Resolves a label such as `utf-8`, `gbk` or `latin1`.
///
/// Latin-1 labels select the byte-preserving [`Charset::Latin1`]; all other
/// labels follow the WHATWG Encoding Standard.
///
/// # Errors
/// Returns `UnknownEncoding` if the label is not recognized.
pub fn lookup_label(label: &str) -> Result<Charset> {
    let trimmed = label.trim();
    if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(trimmed)) {
        return Ok(Charset::Latin1);
    }
    Encoding::for_label(trimmed.as_bytes())
        .map(Charset::Whatwg)
        .ok_or_else(|| ElemTallyError::UnknownEncoding(label.to_string()))
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
