use std::fs;
use std::path::Path;

use crate::error::{ElemTallyError, Result};

use super::{Decoded, EncodingResolver};

/// Re-encodes `input` as UTF-8 and writes it to `output`, overwriting it.
///
/// Newlines are left untouched, so a file that is already UTF-8 is copied byte
/// for byte. Nothing is written when the input cannot be decoded.
///
/// # Errors
/// Returns `FileRead`, `UndetectableEncoding`, or `FileWrite`.
pub fn convert_to_utf8(resolver: &EncodingResolver, input: &Path, output: &Path) -> Result<Decoded> {
    let decoded = resolver.read_file(input)?;

    fs::write(output, decoded.text.as_bytes()).map_err(|source| ElemTallyError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!("wrote UTF-8 copy to {}", output.display());
    Ok(decoded)
}
