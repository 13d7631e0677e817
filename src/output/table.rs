//! `Element,Count` table output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ElemTallyError, Result};
use crate::report::ElementCount;

const HEADER: [&str; 2] = ["Element", "Count"];

/// Writes the table to `path`, replacing any existing file.
///
/// Zero-count rows are written too; callers pass the full summary.
///
/// # Errors
/// Returns `FileWrite` if the file cannot be created, or a CSV/IO error if
/// writing fails midway.
pub fn write_csv(entries: &[ElementCount], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ElemTallyError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(entries, file)?;
    log::info!("wrote {} rows to {}", entries.len(), path.display());
    Ok(())
}

/// Writes the table to any writer.
///
/// # Errors
/// Returns an error if a record cannot be written or the writer fails to flush.
pub fn write_csv_to<W: Write>(entries: &[ElementCount], writer: W) -> Result<()> {
    let mut table = csv::Writer::from_writer(writer);
    table.write_record(HEADER)?;
    for entry in entries {
        let count = entry.count.to_string();
        table.write_record([entry.symbol.as_str(), count.as_str()])?;
    }
    table.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
