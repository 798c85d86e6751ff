//! Reading a delimited record from disk.

use crate::error::{FlatcalcError, Result};
use std::path::Path;

/// Records larger than this are refused rather than read into memory.
pub const MAX_RECORD_BYTES: u64 = 16 * 1_048_576;

/// Read the text of a `.csv` record.
///
/// The extension is checked (case-insensitively) before the file's existence,
/// unless `require_csv_extension` is false.
pub fn read_record(path: &Path, require_csv_extension: bool) -> Result<String> {
    if require_csv_extension && !has_csv_extension(path) {
        return Err(FlatcalcError::NotCsv(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(FlatcalcError::MissingFile(path.to_path_buf()));
    }

    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_RECORD_BYTES {
        return Err(FlatcalcError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Refusing to read {}: record too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_RECORD_BYTES
            ),
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
