//! Loading drilling logs from disk.

use std::fs;
use std::path::Path;

use tracing::{debug, info_span};

use diggs_model::ParsedLog;

use crate::error::{IngestError, Result};
use crate::parser::parse_bytes;

/// Check that `path` names an existing regular file.
pub fn ensure_input_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reject byte-order marks of encodings the parser does not decode.
///
/// A UTF-8 BOM is accepted and stripped by the parser.
pub fn validate_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Read and parse a `.guh` file.
///
/// The whole file is loaded into memory. Only a missing, unreadable or
/// UTF-16 encoded file is an error; everything inside the file is handled
/// by the parser's skip-and-default policy.
pub fn read_log(path: &Path) -> Result<ParsedLog> {
    let span = info_span!("read_log", path = %path.display());
    let _guard = span.enter();

    ensure_input_file(path)?;
    let bytes = fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    validate_encoding(path, &bytes)?;
    debug!(bytes = bytes.len(), "loaded input file");
    Ok(parse_bytes(&bytes))
}
