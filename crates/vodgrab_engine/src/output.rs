use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("output directory missing or not writable: {0}")]
pub struct OutputDirError(pub String);

/// Ensures the download directory exists and is writable; creates it
/// if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), OutputDirError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| OutputDirError(e.to_string()))?;
        if !meta.is_dir() {
            return Err(OutputDirError("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| OutputDirError(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| OutputDirError(e.to_string()))?;
    Ok(())
}
