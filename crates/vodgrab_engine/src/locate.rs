use std::path::{Path, PathBuf};

use thiserror::Error;
use vodgrab_logging::grab_info;
use which::which;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("ffmpeg path does not exist: {0}")]
    MissingEngine(PathBuf),
    #[error("ffmpeg not found; install it or pass --ffmpeg-path")]
    EngineNotFound,
}

/// Resolves the ffmpeg binary: an explicit path wins and must exist,
/// otherwise PATH is searched. A missing ffmpeg is the one fatal
/// startup precondition of the tool.
pub fn resolve_ffmpeg(explicit: Option<&Path>) -> Result<PathBuf, SetupError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SetupError::MissingEngine(path.to_path_buf()));
        }
        grab_info!("using explicit ffmpeg path: {}", path.display());
        return Ok(path.to_path_buf());
    }

    match which("ffmpeg") {
        Ok(path) => {
            grab_info!("ffmpeg found in PATH: {}", path.display());
            Ok(path)
        }
        Err(_) => Err(SetupError::EngineNotFound),
    }
}

/// Derives the ffprobe binary from the resolved ffmpeg location: a
/// sibling executable next to ffmpeg first, then a PATH lookup. Absence
/// is not an error; duration estimation falls back to manifest parsing.
pub fn resolve_ffprobe(ffmpeg: &Path) -> Option<PathBuf> {
    let name = if cfg!(windows) { "ffprobe.exe" } else { "ffprobe" };
    if let Some(dir) = ffmpeg.parent() {
        let sibling = dir.join(name);
        if sibling.is_file() {
            return Some(sibling);
        }
    }
    which("ffprobe").ok()
}
