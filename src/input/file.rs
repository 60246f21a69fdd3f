use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use super::{LoadError, LoadedSource};

/// Reads a text file to highlight. Empty or whitespace-only files are rejected.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedSource, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    info!(path = %path.display(), bytes = text.len(), "loaded file");
    Ok(LoadedSource {
        label: path.display().to_string(),
        text,
    })
}
