use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Not valid UTF-8 text: {0}")]
    InvalidEncoding(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Source text loaded into the preview, with a label for the title bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub label: String,
    pub text: String,
}

pub mod clipboard;
pub mod file;
