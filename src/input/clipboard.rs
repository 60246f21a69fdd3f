use arboard::Clipboard;
use tracing::info;

use super::{LoadError, LoadedSource};

pub const CLIPBOARD_LABEL: &str = "clipboard";

fn open() -> Result<Clipboard, LoadError> {
    Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))
}

/// Reads the clipboard text to highlight.
pub fn load() -> Result<LoadedSource, LoadError> {
    let text = open()?
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("clipboard is empty".to_string()));
    }

    info!(bytes = text.len(), "loaded clipboard");
    Ok(LoadedSource {
        label: CLIPBOARD_LABEL.to_string(),
        text,
    })
}

/// Puts the generated snippet on the clipboard.
pub fn copy(text: &str) -> Result<(), LoadError> {
    open()?
        .set_text(text.to_owned())
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    info!(bytes = text.len(), "copied snippet to clipboard");
    Ok(())
}
