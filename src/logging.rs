//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a file in the temp directory. The
//! filter comes from `AMINAH_LOG` (same syntax as `RUST_LOG`); `off` skips
//! installing a subscriber at all.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::engine::error::AppError;

pub const LOG_ENV: &str = "AMINAH_LOG";
pub const LOG_FILE_NAME: &str = "aminah-snippet.log";
pub const DEFAULT_FILTER: &str = "aminah_snippet=info";

/// Resolves the filter directive from an optional env value.
pub fn filter_directive(env_value: Option<String>) -> Option<String> {
    match env_value {
        Some(value) if value.trim().eq_ignore_ascii_case("off") => None,
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => Some(DEFAULT_FILTER.to_string()),
    }
}

/// Installs the global subscriber. Returns the log file path when logging is on.
pub fn init_logging() -> Result<Option<PathBuf>, AppError> {
    let Some(directive) = filter_directive(env::var(LOG_ENV).ok()) else {
        return Ok(None);
    };

    let path = env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_when_unset() {
        assert_eq!(filter_directive(None), Some(DEFAULT_FILTER.to_string()));
        assert_eq!(
            filter_directive(Some("  ".to_string())),
            Some(DEFAULT_FILTER.to_string())
        );
    }

    #[test]
    fn test_filter_off_disables() {
        assert_eq!(filter_directive(Some("off".to_string())), None);
        assert_eq!(filter_directive(Some("OFF ".to_string())), None);
    }

    #[test]
    fn test_filter_passes_through() {
        assert_eq!(
            filter_directive(Some("aminah_snippet=debug".to_string())),
            Some("aminah_snippet=debug".to_string())
        );
    }
}
