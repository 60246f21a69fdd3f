//! Embed snippet configurator.
//!
//! Collects the reporter widget options and renders the `<script>` tags a
//! site owner pastes before `</body>`.

pub mod generator;
pub mod options;

pub use generator::{generate_snippet, SCRIPT_URL};
pub use options::{
    FeatureFlags, ScreenshotFormat, ScreenshotOptions, SnippetConfig, SnippetError,
    WidgetPosition, WidgetTheme,
};
