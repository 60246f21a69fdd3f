// Embed options for the Aminah bug reporter widget.
// Defaults match the snippet shown on the landing page.

use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const QUALITY_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const MAX_DELAY_MS: u32 = 5000;

pub const DEFAULT_API_KEY: &str = "your-api-key";
pub const DEFAULT_WEBHOOK_URL: &str = "https://your-n8n-webhook-url";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error("Webhook URL must start with http:// or https://: {0}")]
    InvalidWebhook(String),

    #[error("Screenshot quality {0} is outside 0.1..=1.0")]
    QualityOutOfRange(f32),

    #[error("Screenshot delay {0}ms exceeds 5000ms")]
    DelayOutOfRange(u32),
}

/// Corner of the page where the report button is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl WidgetPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetPosition::BottomRight => "bottom-right",
            WidgetPosition::BottomLeft => "bottom-left",
            WidgetPosition::TopRight => "top-right",
            WidgetPosition::TopLeft => "top-left",
        }
    }

    pub fn next(self) -> Self {
        match self {
            WidgetPosition::BottomRight => WidgetPosition::BottomLeft,
            WidgetPosition::BottomLeft => WidgetPosition::TopRight,
            WidgetPosition::TopRight => WidgetPosition::TopLeft,
            WidgetPosition::TopLeft => WidgetPosition::BottomRight,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WidgetPosition::BottomRight => WidgetPosition::TopLeft,
            WidgetPosition::BottomLeft => WidgetPosition::BottomRight,
            WidgetPosition::TopRight => WidgetPosition::BottomLeft,
            WidgetPosition::TopLeft => WidgetPosition::TopRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetTheme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl WidgetTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetTheme::Light => "light",
            WidgetTheme::Dark => "dark",
            WidgetTheme::Auto => "auto",
        }
    }

    pub fn next(self) -> Self {
        match self {
            WidgetTheme::Light => WidgetTheme::Dark,
            WidgetTheme::Dark => WidgetTheme::Auto,
            WidgetTheme::Auto => WidgetTheme::Light,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WidgetTheme::Light => WidgetTheme::Auto,
            WidgetTheme::Dark => WidgetTheme::Light,
            WidgetTheme::Auto => WidgetTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenshotFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ScreenshotFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenshotFormat::Png => "png",
            ScreenshotFormat::Jpeg => "jpeg",
            ScreenshotFormat::Webp => "webp",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ScreenshotFormat::Png => ScreenshotFormat::Jpeg,
            ScreenshotFormat::Jpeg => ScreenshotFormat::Webp,
            ScreenshotFormat::Webp => ScreenshotFormat::Png,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ScreenshotFormat::Png => ScreenshotFormat::Webp,
            ScreenshotFormat::Jpeg => ScreenshotFormat::Png,
            ScreenshotFormat::Webp => ScreenshotFormat::Jpeg,
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(WidgetPosition, WidgetTheme, ScreenshotFormat);

/// Optional capabilities of the reporter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub screenshot: bool,
    pub annotations: bool,
    pub console_logs: bool,
    pub network_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            screenshot: true,
            annotations: true,
            console_logs: false,
            network_logs: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenshotOptions {
    /// Encoder quality (0.1 to 1.0)
    pub quality: f32,
    /// Delay before capture, in milliseconds
    pub delay_ms: u32,
    pub format: ScreenshotFormat,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            quality: 0.8,
            delay_ms: 0,
            format: ScreenshotFormat::Png,
        }
    }
}

impl ScreenshotOptions {
    /// Moves quality by `step`, clamped to range and kept on one decimal.
    pub fn adjust_quality(&mut self, step: f32) {
        let next = (self.quality + step).clamp(*QUALITY_RANGE.start(), *QUALITY_RANGE.end());
        self.quality = (next * 10.0).round() / 10.0;
    }

    pub fn adjust_delay(&mut self, delta: i64) {
        let next = self.delay_ms as i64 + delta;
        self.delay_ms = next.clamp(0, MAX_DELAY_MS as i64) as u32;
    }

    pub(crate) fn same_as(&self, other: &ScreenshotOptions) -> bool {
        (self.quality - other.quality).abs() < 1e-4
            && self.delay_ms == other.delay_ms
            && self.format == other.format
    }
}

/// Everything the configurator collects to render an embed snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetConfig {
    pub api_key: String,
    pub webhook_url: String,
    pub position: WidgetPosition,
    pub theme: WidgetTheme,
    pub features: FeatureFlags,
    pub screenshot: ScreenshotOptions,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            position: WidgetPosition::default(),
            theme: WidgetTheme::default(),
            features: FeatureFlags::default(),
            screenshot: ScreenshotOptions::default(),
        }
    }
}

impl SnippetConfig {
    /// Checks the values a user can type in. Generation never depends on this.
    pub fn validate(&self) -> Result<(), SnippetError> {
        if self.api_key.trim().is_empty() {
            return Err(SnippetError::EmptyApiKey);
        }

        let url = self.webhook_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SnippetError::InvalidWebhook(self.webhook_url.clone()));
        }

        if !QUALITY_RANGE.contains(&self.screenshot.quality) {
            return Err(SnippetError::QualityOutOfRange(self.screenshot.quality));
        }

        if self.screenshot.delay_ms > MAX_DELAY_MS {
            return Err(SnippetError::DelayOutOfRange(self.screenshot.delay_ms));
        }

        Ok(())
    }
}
