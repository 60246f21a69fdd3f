// Configuration for the highlighter UI and snippet configurator
// Palette values are the landing page code block colors

use crate::snippet::SnippetConfig;

/// Hex colors per token kind plus the code block chrome
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Code block background (gray-900)
    pub background: String,

    /// Default foreground (gray-100)
    pub text: String,

    /// Highlight for the selected configurator row
    pub accent: String,

    pub comment: String,     // gray-500
    pub tag: String,         // purple-400
    pub attr_name: String,   // blue-400
    pub attr_value: String,  // green-400
    pub keyword: String,     // purple-400
    pub function: String,    // yellow-300
    pub string: String,      // green-400
    pub number: String,      // orange-400
    pub boolean: String,     // orange-400
    pub punctuation: String, // gray-400
    pub plain: String,       // gray-300
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#111827".to_string(),
            text: "#F3F4F6".to_string(),
            accent: "#C084FC".to_string(),
            comment: "#6B7280".to_string(),
            tag: "#C084FC".to_string(),
            attr_name: "#60A5FA".to_string(),
            attr_value: "#4ADE80".to_string(),
            keyword: "#C084FC".to_string(),
            function: "#FDE047".to_string(),
            string: "#4ADE80".to_string(),
            number: "#FB923C".to_string(),
            boolean: "#FB923C".to_string(),
            punctuation: "#9CA3AF".to_string(),
            plain: "#D1D5DB".to_string(),
        }
    }
}

/// Starting point and step sizes for the configurator
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetDefaults {
    /// Config restored by `:reset`
    pub config: SnippetConfig,

    /// Quality change per keypress (default 0.1)
    pub quality_step: f32,

    /// Delay change per keypress in ms (default 250)
    pub delay_step_ms: u32,
}

impl Default for SnippetDefaults {
    fn default() -> Self {
        Self {
            config: SnippetConfig::default(),
            quality_step: 0.1,
            delay_step_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Event poll timeout in ms (default 250)
    pub tick_ms: u64,

    /// Prefix preview lines with their number
    pub show_line_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            show_line_numbers: true,
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub snippet: SnippetDefaults,
    pub ui: UiConfig,
}
