use crate::app::mode::AppMode;
use crate::highlight::Token;

/// One-line message under the command deck
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub is_warning: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_warning: false,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_warning: true,
        }
    }
}

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub preview_title: String,
    pub tokens: Vec<Token>,
    pub api_key: String,
    pub webhook_url: String,
    pub rows: Vec<(&'static str, String)>,
    pub selected: usize,
    pub command_input: String,
    pub status: Option<StatusLine>,
    pub show_line_numbers: bool,
}
