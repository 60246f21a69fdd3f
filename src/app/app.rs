use crossterm::event::KeyCode;
use tracing::{info, warn};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{RenderState, StatusLine};
use super::state::ConfiguratorState;
use crate::engine::config::Config;
use crate::highlight::{tokenize, Token};
use crate::input::{self, LoadedSource};
use crate::snippet::{generate_snippet, SnippetConfig};
use crate::ui::command::{command_to_app_event, parse_command};

/// What the preview pane is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Generated,
    Loaded(LoadedSource),
}

pub struct App {
    pub mode: AppMode,
    pub snippet: SnippetConfig,
    pub configurator: ConfiguratorState,
    pub command_input: String,
    pub status: Option<StatusLine>,
    config: Config,
    preview: Preview,
    tokens: Vec<Token>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            mode: AppMode::Configure,
            snippet: config.snippet.config.clone(),
            configurator: ConfiguratorState::new(),
            command_input: String::new(),
            status: None,
            config,
            preview: Preview::Generated,
            tokens: Vec::new(),
        };
        app.refresh_preview();
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn snippet_text(&self) -> String {
        generate_snippet(&self.snippet)
    }

    fn set_mode(&mut self, mode: AppMode) {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "mode change");
            self.mode = mode;
        }
    }

    fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine::info(text));
    }

    fn set_warning(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!(%text, "warning shown");
        self.status = Some(StatusLine::warning(text));
    }

    fn show(&mut self, preview: Preview) {
        self.preview = preview;
        self.refresh_preview();
    }

    /// Re-runs the lexer over whatever the preview shows.
    fn refresh_preview(&mut self) {
        self.tokens = match &self.preview {
            Preview::Generated => tokenize(&generate_snippet(&self.snippet)),
            Preview::Loaded(source) => tokenize(&source.text),
        };
    }

    /// Called after any edit of the snippet options.
    fn snippet_changed(&mut self) {
        match self.snippet.validate() {
            Ok(()) => self.status = None,
            Err(err) => self.set_warning(err.to_string()),
        }
        self.show(Preview::Generated);
    }

    fn load(&mut self, result: Result<LoadedSource, input::LoadError>) {
        match result {
            Ok(source) => {
                self.set_info(format!("Loaded {}", source.label));
                self.show(Preview::Loaded(source));
            }
            Err(err) => self.set_warning(err.to_string()),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.set_mode(AppMode::Quit),
            AppEvent::Help => self.set_mode(AppMode::Help),
            AppEvent::LoadFile(path) => self.load(input::file::load(&path)),
            AppEvent::LoadClipboard => self.load(input::clipboard::load()),
            AppEvent::CopySnippet => match input::clipboard::copy(&self.snippet_text()) {
                Ok(()) => self.set_info("Snippet copied to clipboard"),
                Err(err) => self.set_warning(err.to_string()),
            },
            AppEvent::ResetSnippet => {
                self.snippet = self.config.snippet.config.clone();
                self.snippet_changed();
                self.set_info("Snippet options reset");
            }
            AppEvent::ShowGenerated => {
                self.status = None;
                self.show(Preview::Generated);
            }
            AppEvent::SetApiKey(key) => {
                self.snippet.api_key = key;
                self.snippet_changed();
            }
            AppEvent::SetWebhook(url) => {
                self.snippet.webhook_url = url;
                self.snippet_changed();
            }
            AppEvent::InvalidCommand(input) => {
                self.set_warning(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    fn adjust_selected(&mut self, forward: bool) {
        let field = self.configurator.selected_field();
        field.adjust(&mut self.snippet, forward, &self.config.snippet);
        self.snippet_changed();
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            AppMode::Configure => self.handle_configure_key(key),
            AppMode::Command => self.handle_command_key(key),
            AppMode::Help => self.set_mode(AppMode::Configure),
            AppMode::Quit => {}
        }
    }

    fn handle_configure_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.set_mode(AppMode::Quit),
            KeyCode::Char('?') => self.set_mode(AppMode::Help),
            KeyCode::Char(c @ (':' | '@')) => {
                self.command_input.clear();
                self.command_input.push(c);
                self.set_mode(AppMode::Command);
            }
            KeyCode::Up | KeyCode::Char('k') => self.configurator.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.configurator.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_selected(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.adjust_selected(true)
            }
            KeyCode::Esc => self.status = None,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.command_input.push(c),
            KeyCode::Backspace => {
                self.command_input.pop();
                if self.command_input.is_empty() {
                    self.set_mode(AppMode::Configure);
                }
            }
            KeyCode::Esc => {
                self.command_input.clear();
                self.set_mode(AppMode::Configure);
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.command_input);
                self.set_mode(AppMode::Configure);
                let event = command_to_app_event(parse_command(&line));
                self.handle_event(event);
            }
            _ => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let preview_title = match &self.preview {
            Preview::Generated => "Generated snippet".to_string(),
            Preview::Loaded(source) => source.label.clone(),
        };

        RenderState {
            mode: self.mode,
            preview_title,
            tokens: self.tokens.clone(),
            api_key: self.snippet.api_key.clone(),
            webhook_url: self.snippet.webhook_url.clone(),
            rows: self.configurator.rows(&self.snippet),
            selected: self.configurator.selected_index(),
            command_input: self.command_input.clone(),
            status: self.status.clone(),
            show_line_numbers: self.config.ui.show_line_numbers,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
