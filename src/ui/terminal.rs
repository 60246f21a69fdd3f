use crate::app::{mode::AppMode, App};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{render_code_view, render_command_deck, render_config_panel, render_help};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Clear,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        let theme = Theme::from_palette(&app.config().palette);
        let tick = Duration::from_millis(app.config().ui.tick_ms);
        info!(tick_ms = app.config().ui.tick_ms, "event loop started");

        loop {
            self.render_frame(app, &theme)?;

            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            // Propagate I/O errors instead of ignoring them
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App, theme: &Theme) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            // Main content above, command deck (border + line) at the bottom
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(2)])
                .split(area);

            // Configurator on the left, highlighted preview on the right
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(44), Constraint::Min(20)])
                .split(rows[0]);

            let panel = render_config_panel(
                &state.rows,
                state.selected,
                &state.api_key,
                &state.webhook_url,
                state.mode == AppMode::Configure,
                theme,
            );
            frame.render_widget(panel, columns[0]);

            let preview = render_code_view(
                &state.tokens,
                &state.preview_title,
                state.show_line_numbers,
                theme,
            );
            frame.render_widget(preview, columns[1]);

            if state.mode == AppMode::Help {
                frame.render_widget(Clear, columns[1]);
                frame.render_widget(render_help(theme), columns[1]);
            }

            render_command_deck(
                frame,
                rows[1],
                state.mode,
                &state.command_input,
                state.status.as_ref(),
                theme,
            );
        })?;

        Ok(())
    }
}
