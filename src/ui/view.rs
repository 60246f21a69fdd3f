use crate::app::{AppMode, StatusLine};
use crate::highlight::Token;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Splits tokens into display lines at `\n`, keeping each token's style.
pub fn highlight_lines(tokens: &[Token], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new()];

    for token in tokens {
        let style = theme.token_style(token.kind);
        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push(Span::styled(piece.to_string(), style));
                }
            }
        }
    }

    lines.into_iter().map(Line::from).collect()
}

pub fn render_code_view(
    tokens: &[Token],
    title: &str,
    show_line_numbers: bool,
    theme: &Theme,
) -> Paragraph<'static> {
    let mut lines = highlight_lines(tokens, theme);

    if show_line_numbers {
        let width = lines.len().to_string().len();
        let gutter = Style::default().fg(theme.dimmed).bg(theme.background);
        for (n, line) in lines.iter_mut().enumerate() {
            let number = Span::styled(format!("{:>width$} ", n + 1), gutter);
            line.spans.insert(0, number);
        }
    }

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().fg(theme.text).bg(theme.background))
}

pub fn render_config_panel(
    rows: &[(&'static str, String)],
    selected: usize,
    api_key: &str,
    webhook_url: &str,
    focused: bool,
    theme: &Theme,
) -> Paragraph<'static> {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.width())
        .chain(["API key".width(), "Webhook".width()])
        .max()
        .unwrap_or(0);

    let pad = |label: &str| {
        let fill = label_width.saturating_sub(label.width());
        format!("{}{}", label, " ".repeat(fill))
    };

    let label_style = Style::default().fg(theme.dimmed);
    let value_style = Style::default().fg(theme.text);
    let selected_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("  {}  ", pad("API key")), label_style),
            Span::styled(api_key.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}  ", pad("Webhook")), label_style),
            Span::styled(webhook_url.to_string(), value_style),
        ]),
        Line::from(""),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let is_selected = focused && i == selected;
        let marker = if is_selected { "› " } else { "  " };
        let style = if is_selected { selected_style } else { value_style };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}  ", marker, pad(*label)), label_style),
            Span::styled(format!("‹ {} ›", value), style),
        ]));
    }

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Configure ")
                .border_style(Style::default().fg(if focused {
                    theme.accent
                } else {
                    theme.dimmed
                })),
        )
        .style(Style::default().bg(theme.surface))
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let text = "j/k or ↑/↓   select option\n\
                h/l or ←/→   change option (space toggles)\n\
                :y           copy snippet to clipboard\n\
                :key VALUE   set API key\n\
                :webhook URL set n8n webhook\n\
                :reset       restore defaults\n\
                @file        highlight a file\n\
                @@           highlight the clipboard\n\
                :gen         show the generated snippet\n\
                q or :q      quit\n\n\
                press any key to return";
    Paragraph::new(text)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().fg(theme.text).bg(theme.surface))
}

pub fn render_command_deck(
    frame: &mut Frame,
    area: Rect,
    mode: AppMode,
    input: &str,
    status: Option<&StatusLine>,
    theme: &Theme,
) {
    // Clear the command area first
    frame.render_widget(Clear, area);

    // Left accent bar and input area
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar = Paragraph::new("▌").style(Style::default().fg(theme.accent).bg(theme.surface));
    frame.render_widget(accent_bar, layout[0]);

    let body = match (mode, status) {
        (AppMode::Command, _) => Span::styled(input.to_string(), Style::default().fg(theme.text)),
        (_, Some(status)) if status.is_warning => {
            Span::styled(status.text.clone(), Style::default().fg(theme.warning))
        }
        (_, Some(status)) => Span::styled(status.text.clone(), Style::default().fg(theme.text)),
        (_, None) => Span::styled(
            "Type :y to copy, @file to highlight, ? for help".to_string(),
            Style::default().fg(theme.dimmed),
        ),
    };

    let line = Line::from(vec![
        Span::styled(
            mode.label(),
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        body,
    ]);

    let input_widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().fg(theme.text).bg(theme.surface));

    frame.render_widget(input_widget, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{tokenize, TokenKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_lines_split_on_newline() {
        let theme = Theme::landing();
        let lines = highlight_lines(&tokenize("<p>\n// hi\nx"), &theme);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["<p>", "// hi", "x"]);
    }

    #[test]
    fn test_highlight_lines_keep_styles() {
        let theme = Theme::landing();
        let lines = highlight_lines(&tokenize("foo()"), &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].style, theme.token_style(TokenKind::Function));
    }

    #[test]
    fn test_highlight_lines_multiline_string_token() {
        let theme = Theme::landing();
        let lines = highlight_lines(&tokenize("`a\nb`"), &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].style, theme.token_style(TokenKind::String));
    }

    #[test]
    fn test_highlight_lines_empty_input() {
        let lines = highlight_lines(&[], &Theme::landing());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_code_view_renders_line_numbers() {
        let theme = Theme::landing();
        let tokens = tokenize("a\nb");
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| {
                let view = render_code_view(&tokens, "demo", true, &theme);
                frame.render_widget(view, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16)
            .map(|x| buffer[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(row.contains("1 a"));
    }

    #[test]
    fn test_config_panel_marks_selected_row() {
        let rows = vec![("Theme", "auto".to_string()), ("Quality", "0.8".to_string())];
        let panel = render_config_panel(&rows, 1, "k", "https://x", true, &Theme::landing());
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(panel, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40u16)
            .map(|x| buffer[(x, 5u16)].symbol().to_string())
            .collect();
        assert!(row.contains("› Quality"));
    }

    #[test]
    fn test_command_deck_shows_warning() {
        let theme = Theme::landing();
        let status = StatusLine::warning("Unknown command: :x");
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        terminal
            .draw(|frame| {
                render_command_deck(
                    frame,
                    frame.area(),
                    AppMode::Configure,
                    "",
                    Some(&status),
                    &theme,
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16)
            .map(|x| buffer[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(row.contains("Unknown command"));
    }

    #[test]
    fn test_render_help_creates_paragraph() {
        let paragraph = render_help(&Theme::landing());
        let _ = paragraph;
    }
}
