//! Command parsing for the TUI command deck
//!
//! Parses the line typed after `:` or `@`:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:y` or `:copy` → Copy the generated snippet to the clipboard
//! - `:reset` → Restore default snippet options
//! - `:gen` → Show the generated snippet again
//! - `:key <value>` / `:webhook <url>` → Edit the text options
//! - `@path` → Load a file into the preview
//! - `@@` → Load the clipboard into the preview

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Copy,
    Reset,
    ShowGenerated,
    SetApiKey(String),
    SetWebhook(String),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };
        match (name, arg) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("y" | "copy", "") => Command::Copy,
            ("reset", "") => Command::Reset,
            ("gen", "") => Command::ShowGenerated,
            ("key", value) if !value.is_empty() => Command::SetApiKey(value.to_string()),
            ("webhook", url) if !url.is_empty() => Command::SetWebhook(url.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Copy => AppEvent::CopySnippet,
        Command::Reset => AppEvent::ResetSnippet,
        Command::ShowGenerated => AppEvent::ShowGenerated,
        Command::SetApiKey(key) => AppEvent::SetApiKey(key),
        Command::SetWebhook(url) => AppEvent::SetWebhook(url),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_copy_reset_gen() {
        assert_eq!(parse_command(":y"), Command::Copy);
        assert_eq!(parse_command(":copy"), Command::Copy);
        assert_eq!(parse_command(":reset"), Command::Reset);
        assert_eq!(parse_command(":gen"), Command::ShowGenerated);
    }

    #[test]
    fn test_parse_key_and_webhook() {
        assert_eq!(
            parse_command(":key  live-123 "),
            Command::SetApiKey("live-123".to_string())
        );
        assert_eq!(
            parse_command(":webhook https://n8n.example.com/hook"),
            Command::SetWebhook("https://n8n.example.com/hook".to_string())
        );
    }

    #[test]
    fn test_parse_key_without_value_is_unknown() {
        assert!(matches!(parse_command(":key"), Command::Unknown(_)));
        assert!(matches!(parse_command(":webhook   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_argument_on_bare_command_is_unknown() {
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  index.html"),
            Command::LoadFile("index.html".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event_mapping() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Copy), AppEvent::CopySnippet);
        assert_eq!(
            command_to_app_event(Command::LoadFile("a.html".to_string())),
            AppEvent::LoadFile("a.html".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
