#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Field list has focus; keys change snippet options
    Configure,
    /// Command deck has focus; keys edit the command line
    Command,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Configure => " CONFIGURE ",
            AppMode::Command => " COMMAND ",
            AppMode::Help => " HELP ",
            AppMode::Quit => " QUIT ",
        }
    }
}
