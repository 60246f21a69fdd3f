/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    CopySnippet,
    ResetSnippet,
    ShowGenerated,
    SetApiKey(String),
    SetWebhook(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
