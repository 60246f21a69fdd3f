use std::fmt::Write;

use super::options::{FeatureFlags, ScreenshotOptions, SnippetConfig, WidgetPosition, WidgetTheme};

pub const SCRIPT_URL: &str = "https://cdn.aminah.io/aminah.js";

const INDENT: &str = "  ";

/// Escapes a value for a single-quoted JavaScript string.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn nested_block(name: &str, entries: &[(&str, String)]) -> String {
    let inner = INDENT.repeat(3);
    let body: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{inner}{key}: {value}"))
        .collect();
    format!(
        "{name}: {{\n{}\n{}}}",
        body.join(",\n"),
        INDENT.repeat(2)
    )
}

/// Renders the `<script>` embed for the reporter widget.
///
/// Only options that differ from their defaults are emitted, so the default
/// configuration yields the two-property snippet from the landing page.
pub fn generate_snippet(config: &SnippetConfig) -> String {
    let mut properties = vec![
        format!("apiKey: {}", js_string(&config.api_key)),
        format!("n8nWebhook: {}", js_string(&config.webhook_url)),
    ];

    if config.position != WidgetPosition::default() {
        properties.push(format!("position: {}", js_string(config.position.as_str())));
    }

    if config.theme != WidgetTheme::default() {
        properties.push(format!("theme: {}", js_string(config.theme.as_str())));
    }

    let features = config.features;
    if features != FeatureFlags::default() {
        properties.push(nested_block(
            "features",
            &[
                ("screenshot", features.screenshot.to_string()),
                ("annotations", features.annotations.to_string()),
                ("consoleLogs", features.console_logs.to_string()),
                ("networkLogs", features.network_logs.to_string()),
            ],
        ));
    }

    let shot = config.screenshot;
    if !shot.same_as(&ScreenshotOptions::default()) {
        properties.push(nested_block(
            "screenshot",
            &[
                ("quality", format!("{:.1}", shot.quality)),
                ("delay", shot.delay_ms.to_string()),
                ("format", js_string(shot.format.as_str())),
            ],
        ));
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "<script src=\"{SCRIPT_URL}\"></script>");
    let _ = writeln!(out, "<script>");
    let _ = writeln!(out, "{INDENT}Aminah.init({{");
    let last = properties.len() - 1;
    for (i, property) in properties.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        let _ = writeln!(out, "{}{property}{sep}", INDENT.repeat(2));
    }
    let _ = writeln!(out, "{INDENT}}});");
    out.push_str("</script>");
    out
}
