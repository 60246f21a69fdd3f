use aminah_snippet::snippet::{ScreenshotFormat, WidgetPosition, WidgetTheme};
use aminah_snippet::{generate_snippet, reconstruct, tokenize, SnippetConfig, TokenKind};

#[test]
fn default_snippet_matches_landing_page() {
    let expected = "<script src=\"https://cdn.aminah.io/aminah.js\"></script>
<script>
  Aminah.init({
    apiKey: 'your-api-key',
    n8nWebhook: 'https://your-n8n-webhook-url'
  });
</script>";
    assert_eq!(generate_snippet(&SnippetConfig::default()), expected);
}

#[test]
fn generated_snippet_highlights_losslessly() {
    let mut config = SnippetConfig {
        api_key: "live_8f2c".to_string(),
        webhook_url: "https://n8n.example.com/webhook/bugs".to_string(),
        position: WidgetPosition::TopRight,
        theme: WidgetTheme::Dark,
        ..SnippetConfig::default()
    };
    config.features.network_logs = true;
    config.screenshot.format = ScreenshotFormat::Jpeg;
    config.screenshot.adjust_quality(-0.3);
    assert_eq!(config.validate(), Ok(()));

    let snippet = generate_snippet(&config);
    let tokens = tokenize(&snippet);
    assert_eq!(reconstruct(&tokens), snippet);

    let find = |text: &str| tokens.iter().find(|t| t.text == text).map(|t| t.kind);
    assert_eq!(find("init"), Some(TokenKind::Function));
    assert_eq!(find("src"), Some(TokenKind::AttrName));
    assert_eq!(
        find("\"https://cdn.aminah.io/aminah.js\""),
        Some(TokenKind::AttrValue)
    );
    assert_eq!(find("'top-right'"), Some(TokenKind::String));
    assert_eq!(find("true"), Some(TokenKind::Boolean));
    assert_eq!(find("0.5"), Some(TokenKind::Number));
}

#[test]
fn invalid_config_still_generates() {
    let config = SnippetConfig {
        api_key: String::new(),
        webhook_url: "not a url".to_string(),
        ..SnippetConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(generate_snippet(&config).contains("n8nWebhook: 'not a url'"));
}
