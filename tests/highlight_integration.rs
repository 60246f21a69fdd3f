//! End-to-end behavior of the highlighter through the public API

use aminah_snippet::{reconstruct, tokenize, Token, TokenKind};
use proptest::prelude::*;

fn t(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(tokenize(""), vec![]);
}

#[test]
fn html_comment_is_one_token() {
    assert_eq!(tokenize("<!-- hi -->"), vec![t(TokenKind::Comment, "<!-- hi -->")]);
}

#[test]
fn tag_with_quoted_attribute() {
    assert_eq!(
        tokenize("<div class=\"a\">"),
        vec![
            t(TokenKind::Tag, "<"),
            t(TokenKind::Tag, "div"),
            t(TokenKind::Plain, " "),
            t(TokenKind::AttrName, "class"),
            t(TokenKind::Punctuation, "="),
            t(TokenKind::AttrValue, "\"a\""),
            t(TokenKind::Tag, ">"),
        ]
    );
}

#[test]
fn const_declaration() {
    assert_eq!(
        tokenize("const x = 5;"),
        vec![
            t(TokenKind::Keyword, "const"),
            t(TokenKind::Plain, " "),
            t(TokenKind::Plain, "x"),
            t(TokenKind::Plain, " "),
            t(TokenKind::Punctuation, "="),
            t(TokenKind::Plain, " "),
            t(TokenKind::Number, "5"),
            t(TokenKind::Punctuation, ";"),
        ]
    );
}

#[test]
fn call_expression() {
    assert_eq!(
        tokenize("foo()"),
        vec![
            t(TokenKind::Function, "foo"),
            t(TokenKind::Punctuation, "("),
            t(TokenKind::Punctuation, ")"),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(tokenize("'abc"), vec![t(TokenKind::String, "'abc")]);
}

#[test]
fn unterminated_constructs_do_not_panic() {
    for code in ["<!-- open", "<div class=", "`tpl ${x", "// c", "\"", "<", "   \n\t"] {
        assert_eq!(reconstruct(&tokenize(code)), code);
    }
}

#[test]
fn landing_snippet_script_body() {
    let code = "<script>\n  Aminah.init({\n    apiKey: 'your-api-key'\n  });\n</script>";
    let tokens = tokenize(code);

    assert_eq!(reconstruct(&tokens), code);
    assert!(tokens.contains(&t(TokenKind::Function, "init")));
    assert!(tokens.contains(&t(TokenKind::Plain, "Aminah")));
    assert!(tokens.contains(&t(TokenKind::Plain, "apiKey")));
    assert!(tokens.contains(&t(TokenKind::String, "'your-api-key'")));
    assert!(tokens.contains(&t(TokenKind::Tag, "/script")));
}

#[test]
fn async_function_sample() {
    let code = "async function send(report) {\n  return await fetch(url, { ok: true });\n}";
    let kinds: Vec<TokenKind> = tokenize(code)
        .into_iter()
        .filter(|t| !t.text.trim().is_empty())
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        &kinds[..4],
        &[
            TokenKind::Keyword,
            TokenKind::Keyword,
            TokenKind::Function,
            TokenKind::Punctuation
        ]
    );
    assert!(kinds.contains(&TokenKind::Boolean));
}

proptest! {
    #[test]
    fn concatenation_reconstructs_input(code in any::<String>()) {
        prop_assert_eq!(reconstruct(&tokenize(&code)), code);
    }

    #[test]
    fn markup_like_input_round_trips(code in r#"[<>!/=\-a-z "'`\\(){};:.0-9\n]{0,64}"#) {
        let tokens = tokenize(&code);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
        prop_assert_eq!(reconstruct(&tokens), code);
    }

    #[test]
    fn tokenizing_is_deterministic(code in any::<String>()) {
        prop_assert_eq!(tokenize(&code), tokenize(&code));
    }
}
