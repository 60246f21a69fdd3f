use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::debug;

use super::token::{Token, TokenKind};

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = [
        "async", "await", "const", "let", "var", "function", "new", "return",
    ]
    .into_iter()
    .collect();
    static ref BOOLEANS: HashSet<&'static str> = ["true", "false"].into_iter().collect();
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '{' | '}' | '(' | ')' | '[' | ']' | '.' | ',' | ';' | ':' | '?'
    )
}

fn is_operator_start(c: char) -> bool {
    c == '~' || is_operator_continuation(c)
}

fn is_operator_continuation(c: char) -> bool {
    matches!(
        c,
        '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^'
    )
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\'' || c == '`'
}

/// Splits `s` into maximal runs that are either all whitespace or all
/// non-whitespace, keeping both kinds of runs.
fn split_whitespace_runs(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (i, c) in s.char_indices() {
        let ws = c.is_whitespace();
        match in_whitespace {
            Some(prev) if prev != ws => {
                parts.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        in_whitespace = Some(ws);
    }
    if start < s.len() {
        parts.push(&s[start..]);
    }

    parts
}

/// Cursor over the source. Every token is a slice taken at the cursor, so the
/// emitted texts tile the input without gaps or overlaps.
struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn is_done(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, kind: TokenKind, len: usize) {
        if len == 0 {
            return;
        }
        let end = self.pos + len;
        self.tokens
            .push(Token::new(kind, &self.source[self.pos..end]));
        self.pos = end;
    }

    fn html_comment(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with("<!--") {
            return false;
        }
        match rest.find("-->") {
            Some(end) => {
                self.push(TokenKind::Comment, end + 3);
                true
            }
            None => false,
        }
    }

    fn tag(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with('<') {
            return false;
        }
        let Some(close) = rest.find('>') else {
            return false;
        };

        self.push(TokenKind::Tag, 1);

        let mut seen_name = false;
        for part in split_whitespace_runs(&rest[1..close]) {
            if part.chars().all(char::is_whitespace) {
                self.push(TokenKind::Plain, part.len());
            } else if !seen_name {
                self.push(TokenKind::Tag, part.len());
                seen_name = true;
            } else if let Some(eq) = part.find('=') {
                self.push(TokenKind::AttrName, eq);
                self.push(TokenKind::Punctuation, 1);
                self.push(TokenKind::AttrValue, part.len() - eq - 1);
            } else {
                self.push(TokenKind::AttrName, part.len());
            }
        }

        self.push(TokenKind::Tag, 1);
        true
    }

    fn line_comment(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with("//") {
            return false;
        }
        let len = rest.find('\n').unwrap_or(rest.len());
        self.push(TokenKind::Comment, len);
        true
    }

    fn string(&mut self) -> bool {
        let rest = self.rest();
        let Some(quote) = rest.chars().next().filter(|&c| is_quote(c)) else {
            return false;
        };

        // Unterminated strings run to the end of the input.
        let mut len = rest.len();
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                len = i + c.len_utf8();
                break;
            }
        }

        self.push(TokenKind::String, len);
        true
    }

    fn number(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        let len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        self.push(TokenKind::Number, len);
        true
    }

    fn word(&mut self) -> bool {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        if len == 0 {
            return false;
        }

        let word = &rest[..len];
        let kind = if KEYWORDS.contains(word) {
            TokenKind::Keyword
        } else if BOOLEANS.contains(word) {
            TokenKind::Boolean
        } else if rest[len..].trim_start().starts_with('(') {
            TokenKind::Function
        } else {
            TokenKind::Plain
        };

        self.push(kind, len);
        true
    }

    fn punctuation(&mut self) -> bool {
        if !self.rest().starts_with(is_punctuation) {
            return false;
        }
        self.push(TokenKind::Punctuation, 1);
        true
    }

    fn operator(&mut self) -> bool {
        let mut chars = self.rest().chars();
        if !chars.next().is_some_and(is_operator_start) {
            return false;
        }
        let len = if chars.next().is_some_and(is_operator_continuation) {
            2
        } else {
            1
        };
        self.push(TokenKind::Punctuation, len);
        true
    }

    fn plain_char(&mut self) {
        let len = self.rest().chars().next().map_or(0, char::len_utf8);
        self.push(TokenKind::Plain, len);
    }

    fn run(mut self) -> Vec<Token> {
        while !self.is_done() {
            let matched = self.html_comment()
                || self.tag()
                || self.line_comment()
                || self.string()
                || self.number()
                || self.word()
                || self.punctuation()
                || self.operator();
            if !matched {
                self.plain_char();
            }
        }
        self.tokens
    }
}

/// Classifies `code` into an ordered list of tokens.
///
/// Rules are tried in a fixed order and the first match wins: HTML comment,
/// tag, `//` comment, string, number, word, punctuation, operator, then a
/// single plain character. Malformed input never fails; it just degrades to
/// plain or best-effort spans.
pub fn tokenize(code: &str) -> Vec<Token> {
    let tokens = Lexer::new(code).run();
    debug!(bytes = code.len(), tokens = tokens.len(), "tokenized source");
    tokens
}

/// Joins token texts back into the source they were produced from.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
