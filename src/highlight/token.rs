use std::fmt;

/// Classification of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Tag,
    AttrName,
    AttrValue,
    Keyword,
    Function,
    String,
    Number,
    Boolean,
    Punctuation,
    Plain,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Comment,
        TokenKind::Tag,
        TokenKind::AttrName,
        TokenKind::AttrValue,
        TokenKind::Keyword,
        TokenKind::Function,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Boolean,
        TokenKind::Punctuation,
        TokenKind::Plain,
    ];

    /// Stable lowercase name, used by renderers to look up styles.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Tag => "tag",
            TokenKind::AttrName => "attr-name",
            TokenKind::AttrValue => "attr-value",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "function",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, contiguous span of the highlighted source.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
