pub mod app;
pub mod engine;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod snippet;
pub mod ui;

pub use highlight::{reconstruct, tokenize, Token, TokenKind};
pub use snippet::{generate_snippet, SnippetConfig};
