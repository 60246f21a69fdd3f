//! Highlighter for HTML snippets with inline script.
//!
//! The lexer is a single left-to-right scan with a fixed rule order. It does
//! not parse either language; it only classifies spans for coloring, and the
//! concatenated token texts always equal the input.

pub mod lexer;
pub mod token;

pub use lexer::{reconstruct, tokenize};
pub use token::{Token, TokenKind};
