//! Lexer error types.
//!
//! The scanner itself never fails: an unrecognized character becomes a
//! [`TokenKind::Illegal`](monkey_ir::TokenKind::Illegal) token and scanning
//! continues. `LexError` exists for callers that prefer a `Result`, such as
//! [`tokenize_strict`](crate::tokenize_strict), and for parsers turning an
//! illegal token into a diagnostic.
//!
//! Errors carry WHERE (`span`) and WHAT (`kind`).

use monkey_ir::{Span, Token};
use thiserror::Error;

/// A lexical error located in the source.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("illegal character {found:?}")]
    IllegalCharacter { found: char },
}

impl LexError {
    /// Create an illegal-character error.
    #[cold]
    pub fn illegal_character(span: Span, found: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::IllegalCharacter { found },
        }
    }

    /// Build the error for an `Illegal` token scanned at `span`.
    ///
    /// The token's spelling is always exactly one character; an empty
    /// spelling (never produced by the scanner) maps to U+FFFD.
    #[cold]
    pub fn from_illegal(token: Token<'_>, span: Span) -> Self {
        let found = token.text().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        Self::illegal_character(span, found)
    }
}
