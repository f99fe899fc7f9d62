//! Token types for the Monkey lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source text that
//! produced it. Tokens borrow the source, so scanning allocates nothing.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A classified lexeme.
///
/// # Invariant
///
/// Every token except end-of-input has a non-empty `text` that is a
/// contiguous slice of the scanned source. The end-of-input token has kind
/// [`TokenKind::Eof`] and empty `text`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Token { kind, text }
    }

    /// The end-of-input token.
    #[inline]
    pub const fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            text: "",
        }
    }

    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source spelling of this token.
    #[inline]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

// Token is copied once per scan step and stored in token vectors.
// Contains: &str (16 bytes) + TokenKind (1 byte, padded) = 24 bytes
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(Token<'static>, 24);
    crate::static_assert_size!(TokenKind, 1);
}
