//! Hand-written single-pass scanner.
//!
//! The scanner sits on a [`Cursor`] and produces one [`Token`] per call with
//! zero heap allocation: every token borrows its spelling from the source.
//! Errors are encoded in-band as [`TokenKind::Illegal`] tokens, never as
//! `Result::Err`, so every call succeeds and the caller decides how to report.
//!
//! # Design
//!
//! Dispatch has two separate paths:
//!
//! - **Runs** (identifiers, keywords, integers) consume a maximal run of bytes
//!   and return with the cursor already on the first byte after the run.
//! - **Single characters** (operators, delimiters, illegal characters) are
//!   classified first and then consumed by exactly one `advance_char()`.
//!   `=`, `!`, `<` and `>` peek one byte ahead before committing so the
//!   composite operators `==`, `!=`, `<=`, `>=` fit the same path.
//!
//! Keeping the paths apart means neither can double-advance past a run.

use monkey_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;

/// Scanning session over one source string.
///
/// Produces tokens on demand. After the end-of-input token, every further
/// call keeps returning end-of-input.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned before the first token of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`Token::eof()`] when the source is exhausted, and again on
    /// every call after that.
    #[inline]
    pub fn next_token(&mut self) -> Token<'src> {
        self.next_spanned().0
    }

    /// Produce the next token together with its byte span.
    ///
    /// The end-of-input token gets a zero-length span at the source length.
    pub fn next_spanned(&mut self) -> (Token<'src>, Span) {
        self.skip_whitespace();
        let start = self.cursor.pos();
        let token = self.scan(start);
        let span = Span::new(start, self.cursor.pos());
        trace!(
            kind = %token.kind().name(),
            start = span.start,
            end = span.end,
            "token"
        );
        (token, span)
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once only end-of-input tokens remain.
    ///
    /// Trailing whitespace counts as consumed even before the scanner has
    /// skipped it.
    pub fn is_finished(&self) -> bool {
        let mut probe = self.cursor;
        probe.eat_while(is_whitespace);
        probe.is_eof()
    }

    fn scan(&mut self, start: usize) -> Token<'src> {
        let Some(byte) = self.cursor.current() else {
            return Token::eof();
        };

        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.word(start),
            b'0'..=b'9' => return self.integer(start),
            _ => {}
        }

        let kind = match byte {
            b'=' => self.with_equal(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.with_equal(TokenKind::Bang, TokenKind::NotEq),
            b'<' => self.with_equal(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.with_equal(TokenKind::Gt, TokenKind::GtEq),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => TokenKind::Illegal,
        };

        self.cursor.advance_char();
        Token::new(kind, self.cursor.slice_from(start))
    }

    // ─── Whitespace ─────────────────────────────────────────────

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    // ─── Runs ───────────────────────────────────────────────────

    /// Identifier or keyword. The cursor ends on the first non-word byte.
    fn word(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text)
    }

    /// Decimal integer literal. The cursor ends on the first non-digit byte.
    fn integer(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Operators ──────────────────────────────────────────────

    /// Peek for a trailing `=`. On a match, consume the first byte of the
    /// pair and return `composite`; the shared single-character advance
    /// consumes the `=`.
    fn with_equal(&mut self, single: TokenKind, composite: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(b'=') {
            self.cursor.advance();
            composite
        } else {
            single
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to, but not including, end-of-input.
    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// ASCII letters, digits and underscore.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests;
