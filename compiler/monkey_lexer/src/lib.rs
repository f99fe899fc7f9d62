//! Lexer for Monkey.
//!
//! Converts source text into the token vocabulary of [`monkey_ir`]:
//!
//! - [`Cursor`]: byte cursor with one byte of lookahead
//! - [`Scanner`]: produces one [`Token`] per call, never fails
//! - [`keywords::lookup`]: reserved-word table
//! - [`LexError`]: `Result`-style view of illegal characters
//!
//! ```
//! use monkey_ir::TokenKind;
//! use monkey_lexer::Scanner;
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind(), TokenKind::Let);
//! assert_eq!(scanner.next_token().text(), "five");
//! ```

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use monkey_ir::{Span, Token, TokenKind};
pub use scanner::Scanner;

use tracing::debug;

/// Scan `source` to completion.
///
/// Returns every token in order, ending with exactly one
/// [`TokenKind::Eof`]. Illegal characters appear as `Illegal` tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        tokens.push(tok);
        if tok.is_eof() {
            break;
        }
    }
    debug!(
        tokens = tokens.len(),
        illegal = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Illegal)
            .count(),
        "tokenized"
    );
    tokens
}

/// Scan `source` to completion, failing on the first illegal character.
///
/// On success the result is identical to [`tokenize`].
pub fn tokenize_strict(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let (tok, span) = scanner.next_spanned();
        if tok.kind() == TokenKind::Illegal {
            return Err(LexError::from_illegal(tok, span));
        }
        tokens.push(tok);
        if tok.is_eof() {
            return Ok(tokens);
        }
    }
}
