//! Reserved-word resolution.
//!
//! Keywords are lexically identical to identifiers. The scanner reads the
//! whole word first and only then asks [`lookup`] whether the spelling is
//! reserved. The table is a compile-time `match`, bucketed by length so most
//! identifiers are rejected after a single length check.

use monkey_ir::TokenKind;

/// Look up a reserved word by its spelling.
///
/// Returns the keyword's `TokenKind`, or `None` if `text` is an ordinary
/// identifier. Matching is case-sensitive: `Let` is an identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    // Guard: all keywords are 2-6 chars
    if !(2..=6).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
