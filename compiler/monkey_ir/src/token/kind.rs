//! Token kinds for Monkey.

use std::fmt;

/// Token kinds for Monkey, with semantic range layout.
///
/// All values fit in a single `u8`, with categories arranged in contiguous
/// ranges separated by gaps for future expansion:
///
/// | Range   | Category                  |
/// |---------|---------------------------|
/// | 0-15    | Literals                  |
/// | 16-31   | Single-character operators|
/// | 32-47   | Composite operators       |
/// | 48-63   | Delimiters                |
/// | 64-95   | Keywords                  |
/// | 254-255 | Special                   |
///
/// The family predicates (`is_operator`, `is_keyword`, ...) are range checks
/// on the discriminant, so new kinds must land inside their family's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals (0-15) ===
    /// Identifier: a name that is not a reserved word.
    Ident = 0,
    /// Integer literal: a run of decimal digits.
    Int = 1,

    // === Single-character operators (16-31) ===
    Assign = 16,   // =
    Plus = 17,     // +
    Minus = 18,    // -
    Bang = 19,     // !
    Asterisk = 20, // *
    Slash = 21,    // /
    Lt = 22,       // <
    Gt = 23,       // >

    // === Composite operators (32-47) ===
    Eq = 32,    // ==
    NotEq = 33, // !=
    LtEq = 34,  // <=
    GtEq = 35,  // >=

    // === Delimiters (48-63) ===
    Comma = 48,
    Semicolon = 49,
    LParen = 50,
    RParen = 51,
    LBrace = 52,
    RBrace = 53,

    // === Keywords (64-95) ===
    Function = 64, // fn
    Let = 65,
    True = 66,
    False = 67,
    If = 68,
    Else = 69,
    Return = 70,

    // === Special (254-255) ===
    /// A character no other kind matches. Carries the offending character.
    Illegal = 254,
    /// End of input. Always carries an empty spelling.
    Eof = 255,
}

impl TokenKind {
    /// Every reserved-word kind, in declaration order.
    pub const KEYWORDS: [TokenKind; 7] = [
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// The fixed source spelling of this kind.
    ///
    /// Returns `None` for kinds whose spelling varies (`Ident`, `Int`,
    /// `Illegal`) and for `Eof`, which has no spelling.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::Eq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::LtEq => Some("<="),
            TokenKind::GtEq => Some(">="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal | TokenKind::Eof => None,
        }
    }

    /// Human-readable name for diagnostics ("expected identifier, found `;`").
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Bang => "`!`",
            TokenKind::Asterisk => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Eq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Function => "`fn`",
            TokenKind::Let => "`let`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of file",
        }
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        (self as u8) < 16
    }

    /// True for both single-character and composite operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 16..=47)
    }

    #[inline]
    pub const fn is_composite_operator(self) -> bool {
        matches!(self as u8, 32..=47)
    }

    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self as u8, 48..=63)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 64..=95)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
