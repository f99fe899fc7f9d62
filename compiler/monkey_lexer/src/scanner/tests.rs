use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

/// Helper: scan and return kinds only.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan(source).iter().map(Token::kind).collect()
}

/// Helper: scan and return `(kind, text)` pairs.
fn scan_pairs(source: &str) -> Vec<(TokenKind, &str)> {
    scan(source).iter().map(|t| (t.kind(), t.text())).collect()
}

// ─── End of input ──────────────────────────────────────────────

#[test]
fn empty_source_yields_eof() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.next_token(), Token::eof());
}

#[test]
fn whitespace_only_yields_eof() {
    let mut scanner = Scanner::new(" \t\r\n  ");
    assert_eq!(scanner.next_token(), Token::eof());
}

#[test]
fn eof_is_idempotent() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..4 {
        let tok = scanner.next_token();
        assert_eq!(tok.kind(), TokenKind::Eof);
        assert_eq!(tok.text(), "");
    }
}

#[test]
fn eof_span_is_point_at_source_len() {
    let mut scanner = Scanner::new("ab  ");
    let _ = scanner.next_spanned();
    let (tok, span) = scanner.next_spanned();
    assert!(tok.is_eof());
    assert_eq!(span, Span::point(4));
}

#[test]
fn is_finished_ignores_trailing_whitespace() {
    let mut scanner = Scanner::new("a \n");
    assert!(!scanner.is_finished());
    let _ = scanner.next_token();
    assert!(scanner.is_finished());
}

// ─── Identifiers & keywords ────────────────────────────────────

#[test]
fn keyword_vs_identifier() {
    assert_eq!(scan_pairs("let"), [(TokenKind::Let, "let")]);
    assert_eq!(scan_pairs("lett"), [(TokenKind::Ident, "lett")]);
}

#[test]
fn all_keywords() {
    assert_eq!(
        scan_kinds("fn let true false if else return"),
        [
            TokenKind::Function,
            TokenKind::Let,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
        ]
    );
}

#[test]
fn identifier_maximal_munch() {
    assert_eq!(scan_pairs("foobar123"), [(TokenKind::Ident, "foobar123")]);
}

#[test]
fn identifier_with_underscores() {
    assert_eq!(
        scan_pairs("_ _x snake_case __init__"),
        [
            (TokenKind::Ident, "_"),
            (TokenKind::Ident, "_x"),
            (TokenKind::Ident, "snake_case"),
            (TokenKind::Ident, "__init__"),
        ]
    );
}

#[test]
fn keyword_prefix_inside_identifier() {
    assert_eq!(
        scan_pairs("iffy returned fnx"),
        [
            (TokenKind::Ident, "iffy"),
            (TokenKind::Ident, "returned"),
            (TokenKind::Ident, "fnx"),
        ]
    );
}

#[test]
fn identifier_stops_at_operator() {
    assert_eq!(
        scan_pairs("x+y"),
        [
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
        ]
    );
}

// ─── Integers ──────────────────────────────────────────────────

#[test]
fn integer_literals() {
    assert_eq!(
        scan_pairs("0 5 10 1234567890"),
        [
            (TokenKind::Int, "0"),
            (TokenKind::Int, "5"),
            (TokenKind::Int, "10"),
            (TokenKind::Int, "1234567890"),
        ]
    );
}

#[test]
fn minus_is_separate_from_integer() {
    assert_eq!(
        scan_pairs("-5"),
        [(TokenKind::Minus, "-"), (TokenKind::Int, "5")]
    );
}

#[test]
fn digits_then_letters_split() {
    // A word cannot start with a digit, so the digit run ends first.
    assert_eq!(
        scan_pairs("123abc"),
        [(TokenKind::Int, "123"), (TokenKind::Ident, "abc")]
    );
}

#[test]
fn no_float_or_radix_support() {
    assert_eq!(
        scan_pairs("3.14 0x1F"),
        [
            (TokenKind::Int, "3"),
            (TokenKind::Illegal, "."),
            (TokenKind::Int, "14"),
            (TokenKind::Int, "0"),
            (TokenKind::Ident, "x1F"),
        ]
    );
}

// ─── Operators & delimiters ────────────────────────────────────

#[test]
fn single_char_operators() {
    assert_eq!(
        scan_kinds("= + - ! * / < >"),
        [
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
        ]
    );
}

#[test]
fn delimiters() {
    assert_eq!(
        scan_kinds(",;(){}"),
        [
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn fixed_spelling_tokens_carry_their_lexeme() {
    for tok in scan("= + - ! * / < > == != <= >= , ; ( ) { }") {
        assert_eq!(Some(tok.text()), tok.kind().lexeme(), "{tok:?}");
    }
}

#[test]
fn operators_without_spaces() {
    assert_eq!(
        scan_kinds("!-/*5;"),
        [
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Int,
            TokenKind::Semicolon,
        ]
    );
}

// ─── Composite operators ───────────────────────────────────────

#[test]
fn composite_operators() {
    assert_eq!(
        scan_pairs("== != <= >="),
        [
            (TokenKind::Eq, "=="),
            (TokenKind::NotEq, "!="),
            (TokenKind::LtEq, "<="),
            (TokenKind::GtEq, ">="),
        ]
    );
}

#[test]
fn separated_equals_stay_single() {
    assert_eq!(
        scan_kinds("= = ! = < ="),
        [
            TokenKind::Assign,
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::Assign,
            TokenKind::Lt,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn triple_equal_is_eq_then_assign() {
    assert_eq!(
        scan_pairs("==="),
        [(TokenKind::Eq, "=="), (TokenKind::Assign, "=")]
    );
}

#[test]
fn composite_at_end_of_input() {
    assert_eq!(scan_pairs("x!="), [(TokenKind::Ident, "x"), (TokenKind::NotEq, "!=")]);
    assert_eq!(scan_pairs("x!"), [(TokenKind::Ident, "x"), (TokenKind::Bang, "!")]);
}

#[test]
fn composite_in_expression() {
    assert_eq!(
        scan_pairs("10 == 10; 10 != 9;"),
        [
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
        ]
    );
}

// ─── Illegal characters ────────────────────────────────────────

#[test]
fn illegal_character_then_eof() {
    let mut scanner = Scanner::new("@");
    assert_eq!(scanner.next_token(), Token::new(TokenKind::Illegal, "@"));
    assert_eq!(scanner.next_token(), Token::eof());
}

#[test]
fn illegal_character_does_not_swallow_neighbours() {
    assert_eq!(
        scan_pairs("a@b#1"),
        [
            (TokenKind::Ident, "a"),
            (TokenKind::Illegal, "@"),
            (TokenKind::Ident, "b"),
            (TokenKind::Illegal, "#"),
            (TokenKind::Int, "1"),
        ]
    );
}

#[test]
fn consecutive_illegal_characters_are_separate_tokens() {
    assert_eq!(
        scan_pairs("$%"),
        [(TokenKind::Illegal, "$"), (TokenKind::Illegal, "%")]
    );
}

#[test]
fn interior_nul_is_illegal() {
    assert_eq!(
        scan_pairs("a\0b"),
        [
            (TokenKind::Ident, "a"),
            (TokenKind::Illegal, "\0"),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn non_ascii_character_is_one_illegal_token() {
    assert_eq!(
        scan_pairs("é🦀x"),
        [
            (TokenKind::Illegal, "é"),
            (TokenKind::Illegal, "🦀"),
            (TokenKind::Ident, "x"),
        ]
    );
}

#[test]
fn non_ascii_letters_are_not_identifier_continuations() {
    assert_eq!(
        scan_pairs("naïve"),
        [
            (TokenKind::Ident, "na"),
            (TokenKind::Illegal, "ï"),
            (TokenKind::Ident, "ve"),
        ]
    );
}

#[test]
fn other_whitespace_is_illegal() {
    // Only space, tab, newline and carriage return are skipped.
    assert_eq!(scan_pairs("\x0c"), [(TokenKind::Illegal, "\x0c")]);
}

// ─── Spans ─────────────────────────────────────────────────────

#[test]
fn spans_cover_token_text() {
    let source = "let  x\t== 10;";
    let mut scanner = Scanner::new(source);
    loop {
        let (tok, span) = scanner.next_spanned();
        if tok.is_eof() {
            break;
        }
        assert_eq!(&source[span.to_range()], tok.text());
    }
}

#[test]
fn spanned_positions() {
    let mut scanner = Scanner::new(" ab == 7");
    assert_eq!(scanner.next_spanned().1, Span::new(1, 3));
    assert_eq!(scanner.next_spanned().1, Span::new(4, 6));
    assert_eq!(scanner.next_spanned().1, Span::new(7, 8));
    assert_eq!(scanner.next_spanned().1, Span::point(8));
}

#[test]
fn run_paths_leave_cursor_after_run() {
    let mut scanner = Scanner::new("abc;123;");
    let _ = scanner.next_token();
    assert_eq!(scanner.pos(), 3);
    assert_eq!(scanner.next_token().kind(), TokenKind::Semicolon);
    assert_eq!(scanner.pos(), 4);
    let _ = scanner.next_token();
    assert_eq!(scanner.pos(), 7);
}

// ─── Iterator ──────────────────────────────────────────────────

#[test]
fn iterator_stops_before_eof_and_stays_stopped() {
    let mut scanner = Scanner::new("a b");
    assert_eq!(scanner.next(), Some(Token::new(TokenKind::Ident, "a")));
    assert_eq!(scanner.next(), Some(Token::new(TokenKind::Ident, "b")));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

#[test]
fn scanners_are_independent() {
    let source = "let x = 1;";
    let mut a = Scanner::new(source);
    let mut b = Scanner::new(source);
    let _ = a.next_token();
    let _ = a.next_token();
    assert_eq!(b.next_token().kind(), TokenKind::Let);
    assert_eq!(a.next_token().kind(), TokenKind::Assign);
}
