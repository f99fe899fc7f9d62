//! Monkey IR - token model shared by the lexer and its consumers.
//!
//! This crate contains the vocabulary a parser switches on:
//! - [`TokenKind`]: the closed set of token categories
//! - [`Token`]: a kind paired with the exact source spelling
//! - [`Span`]: byte ranges for diagnostics
//!
//! Everything here is plain data: `Copy`, `Eq`, `Hash`, no side effects,
//! and no constructor can fail.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind};
