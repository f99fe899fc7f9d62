//! Byte cursor with one byte of lookahead.
//!
//! The cursor reads the source one byte at a time. End of input is an
//! explicit `None` rather than a sentinel byte, so a NUL inside the source is
//! an ordinary byte (the scanner reports it as illegal) and never ends the
//! scan early.
//!
//! # Invariant
//!
//! After construction `next_pos == pos + 1`. Construction performs the first
//! advance, so `current()` is valid before any token is requested. Once
//! `current()` is `None` it stays `None`: further advances are no-ops and
//! `pos()` stays at the source length.

/// Cursor over an in-memory source string.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    /// Index of the byte under the cursor.
    pos: usize,
    /// Index of the byte the next advance will read.
    next_pos: usize,
    /// Byte at `pos`, or `None` once past the end.
    current: Option<u8>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first byte of `source`.
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self {
            source,
            pos: 0,
            next_pos: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// The byte one position ahead of current, without moving.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.next_pos).copied()
    }

    /// Advance the cursor by one byte.
    ///
    /// A no-op once the cursor has passed the end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.next_pos > self.source.len() {
            return;
        }
        self.current = self.source.as_bytes().get(self.next_pos).copied();
        self.pos = self.next_pos;
        self.next_pos += 1;
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current.is_some_and(&pred) {
            self.advance();
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full character.
    ///
    /// ASCII moves one byte; a multi-byte UTF-8 character moves over all of
    /// its bytes, so the cursor never stops inside a character.
    #[inline]
    pub fn advance_char(&mut self) {
        let Some(byte) = self.current else {
            return;
        };
        for _ in 0..Self::utf8_char_width(byte) {
            self.advance();
        }
    }

    /// Extract the source text from `start` to the current position.
    ///
    /// `start` must be a position the cursor previously stood on. Those are
    /// always character boundaries, so the slice is always valid; an invalid
    /// range yields `""` instead of panicking.
    pub fn slice_from(&self, start: usize) -> &'src str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        self.source.get(start..self.pos).unwrap_or_default()
    }
}
