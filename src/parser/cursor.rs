//! Byte cursor and character classes shared by the grammar rules.

use std::num::ParseIntError;

use crate::error::{Found, ParseError};

pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `$` and `_` may appear anywhere in an identifier.
pub fn is_identifier_symbol(b: u8) -> bool {
    b == b'$' || b == b'_'
}

pub fn is_identifier_start(b: u8) -> bool {
    is_alpha(b) || is_identifier_symbol(b)
}

pub fn is_identifier_part(b: u8) -> bool {
    is_identifier_start(b) || is_digit(b)
}

pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Scan position over an immutable input.
///
/// The position only moves forward; rules that need to backtrack save
/// [`Cursor::pos`] and restore it with [`Cursor::reset`].
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    pub fn peek_byte(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    pub fn peek_literal(&self, lit: &str) -> bool {
        self.input[self.pos..].starts_with(lit.as_bytes())
    }

    /// Like [`Cursor::peek_literal`], but the literal must not run on into
    /// an identifier: `returns` matches in `returns (` but not in `returnsX`.
    pub fn peek_keyword(&self, kw: &str) -> bool {
        self.peek_literal(kw)
            && !self
                .input
                .get(self.pos + kw.len())
                .is_some_and(|&b| is_identifier_part(b))
    }

    pub fn consume_byte(&mut self, b: u8) -> bool {
        if self.peek_byte(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn consume_literal(&mut self, lit: &str) -> bool {
        if self.peek_literal(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    pub fn consume_keyword(&mut self, kw: &str) -> bool {
        if self.peek_keyword(kw) {
            self.pos += kw.len();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs and newlines. Returns whether anything was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.pos != start
    }

    /// Consumes `(letter|_|$) (letter|digit|_|$)*`, or nothing.
    pub fn scan_identifier(&mut self) -> &'a str {
        let start = self.pos;
        if self.peek().is_some_and(is_identifier_start) {
            self.pos += 1;
            while self.peek().is_some_and(is_identifier_part) {
                self.pos += 1;
            }
        }
        self.slice(start)
    }

    /// Consumes a run of decimal digits. `Ok(None)` when there were none.
    pub fn scan_decimal(&mut self) -> Result<Option<usize>, ParseError> {
        let start = self.pos;
        while self.peek().is_some_and(is_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        self.slice(start)
            .parse()
            .map(Some)
            .map_err(|source: ParseIntError| ParseError::NumberFormat {
                offset: start,
                source,
            })
    }

    /// True when nothing but whitespace and `;` is left.
    pub fn only_trailing_whitespace_or_semicolons(&self) -> bool {
        self.input[self.pos..]
            .iter()
            .all(|&b| is_whitespace(b) || b == b';')
    }

    pub fn found(&self) -> Found {
        Found::at(self.input, self.pos)
    }

    pub fn expected(&self, expected: &'static str) -> ParseError {
        ParseError::Syntax {
            found: self.found(),
            expected,
            offset: self.pos,
        }
    }

    fn slice(&self, start: usize) -> &'a str {
        // Only ASCII bytes are ever consumed by the scanning helpers, so the
        // range always lies on character boundaries.
        std::str::from_utf8(&self.input[start..self.pos]).unwrap_or_default()
    }
}
