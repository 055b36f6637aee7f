use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::abi::SignatureKind;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// What the parser found where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Byte(u8),
    EndOfInput,
}

impl Found {
    pub(crate) fn at(input: &[u8], offset: usize) -> Self {
        input
            .get(offset)
            .map_or(Found::EndOfInput, |&b| Found::Byte(b))
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Byte(b) => write!(f, "'{}'", b.escape_ascii()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected {found} at offset {offset}, {expected} expected")]
    Syntax {
        found: Found,
        expected: &'static str,
        offset: usize,
    },

    #[error("invalid array size at offset {offset}: {source}")]
    NumberFormat {
        offset: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("{0}")]
    Semantic(String),

    #[error("expected {expected} signature, found {found}")]
    KindMismatch {
        expected: SignatureKind,
        found: SignatureKind,
    },

    #[error("unexpected {found} at offset {offset} after the end of the declaration")]
    TrailingInput { found: Found, offset: usize },

    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl ParseError {
    pub(crate) fn semantic(msg: impl Into<String>) -> Self {
        ParseError::Semantic(msg.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, ParseError::Semantic(_))
    }
}
