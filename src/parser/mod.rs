//! Recursive-descent parser for ABI declarations.
//!
//! The grammar is a relaxed form of Solidity's: argument names, the
//! `function` keyword and the `returns` keyword are optional, so both
//! `function foo(uint256 a) external returns (bool)` and `foo(uint256)(bool)`
//! are accepted.
//!
//! - [`cursor`]: byte cursor and character classes
//! - [`types`]: parameters, tuples, array suffixes and struct definitions
//! - [`signature`]: declarations and their kind-specific validation

pub mod cursor;
mod signature;
mod types;

use tracing::{debug, trace};

use crate::abi::{InputKind, Parameter, Signature, SignatureKind};
use crate::error::{ParseError, Result};
use cursor::Cursor;

pub use signature::validate;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested tuple levels, counting the parameter list
    /// of a signature as one level.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, config: &ParserConfig) -> Self {
        let mut cursor = Cursor::new(input);
        cursor.skip_whitespace();
        Parser {
            cursor,
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Accepts `value` if only whitespace and semicolons remain.
    fn finish<T>(mut self, value: T) -> Result<T> {
        if self.cursor.only_trailing_whitespace_or_semicolons() {
            return Ok(value);
        }
        while self.cursor.skip_whitespace() || self.cursor.consume_byte(b';') {}
        Err(ParseError::TrailingInput {
            found: self.cursor.found(),
            offset: self.cursor.pos(),
        })
    }
}

/// Parses a declaration of any kind, e.g. `function foo(uint256) returns (bool)`
/// or `bar(uint256,bytes32)`.
pub fn parse_signature(input: &str) -> Result<Signature> {
    parse_signature_with(input, SignatureKind::Unknown, &ParserConfig::default())
}

/// Parses a declaration that must be of `kind`. Text without a keyword takes
/// on `kind`; text with a different keyword fails with
/// [`ParseError::KindMismatch`].
pub fn parse_signature_as(kind: SignatureKind, input: &str) -> Result<Signature> {
    parse_signature_with(input, kind, &ParserConfig::default())
}

pub fn parse_signature_with(
    input: &str,
    kind: SignatureKind,
    config: &ParserConfig,
) -> Result<Signature> {
    let mut parser = Parser::new(input, config);
    let sig = parser.parse_signature(kind)?;
    let sig = parser.finish(sig)?;
    debug!(kind = %sig.kind, name = %sig.name, inputs = sig.inputs.len(), "parsed signature");
    Ok(sig)
}

/// Parses a standalone type, e.g. `(uint256 price, uint256 timestamp)[] result`.
pub fn parse_parameter(input: &str) -> Result<Parameter> {
    parse_parameter_with(input, &ParserConfig::default())
}

pub fn parse_parameter_with(input: &str, config: &ParserConfig) -> Result<Parameter> {
    let mut parser = Parser::new(input, config);
    let param = parser.parse_parameter()?;
    let param = parser.finish(param)?;
    debug!(type_name = %param.type_name, fields = param.tuple_fields.len(), "parsed parameter");
    Ok(param)
}

/// Parses `struct Name { type field; ... }` into a named tuple parameter.
pub fn parse_struct(input: &str) -> Result<Parameter> {
    parse_struct_with(input, &ParserConfig::default())
}

pub fn parse_struct_with(input: &str, config: &ParserConfig) -> Result<Parameter> {
    let mut parser = Parser::new(input, config);
    let def = parser.parse_struct()?;
    let def = parser.finish(def)?;
    debug!(name = %def.name, fields = def.tuple_fields.len(), "parsed struct");
    Ok(def)
}

/// Reports which grammar `input` matches.
///
/// The parameter grammar is tried first, then signatures, then struct
/// definitions, so a bare `foo` is a [`InputKind::Type`] rather than a
/// function.
pub fn classify_input(input: &str) -> InputKind {
    classify_input_with(input, &ParserConfig::default())
}

pub fn classify_input_with(input: &str, config: &ParserConfig) -> InputKind {
    match parse_parameter_with(input, config) {
        Ok(param) if param.is_array() => return InputKind::Array,
        Ok(param) if param.is_tuple() => return InputKind::Tuple,
        Ok(_) => return InputKind::Type,
        Err(err) => trace!(%err, "input is not a parameter"),
    }
    match parse_signature_with(input, SignatureKind::Unknown, config) {
        Ok(sig) => return sig.kind.into(),
        Err(err) => trace!(%err, "input is not a signature"),
    }
    match parse_struct_with(input, config) {
        Ok(_) => InputKind::Struct,
        Err(err) => {
            trace!(%err, "input is not a struct definition");
            InputKind::Invalid
        }
    }
}
