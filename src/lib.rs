//! Parser and canonical printer for Solidity ABI declarations.
//!
//! ```text
//! text → parser → abi::{Signature, Parameter} → generator → canonical text
//! ```
//!
//! The accepted grammar is a relaxed dialect of Solidity's: argument names,
//! the `function` keyword and the `returns` keyword may all be left out.
//!
//! ```
//! use abi_sigparse::{parse_signature, SignatureKind};
//!
//! let sig = parse_signature("function transfer(address to, uint256 amount) external returns (bool)")?;
//! assert_eq!(sig.kind, SignatureKind::Function);
//! assert_eq!(sig.render(), "function transfer(address to, uint256 amount) external returns (bool)");
//!
//! let short = parse_signature("transfer(address,uint256)(bool)")?;
//! assert_eq!(short.render(), "transfer(address, uint256) returns (bool)");
//! # Ok::<(), abi_sigparse::ParseError>(())
//! ```

pub mod abi;
pub mod error;
pub mod generator;
pub mod parser;


pub use abi::{ArraySize, DataLocation, InputKind, Parameter, Signature, SignatureKind};
pub use error::{Found, ParseError, Result};
pub use parser::{
    classify_input, classify_input_with, parse_parameter, parse_parameter_with, parse_signature,
    parse_signature_as, parse_signature_with, parse_struct, parse_struct_with, validate,
    ParserConfig,
};
