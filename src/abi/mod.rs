pub mod ast;

pub use ast::{ArraySize, DataLocation, InputKind, Parameter, Signature, SignatureKind};
