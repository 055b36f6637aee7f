//! Canonical text rendering of parsed declarations.
//!
//! Output always re-parses to an equal value: whitespace is normalised,
//! the `returns` keyword is always written and parameter lists are joined
//! with `", "`.

use std::fmt;

use crate::abi::{ArraySize, Parameter, Signature, SignatureKind};

pub fn generate_signature(sig: &Signature) -> String {
    let mut output = String::new();

    match sig.kind {
        SignatureKind::Unknown => output.push_str(&sig.name),
        SignatureKind::Function | SignatureKind::Event | SignatureKind::Error => {
            output.push_str(sig.kind.keyword());
            output.push(' ');
            output.push_str(&sig.name);
        }
        SignatureKind::Constructor | SignatureKind::Fallback | SignatureKind::Receive => {
            output.push_str(sig.kind.keyword());
        }
    }

    output.push('(');
    output.push_str(&generate_list(&sig.inputs));
    output.push(')');

    if !sig.modifiers.is_empty() {
        output.push(' ');
        output.push_str(&sig.modifiers.join(" "));
    }

    if !sig.outputs.is_empty() {
        output.push_str(" returns (");
        output.push_str(&generate_list(&sig.outputs));
        output.push(')');
    }

    output
}

pub fn generate_parameter(param: &Parameter) -> String {
    let mut output = if param.is_tuple() {
        format!("({})", generate_list(&param.tuple_fields))
    } else {
        param.type_name.clone()
    };

    for dim in &param.array_dims {
        match dim {
            ArraySize::Dynamic => output.push_str("[]"),
            ArraySize::Fixed(n) => output.push_str(&format!("[{}]", n)),
        }
    }

    if param.indexed {
        output.push_str(" indexed");
    }
    if let Some(location) = param.data_location.keyword() {
        output.push(' ');
        output.push_str(location);
    }
    if !param.name.is_empty() {
        output.push(' ');
        output.push_str(&param.name);
    }

    output
}

fn generate_list(params: &[Parameter]) -> String {
    params
        .iter()
        .map(generate_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Signature {
    /// Canonical text form, e.g. `function foo(uint256 a) view returns (bool)`.
    pub fn render(&self) -> String {
        generate_signature(self)
    }
}

impl Parameter {
    /// Canonical text form, e.g. `(uint256, bool)[] calldata pairs`.
    pub fn render(&self) -> String {
        generate_parameter(self)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generate_signature(self))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generate_parameter(self))
    }
}
