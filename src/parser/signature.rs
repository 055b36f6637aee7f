use super::Parser;
use crate::abi::{DataLocation, Parameter, Signature, SignatureKind};
use crate::error::{ParseError, Result};

impl Parser<'_> {
    /// signature := [kind] [name] [inputs] modifier* [['returns'] outputs]
    pub(crate) fn parse_signature(&mut self, expected: SignatureKind) -> Result<Signature> {
        let start = self.cursor.pos();
        let parsed = self.parse_signature_kind();
        let kind = match (parsed, expected) {
            (SignatureKind::Unknown, kind) | (kind, SignatureKind::Unknown) => kind,
            (found, expected) if found != expected => {
                return Err(ParseError::KindMismatch { expected, found })
            }
            (kind, _) => kind,
        };

        self.cursor.skip_whitespace();
        let name = self.cursor.scan_identifier().to_owned();
        self.cursor.skip_whitespace();

        let has_inputs = self.cursor.peek_byte(b'(');
        if parsed == SignatureKind::Unknown && name.is_empty() && !has_inputs {
            self.cursor.reset(start);
            return Err(self.cursor.expected("signature"));
        }
        let inputs = if has_inputs {
            self.parse_parameter_list()?
        } else {
            Vec::new()
        };

        self.cursor.skip_whitespace();
        let modifiers = self.parse_modifiers();
        self.cursor.skip_whitespace();
        let outputs = self.parse_outputs()?;

        let sig = Signature {
            kind,
            name,
            inputs,
            outputs,
            modifiers,
        };
        validate(&sig)?;
        Ok(sig)
    }

    fn parse_signature_kind(&mut self) -> SignatureKind {
        SignatureKind::KEYWORDS
            .into_iter()
            .find(|kind| self.cursor.consume_keyword(kind.keyword()))
            .unwrap_or_default()
    }

    /// Input and output lists share the tuple syntax but cannot be arrays.
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>> {
        let offset = self.cursor.pos();
        let list = self.parse_composite_type()?;
        if list.is_array() {
            return Err(ParseError::semantic(format!(
                "parameter list at offset {} cannot be an array",
                offset
            )));
        }
        Ok(list.tuple_fields)
    }

    fn parse_modifiers(&mut self) -> Vec<String> {
        let mut modifiers = Vec::new();
        while self.cursor.has_more()
            && !self.cursor.peek_byte(b'(')
            && !self.cursor.peek_keyword("returns")
        {
            let modifier = self.cursor.scan_identifier();
            if modifier.is_empty() {
                break;
            }
            modifiers.push(modifier.to_owned());
            if !self.cursor.skip_whitespace() {
                break;
            }
        }
        modifiers
    }

    fn parse_outputs(&mut self) -> Result<Vec<Parameter>> {
        if self.cursor.consume_keyword("returns") {
            self.cursor.skip_whitespace();
            if !self.cursor.peek_byte(b'(') {
                return Err(self.cursor.expected("'(' after 'returns'"));
            }
        }
        if self.cursor.peek_byte(b'(') {
            self.parse_parameter_list()
        } else {
            Ok(Vec::new())
        }
    }
}

/// Checks the kind-specific rules a parsed signature must satisfy.
///
/// The first violation found is returned as [`ParseError::Semantic`].
pub fn validate(sig: &Signature) -> Result<()> {
    let kind = sig.kind;
    if !kind.is_named() && !sig.name.is_empty() {
        return Err(ParseError::semantic(format!(
            "{} cannot have a name, found `{}`",
            kind, sig.name
        )));
    }

    match kind {
        SignatureKind::Constructor => {
            reject_modifiers(sig)?;
            reject_outputs(sig)?;
        }
        SignatureKind::Fallback => validate_fallback(sig)?,
        SignatureKind::Receive => {
            if !sig.inputs.is_empty() {
                return Err(ParseError::semantic("receive cannot have inputs"));
            }
            reject_outputs(sig)?;
        }
        SignatureKind::Event => {
            if sig.inputs.is_empty() {
                return Err(ParseError::semantic("event must have inputs"));
            }
            match sig.modifiers.as_slice() {
                [] => {}
                [modifier] if modifier == "anonymous" => {}
                _ => {
                    return Err(ParseError::semantic(
                        "event modifiers are limited to `anonymous`",
                    ))
                }
            }
            reject_outputs(sig)?;
            reject_data_locations(sig)?;
        }
        SignatureKind::Error => {
            reject_modifiers(sig)?;
            reject_outputs(sig)?;
            reject_data_locations(sig)?;
        }
        SignatureKind::Function | SignatureKind::Unknown => {}
    }

    if kind != SignatureKind::Event && sig.inputs.iter().any(|p| p.indexed) {
        return Err(ParseError::semantic(format!(
            "indexed inputs are only allowed on events, not on {}",
            kind
        )));
    }
    if sig.outputs.iter().any(|p| p.indexed) {
        return Err(ParseError::semantic("outputs cannot be indexed"));
    }
    if sig
        .inputs
        .iter()
        .chain(&sig.outputs)
        .any(|p| p.tuple_fields.iter().any(has_indexed))
    {
        return Err(ParseError::semantic("tuple components cannot be indexed"));
    }
    Ok(())
}

/// `fallback()` or `fallback(bytes) returns (bytes)`.
fn validate_fallback(sig: &Signature) -> Result<()> {
    for (what, list) in [("input", &sig.inputs), ("output", &sig.outputs)] {
        match list.as_slice() {
            [] => {}
            [param] if param.is_plain_bytes() => {}
            [param] => {
                return Err(ParseError::semantic(format!(
                    "fallback {} must be `bytes`, found `{}`",
                    what, param
                )))
            }
            _ => {
                return Err(ParseError::semantic(format!(
                    "fallback takes at most one {}",
                    what
                )))
            }
        }
    }
    if sig.inputs.len() != sig.outputs.len() {
        return Err(ParseError::semantic(
            "fallback must take `bytes` and return `bytes` together",
        ));
    }
    Ok(())
}

fn reject_modifiers(sig: &Signature) -> Result<()> {
    if sig.modifiers.is_empty() {
        Ok(())
    } else {
        Err(ParseError::semantic(format!(
            "{} cannot have modifiers",
            sig.kind
        )))
    }
}

fn reject_outputs(sig: &Signature) -> Result<()> {
    if sig.outputs.is_empty() {
        Ok(())
    } else {
        Err(ParseError::semantic(format!(
            "{} cannot have outputs",
            sig.kind
        )))
    }
}

fn reject_data_locations(sig: &Signature) -> Result<()> {
    match sig.inputs.iter().find(|p| has_data_location(p)) {
        Some(param) => Err(ParseError::semantic(format!(
            "{} input `{}` cannot have a data location",
            sig.kind, param
        ))),
        None => Ok(()),
    }
}

fn has_indexed(param: &Parameter) -> bool {
    param.indexed || param.tuple_fields.iter().any(has_indexed)
}

fn has_data_location(param: &Parameter) -> bool {
    param.data_location != DataLocation::Unspecified
        || param.tuple_fields.iter().any(has_data_location)
}
