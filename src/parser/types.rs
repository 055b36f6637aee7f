use super::cursor::is_identifier_start;
use super::Parser;
use crate::abi::{ArraySize, DataLocation, Parameter};
use crate::error::{ParseError, Result};

impl Parser<'_> {
    /// parameter := (composite | elementary) [flag] [name]
    pub(crate) fn parse_parameter(&mut self) -> Result<Parameter> {
        let mut param = if self.cursor.peek_byte(b'(') || self.cursor.peek_literal("tuple(") {
            self.parse_composite_type()?
        } else if self.cursor.peek().is_some_and(is_identifier_start) {
            self.parse_elementary_type()?
        } else {
            return Err(self.cursor.expected("type"));
        };

        // Flags and names are only recognised after whitespace: `int[1]a` is
        // left for the caller to reject.
        if self.cursor.skip_whitespace() {
            if self.parse_parameter_flag(&mut param) {
                if self.cursor.skip_whitespace() {
                    param.name = self.cursor.scan_identifier().to_owned();
                }
            } else {
                param.name = self.cursor.scan_identifier().to_owned();
            }
        }
        Ok(param)
    }

    /// Consumes at most one of `indexed`, `storage`, `memory`, `calldata`.
    fn parse_parameter_flag(&mut self, param: &mut Parameter) -> bool {
        if self.cursor.consume_keyword("indexed") {
            param.indexed = true;
            return true;
        }
        for location in [
            DataLocation::Storage,
            DataLocation::Memory,
            DataLocation::CallData,
        ] {
            if location
                .keyword()
                .is_some_and(|kw| self.cursor.consume_keyword(kw))
            {
                param.data_location = location;
                return true;
            }
        }
        false
    }

    /// composite := ('(' | 'tuple(') [parameter (',' parameter)*] ')' array*
    pub(crate) fn parse_composite_type(&mut self) -> Result<Parameter> {
        let start = self.cursor.pos();
        if !(self.cursor.consume_literal("tuple(") || self.cursor.consume_byte(b'(')) {
            return Err(self.cursor.expected("'('"));
        }
        self.enter(start)?;
        let fields = self.parse_tuple_fields();
        self.leave();

        let mut param = Parameter::tuple(fields?);
        param.array_dims = self.parse_array_suffix()?;
        Ok(param)
    }

    fn parse_tuple_fields(&mut self) -> Result<Vec<Parameter>> {
        let mut fields = Vec::new();
        self.cursor.skip_whitespace();
        if self.cursor.consume_byte(b')') {
            return Ok(fields);
        }
        loop {
            self.cursor.skip_whitespace();
            fields.push(self.parse_parameter()?);
            self.cursor.skip_whitespace();
            if self.cursor.consume_byte(b',') {
                continue;
            }
            if self.cursor.consume_byte(b')') {
                return Ok(fields);
            }
            return Err(self.cursor.expected("',' or ')'"));
        }
    }

    /// elementary := identifier array*
    ///
    /// Any identifier is accepted as a type name; checking it against the
    /// Solidity type list is left to the consumer.
    fn parse_elementary_type(&mut self) -> Result<Parameter> {
        let type_name = self.cursor.scan_identifier();
        if type_name.is_empty() {
            return Err(self.cursor.expected("type"));
        }
        let dims = self.parse_array_suffix()?;
        Ok(Parameter::elementary(type_name).with_dims(dims))
    }

    /// array := '[' [digits] ']'
    fn parse_array_suffix(&mut self) -> Result<Vec<ArraySize>> {
        let mut dims = Vec::new();
        while self.cursor.consume_byte(b'[') {
            let offset = self.cursor.pos();
            let size = self.cursor.scan_decimal()?;
            if !self.cursor.consume_byte(b']') {
                return Err(self.cursor.expected("']'"));
            }
            dims.push(match size {
                None => ArraySize::Dynamic,
                Some(0) => {
                    return Err(ParseError::semantic(format!(
                        "array size at offset {} must be greater than zero",
                        offset
                    )))
                }
                Some(n) => ArraySize::Fixed(n),
            });
        }
        Ok(dims)
    }

    /// struct := 'struct' name '{' (elementary name ';')* '}'
    pub(crate) fn parse_struct(&mut self) -> Result<Parameter> {
        if !self.cursor.consume_keyword("struct") {
            return Err(self.cursor.expected("'struct'"));
        }
        self.cursor.skip_whitespace();
        let name = self.cursor.scan_identifier();
        if name.is_empty() {
            return Err(self.cursor.expected("struct name"));
        }
        self.cursor.skip_whitespace();
        if !self.cursor.consume_byte(b'{') {
            return Err(self.cursor.expected("'{'"));
        }

        let mut fields = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.consume_byte(b'}') {
                break;
            }
            let mut field = self.parse_elementary_type()?;
            self.cursor.skip_whitespace();
            field.name = self.cursor.scan_identifier().to_owned();
            if field.name.is_empty() {
                return Err(self.cursor.expected("field name"));
            }
            self.cursor.skip_whitespace();
            if !self.cursor.consume_byte(b';') {
                return Err(self.cursor.expected("';'"));
            }
            fields.push(field);
        }
        Ok(Parameter::tuple(fields).named(name))
    }
}
