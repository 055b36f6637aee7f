use std::fmt;
use std::str::FromStr;

/// The declaration category of a [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureKind {
    /// No keyword was given, e.g. `foo(uint256)`. Validated like a function.
    #[default]
    Unknown,
    Function,
    Constructor,
    Fallback,
    Receive,
    Event,
    Error,
}

impl SignatureKind {
    /// Keywords in the order the parser tries them.
    pub const KEYWORDS: [SignatureKind; 6] = [
        SignatureKind::Function,
        SignatureKind::Constructor,
        SignatureKind::Fallback,
        SignatureKind::Receive,
        SignatureKind::Event,
        SignatureKind::Error,
    ];

    /// Source keyword, empty for [`SignatureKind::Unknown`].
    pub fn keyword(self) -> &'static str {
        match self {
            SignatureKind::Unknown => "",
            SignatureKind::Function => "function",
            SignatureKind::Constructor => "constructor",
            SignatureKind::Fallback => "fallback",
            SignatureKind::Receive => "receive",
            SignatureKind::Event => "event",
            SignatureKind::Error => "error",
        }
    }

    /// Whether declarations of this kind carry a name.
    pub fn is_named(self) -> bool {
        !matches!(
            self,
            SignatureKind::Constructor | SignatureKind::Fallback | SignatureKind::Receive
        )
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureKind::Unknown => f.write_str("unknown"),
            kind => f.write_str(kind.keyword()),
        }
    }
}

impl FromStr for SignatureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(SignatureKind::Unknown),
            other => SignatureKind::KEYWORDS
                .into_iter()
                .find(|kind| kind.keyword() == other)
                .ok_or_else(|| format!("unknown signature kind `{}`", other)),
        }
    }
}

/// Solidity data location annotation on a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataLocation {
    #[default]
    Unspecified,
    Storage,
    CallData,
    Memory,
}

impl DataLocation {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            DataLocation::Unspecified => None,
            DataLocation::Storage => Some("storage"),
            DataLocation::CallData => Some("calldata"),
            DataLocation::Memory => Some("memory"),
        }
    }
}

/// One `[...]` suffix of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArraySize {
    /// `[]`
    Dynamic,
    /// `[n]`, always at least 1.
    Fixed(usize),
}

/// A single argument, return value, tuple component or standalone type.
///
/// A parameter is either elementary (`type_name` set, `tuple_fields` empty)
/// or a tuple (`type_name` empty). The empty tuple `()` has both empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    pub tuple_fields: Vec<Parameter>,
    /// Outermost dimension first, one entry per `[...]` in source order.
    pub array_dims: Vec<ArraySize>,
    pub indexed: bool,
    pub data_location: DataLocation,
}

impl Parameter {
    /// An unnamed elementary parameter.
    pub fn elementary(type_name: impl Into<String>) -> Self {
        Parameter {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// An unnamed tuple parameter.
    pub fn tuple(fields: Vec<Parameter>) -> Self {
        Parameter {
            tuple_fields: fields,
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dims(mut self, dims: Vec<ArraySize>) -> Self {
        self.array_dims = dims;
        self
    }

    pub fn with_location(mut self, location: DataLocation) -> Self {
        self.data_location = location;
        self
    }

    pub fn is_tuple(&self) -> bool {
        self.type_name.is_empty()
    }

    pub fn is_array(&self) -> bool {
        !self.array_dims.is_empty()
    }

    /// True for the plain, non-array `bytes` type accepted by fallbacks.
    pub fn is_plain_bytes(&self) -> bool {
        self.type_name == "bytes" && self.array_dims.is_empty()
    }
}

/// A parsed function, constructor, fallback, receive, event or error declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    pub kind: SignatureKind,
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    pub modifiers: Vec<String>,
}

/// What grammar a piece of text matches, as reported by
/// [`classify_input`](crate::parser::classify_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Invalid,
    Type,
    Array,
    Tuple,
    Struct,
    Function,
    Constructor,
    Fallback,
    Receive,
    Event,
    Error,
}

impl From<SignatureKind> for InputKind {
    fn from(kind: SignatureKind) -> Self {
        match kind {
            SignatureKind::Unknown | SignatureKind::Function => InputKind::Function,
            SignatureKind::Constructor => InputKind::Constructor,
            SignatureKind::Fallback => InputKind::Fallback,
            SignatureKind::Receive => InputKind::Receive,
            SignatureKind::Event => InputKind::Event,
            SignatureKind::Error => InputKind::Error,
        }
    }
}

impl InputKind {
    pub fn is_signature(self) -> bool {
        matches!(
            self,
            InputKind::Function
                | InputKind::Constructor
                | InputKind::Fallback
                | InputKind::Receive
                | InputKind::Event
                | InputKind::Error
        )
    }

    pub const ALL: [InputKind; 11] = [
        InputKind::Invalid,
        InputKind::Type,
        InputKind::Array,
        InputKind::Tuple,
        InputKind::Struct,
        InputKind::Function,
        InputKind::Constructor,
        InputKind::Fallback,
        InputKind::Receive,
        InputKind::Event,
        InputKind::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputKind::Invalid => "invalid",
            InputKind::Type => "type",
            InputKind::Array => "array",
            InputKind::Tuple => "tuple",
            InputKind::Struct => "struct",
            InputKind::Function => "function",
            InputKind::Constructor => "constructor",
            InputKind::Fallback => "fallback",
            InputKind::Receive => "receive",
            InputKind::Event => "event",
            InputKind::Error => "error",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown input kind `{}`", s))
    }
}
