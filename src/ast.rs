//! The input type vocabulary documented in the spec for the upstream
//! GraphQL compiler's structurally-typed output.
//!
//! This crate does not parse source text into this tree; an external
//! front-end is assumed to produce it (see crate docs).

/// A single type node in the structurally-typed input language.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowType {
    String,
    StringLiteral(String),
    Number,
    NumberLiteral(f64),
    Boolean,
    BooleanLiteral(bool),
    Nullable(Box<FlowType>),
    Array(Box<FlowType>),
    Object(Vec<FlowProperty>),
    Union(Vec<FlowType>),
    Intersection(Vec<FlowType>),
    /// `Generic{id: Unqualified(name), targs}`. `$ReadOnlyArray<T>` arrives
    /// as `Generic { name: "$ReadOnlyArray", type_args: vec![T] }`.
    Generic {
        name: String,
        type_args: Vec<FlowType>,
    },
}

/// One property of an `Object` type node.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowProperty {
    pub key: String,
    pub value: FlowType,
    pub optional: bool,
}

/// A top-level `ExportNamedDeclaration(TypeAlias{id, right})`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub id: String,
    pub right: FlowType,
}

/// The parsed front-end output for one input file: a list of top-level
/// exported type aliases, plus any parser errors.
///
/// A non-empty `parse_errors` means the front-end failed; per §4.7 the
/// extractor treats this as a `ParseError` outcome rather than attempting
/// to classify a partial or malformed tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowModule {
    pub aliases: Vec<TypeAlias>,
    pub parse_errors: Vec<String>,
}

impl FlowType {
    pub(crate) fn is_object(&self) -> bool {
        matches!(self, FlowType::Object(_))
    }

    /// `Some(literals)` when this is a union of two or more string
    /// literals (the raw-string-enum input form), `None` otherwise.
    pub(crate) fn as_string_literal_union(&self) -> Option<Vec<&str>> {
        match self {
            FlowType::Union(members) if members.len() >= 2 => members
                .iter()
                .map(|m| match m {
                    FlowType::StringLiteral(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// `Some(member_objects)` when every member is an object literal, as
    /// required for inline-union lowering (§4.2).
    pub(crate) fn as_object_union(&self) -> Option<&[FlowType]> {
        match self {
            FlowType::Union(members) if members.len() >= 2 && members.iter().all(FlowType::is_object) => {
                Some(members)
            }
            _ => None,
        }
    }

    /// `$ReadOnlyArray<T>` and plain `Array(T)` both lower the same way;
    /// this extracts `T` from either spelling.
    pub(crate) fn as_array_element(&self) -> Option<&FlowType> {
        match self {
            FlowType::Array(inner) => Some(inner),
            FlowType::Generic { name, type_args } if name == "$ReadOnlyArray" => type_args.first(),
            _ => None,
        }
    }
}
