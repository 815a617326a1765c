//! The intermediate and full data model (spec §3). Entities here live
//! only for one invocation: constructed by the extractor and property
//! mapper, consumed and discarded by the finalizer and emitter.

/// Primitive scalar kinds the target language distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Float,
    Boolean,
    Any,
}

/// A property type, before nullability is applied (see `PropValue`).
#[derive(Debug, Clone, PartialEq)]
pub enum PropType {
    Scalar(Scalar),
    Enum(FullEnum),
    Union(Union),
    Object(ObjectShape),
    Array(Box<PropValue>),
    /// An opaque nominal type name carried through to output unchanged.
    TypeReference(String),
    /// Reserved: a field typed directly as a fragment-ref opaque token,
    /// as opposed to the flattened `$fragmentRefs` handling in
    /// `PropValues::FragmentRef`. Never constructed by this crate's
    /// lowering rules today; kept so the variant set matches spec §3.
    FragmentRefValue(String),
}

/// A property's type together with its nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct PropValue {
    pub nullable: bool,
    pub prop_type: PropType,
}

/// One entry of an object's property list, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValues {
    Prop(String, PropValue),
    FragmentRef(String),
}

/// An anonymous (or not-yet-named) record shape.
///
/// `at_path` is leaf-first (the convention used throughout this crate;
/// see `naming` for how it is reversed into a name).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    pub at_path: Vec<String>,
    pub values: Vec<PropValues>,
}

impl ObjectShape {
    pub fn new(at_path: Vec<String>, values: Vec<PropValues>) -> Self {
        ObjectShape { at_path, values }
    }
}

/// A string-literal-union enum. Two enums with the same `name` collapse
/// at finalization time (first occurrence wins).
#[derive(Debug, Clone, PartialEq)]
pub struct FullEnum {
    pub name: String,
    pub values: Vec<String>,
}

/// One member of an inline polymorphic union, discriminated by
/// `__typename`. `name` is the typename literal, capitalized.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionMember {
    pub name: String,
    pub shape: ObjectShape,
}

/// An inline union encountered while mapping a property. `members` never
/// contains a `%other` entry (dropped at construction, spec §4.2).
///
/// `name` is additive relative to spec §3: the finalizer assigns it from
/// the same path-derived naming pool used for records, because the
/// emitter's `Unions` module (§4.5 step 3) needs a stable identifier for
/// the polymorphic-variant type and its nested per-member module.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub members: Vec<UnionMember>,
    pub at_path: Vec<String>,
    pub name: String,
}

/// An object as produced directly by the extractor, before finalization
/// assigns it a record name.
#[derive(Debug, Clone, PartialEq)]
pub struct Obj {
    pub original_flow_type_name: Option<String>,
    pub found_in_union: bool,
    pub definition: ObjectShape,
}

/// An object ready for emission: its record name has been chosen (or it
/// has been folded into a union and will never get a top-level
/// declaration).
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedObj {
    pub original_flow_type_name: Option<String>,
    pub record_name: Option<String>,
    pub at_path: Vec<String>,
    pub definition: ObjectShape,
    pub found_in_union: bool,
}

/// The fragment root, common to both intermediate and full state.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentRoot {
    pub name: String,
    pub plural: bool,
    pub definition: ObjectShape,
}

/// Output of the extractor (§4.1): the raw classification of top-level
/// aliases, before names are assigned to anonymous objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntermediateState {
    pub enums: Vec<FullEnum>,
    pub objects: Vec<Obj>,
    pub variables: Option<ObjectShape>,
    pub response: Option<ObjectShape>,
    pub fragment: Option<FragmentRoot>,
}

/// Output of the finalizer (§4.4): ready for the emitter to walk in
/// section order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FullState {
    pub enums: Vec<FullEnum>,
    pub unions: Vec<Union>,
    pub objects: Vec<FinalizedObj>,
    pub variables: Option<ObjectShape>,
    pub response: Option<ObjectShape>,
    pub fragment: Option<FragmentRoot>,
}
