//! Shared type-text rendering, used by every section of the emitter.
//!
//! Generalizes the teacher's `field_type`-style "map one type node to
//! target-language text" helpers (`scalars.rs::to_rust`/`to_go`) from
//! Rust/Go token text to the Reason-like target's.

use std::collections::HashMap;

use crate::model::{FullState, PropType, PropValue, Scalar};
use crate::naming;

/// Maps an object's `at_path` to the record name the finalizer assigned
/// it, so a field whose `PropType::Object` holds a nested shape can
/// reference that shape's record by name instead of inlining it.
///
/// Keyed by the path joined with `"."`; see `finalizer` for why paths are
/// expected to be unique in practice.
pub struct NameLookup {
    by_path: HashMap<String, String>,
}

impl NameLookup {
    pub fn build(full: &FullState) -> Self {
        let mut by_path = HashMap::new();
        for obj in &full.objects {
            if let Some(name) = &obj.record_name {
                by_path.insert(obj.at_path.join("."), name.clone());
            }
        }
        NameLookup { by_path }
    }

    pub fn record_for(&self, path: &[String]) -> Option<&str> {
        self.by_path.get(&path.join(".")).map(String::as_str)
    }
}

fn scalar_text(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::String => "string",
        Scalar::Float => "float",
        Scalar::Boolean => "bool",
        Scalar::Any => "Js.Json.t",
    }
}

/// Renders the target-language type text for one property value,
/// wrapping in `option(...)` when nullable.
pub fn render_prop_value(value: &PropValue, names: &NameLookup) -> String {
    let inner = render_prop_type(&value.prop_type, names);
    if value.nullable {
        format!("option({})", inner)
    } else {
        inner
    }
}

fn render_prop_type(prop_type: &PropType, names: &NameLookup) -> String {
    match prop_type {
        PropType::Scalar(scalar) => scalar_text(*scalar).to_string(),
        PropType::Enum(enm) => naming::value_ident(&enm.name),
        PropType::Union(union) => union.name.clone(),
        PropType::Object(shape) => names
            .record_for(&shape.at_path)
            .map(str::to_string)
            .unwrap_or_else(|| "Js.Json.t".to_string()),
        PropType::Array(inner) => format!("array({})", render_prop_value(inner, names)),
        PropType::TypeReference(name) => name.clone(),
        PropType::FragmentRefValue(name) => format!("FragmentRef.t({})", naming::value_ident(name)),
    }
}

/// Like `render_prop_value`, but forces the outer nullability to
/// non-optional regardless of the underlying shape (used by
/// `refetchVariables`, spec §4.5 step 5: "a refetchVariables definition
/// derived from the same shape but with all fields forced non-optional").
pub fn render_prop_value_required(value: &PropValue, names: &NameLookup) -> String {
    render_prop_type(&value.prop_type, names)
}
