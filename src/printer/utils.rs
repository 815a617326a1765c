//! The `Utils` module (spec §4.5 step 8): the connection helper and
//! input-object constructor functions.

use crate::config::PrintConfig;
use crate::model::{FullState, ObjectShape, PropValues};
use crate::naming;

/// The reserved path segments that anchor a root's nested objects
/// (`property_mapper::make_obj_shape` seeds every nested path by
/// prepending onto one of these). A host-supplied `atObjectPath` names
/// the selection from the top field down and has no notion of which
/// root it bottoms out in, so the anchor has to be stripped before
/// comparing the two path conventions.
const ROOT_ANCHORS: &[&str] = &["variables", "response", "fragment", "root"];

fn without_root_anchor(path: &[String]) -> &[String] {
    match path.last() {
        Some(last) if ROOT_ANCHORS.contains(&last.as_str()) => &path[..path.len() - 1],
        _ => path,
    }
}

/// Resolves `config.connection.atObjectPath` (root-first, per spec §3)
/// to the finalized object's shape, falling back to the fragment
/// definition when the path is exactly `["fragment"]` and no finalized
/// object matches (spec §4.5 step 8, §8 boundary case).
fn find_connection_target<'a>(full: &'a FullState, at_object_path: &[String]) -> Option<&'a ObjectShape> {
    let leaf_first: Vec<String> = at_object_path.iter().rev().cloned().collect();
    if let Some(obj) = full
        .objects
        .iter()
        .find(|obj| without_root_anchor(&obj.at_path) == leaf_first.as_slice())
    {
        return Some(&obj.definition);
    }
    if at_object_path == ["fragment"] {
        return full.fragment.as_ref().map(|fragment| &fragment.definition);
    }
    None
}

fn print_connection_helper(field_name: &str) -> String {
    let field_ident = naming::field_name(field_name);
    format!(
        "let getConnectionNodes = value => Internal.getConnectionNodes(value##{});\n",
        field_ident
    )
}

/// A `make_<typename>` constructor, skipped for input objects with no
/// nullable properties (spec §4.5 step 8, §9 open question 3).
fn print_constructor(original_name: &str, shape: &ObjectShape) -> Option<String> {
    let props: Vec<(&str, bool)> = shape
        .values
        .iter()
        .filter_map(|value| match value {
            PropValues::Prop(key, prop_value) => Some((key.as_str(), prop_value.nullable)),
            PropValues::FragmentRef(_) => None,
        })
        .collect();

    if !props.iter().any(|(_, nullable)| *nullable) {
        return None;
    }

    let type_ident = naming::value_ident(original_name);
    let mut params = Vec::new();
    let mut fields = Vec::new();
    for (key, nullable) in &props {
        let field_ident = naming::field_name(key);
        if *nullable {
            params.push(format!("~{}=?", field_ident));
        } else {
            params.push(format!("~{}", field_ident));
        }
        fields.push(field_ident);
    }
    params.push("()".to_string());

    Some(format!(
        "let make_{}: ({}) => {} = ({}) => {{{}}};\n",
        type_ident,
        params.join(", "),
        type_ident,
        params.join(", "),
        fields.join(", ")
    ))
}

/// Prints the `Utils` module, or `None` when there is nothing to emit
/// (no connection helper resolves and no input object needs a
/// constructor).
pub fn print_utils_module(full: &FullState, config: &PrintConfig) -> Option<String> {
    let mut blocks = Vec::new();

    if let Some(connection) = &config.connection {
        if find_connection_target(full, &connection.at_object_path).is_some() {
            blocks.push(print_connection_helper(&connection.field_name));
        }
    }

    for obj in &full.objects {
        if let Some(original_name) = &obj.original_flow_type_name {
            if let Some(constructor) = print_constructor(original_name, &obj.definition) {
                blocks.push(constructor);
            }
        }
    }

    if blocks.is_empty() {
        return None;
    }

    let mut out = String::from("module Utils = {\n");
    for block in &blocks {
        for line in block.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("};\n");
    Some(out)
}
