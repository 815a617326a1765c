//! The recursive AST-to-intermediate lowering rules (spec §4.2, §4.3).
//!
//! `map_obj_prop`, `make_obj_shape`, `make_union` and `make_union_member`
//! form a mutual recursion over the input AST's shape, generalized from
//! the teacher's recursive `graphql_parser::query::Value` -> `TokenStream`
//! mapping (`variables.rs::graphql_parser_value_to_literal`).

use std::collections::HashMap;

use crate::ast::{FlowProperty, FlowType};
use crate::error::{Error, Result};
use crate::model::{FullEnum, ObjectShape, PropType, PropValue, PropValues, Scalar, Union, UnionMember};
use crate::naming;

/// Enums discovered so far, keyed by name, consulted when a bare
/// `Generic(Unqualified(name))` is encountered (spec §4.2's mapping
/// table: "if `name` matches a known enum in `state`, `Enum(that)`").
pub type KnownEnums = HashMap<String, FullEnum>;

/// `mapObjProp(optional, state, path, astType) -> PropValue` (spec §4.2).
pub fn map_obj_prop(
    optional: bool,
    known_enums: &KnownEnums,
    path: &[String],
    ast_type: &FlowType,
) -> Result<PropValue> {
    if let Some(element) = ast_type.as_array_element() {
        let inner = map_obj_prop(false, known_enums, path, element)?;
        return Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Array(Box::new(inner)),
        });
    }
    if let Some(members) = ast_type.as_object_union() {
        let union = make_union(path, members, known_enums)?;
        return Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Union(union),
        });
    }

    match ast_type {
        FlowType::String | FlowType::StringLiteral(_) => Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Scalar(Scalar::String),
        }),
        FlowType::Number | FlowType::NumberLiteral(_) => Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Scalar(Scalar::Float),
        }),
        FlowType::Boolean | FlowType::BooleanLiteral(_) => Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Scalar(Scalar::Boolean),
        }),
        FlowType::Nullable(inner) => {
            let mut value = map_obj_prop(true, known_enums, path, inner)?;
            value.nullable = true;
            Ok(value)
        }
        FlowType::Object(properties) => {
            let shape = make_obj_shape(path, properties, known_enums)?;
            Ok(PropValue {
                nullable: optional,
                prop_type: PropType::Object(shape),
            })
        }
        FlowType::Generic { name, type_args } if type_args.is_empty() => {
            let prop_type = match known_enums.get(name) {
                Some(enm) => PropType::Enum(enm.clone()),
                None => PropType::TypeReference(naming::unmask(name)),
            };
            Ok(PropValue {
                nullable: optional,
                prop_type,
            })
        }
        _ => Ok(PropValue {
            nullable: optional,
            prop_type: PropType::Scalar(Scalar::Any),
        }),
    }
}

/// `makeObjShape` (spec §4.3): walks a property list once, in order.
pub fn make_obj_shape(
    path: &[String],
    properties: &[FlowProperty],
    known_enums: &KnownEnums,
) -> Result<ObjectShape> {
    let mut values = Vec::with_capacity(properties.len());

    for prop in properties {
        if prop.key == "$fragmentRefs" {
            for name in fragment_ref_names(&prop.value) {
                values.push(PropValues::FragmentRef(naming::strip_fragment_ref_suffix(&name)));
            }
            continue;
        }
        if prop.key.starts_with('$') {
            continue;
        }
        // Nested structural recursion (Object/Union/Array-of-either) needs
        // its own path, distinct from sibling properties, so the
        // finalizer can derive a unique record name per nested shape.
        // Leaf-first convention: prepend this property's key.
        let mut child_path = vec![prop.key.clone()];
        child_path.extend_from_slice(path);
        let value = map_obj_prop(prop.optional, known_enums, &child_path, &prop.value)?;
        values.push(PropValues::Prop(prop.key.clone(), value));
    }

    Ok(ObjectShape::new(path.to_vec(), values))
}

/// Extracts the generic names referenced by a `$fragmentRefs` property
/// initializer, which is either a single `Generic` or an `Intersection`
/// of them (spec §4.3).
fn fragment_ref_names(value: &FlowType) -> Vec<String> {
    match value {
        FlowType::Generic { name, .. } => vec![name.clone()],
        FlowType::Intersection(members) => members
            .iter()
            .filter_map(|m| match m {
                FlowType::Generic { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Builds a `Union` from a list of object-literal members (spec §4.2
/// "Union construction"). `name` is assigned later, by the finalizer,
/// from the same path-derived naming pool used for records.
pub fn make_union(path: &[String], members: &[FlowType], known_enums: &KnownEnums) -> Result<Union> {
    let mut union_members = Vec::with_capacity(members.len());

    for member in members {
        let properties = match member {
            FlowType::Object(properties) => properties,
            _ => continue,
        };
        if let Some(built) = make_union_member(path, properties, known_enums)? {
            union_members.push(built);
        }
    }

    Ok(Union {
        members: union_members,
        at_path: path.to_vec(),
        name: String::new(),
    })
}

/// Builds one union member from its object-literal properties, returning
/// `None` when the member's typename is `%other` (dropped per spec §3).
fn make_union_member(
    path: &[String],
    properties: &[FlowProperty],
    known_enums: &KnownEnums,
) -> Result<Option<UnionMember>> {
    let typename_literal = properties
        .iter()
        .find_map(|p| match (&p.key[..], &p.value) {
            ("__typename", FlowType::StringLiteral(s)) => Some(s.as_str()),
            _ => None,
        })
        .ok_or_else(|| Error::MissingTypenameOnUnion {
            path: path.join("."),
        })?;

    if typename_literal == "%other" {
        return Ok(None);
    }
    let member_name = naming::type_name(typename_literal);

    let rest: Vec<FlowProperty> = properties
        .iter()
        .filter(|p| p.key != "__typename")
        .cloned()
        .collect();

    let mut member_path = vec![member_name.to_lowercase()];
    member_path.extend_from_slice(path);

    let shape = make_obj_shape(&member_path, &rest, known_enums)?;

    Ok(Some(UnionMember {
        name: member_name,
        shape,
    }))
}
