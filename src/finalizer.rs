//! The finalizer (spec §4.4): turns an `IntermediateState` into a
//! `FullState` by discovering every nested enum/union/object reachable
//! from the three roots, assigning stable names to anonymous objects and
//! unions, and deduplicating enums by name.
//!
//! No single teacher file does exactly this — the teacher's `TokenStream`
//! output always already carries an explicit Rust type name, so it never
//! needs an anonymous-record-naming pass. This is generalized from the
//! general shape of "accumulate into a mutable context, then render"
//! visible in the teacher's `query::QueryContext`.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::{FinalizedObj, FullState, IntermediateState, ObjectShape, PropType, PropValue, PropValues, Union};
use crate::naming::find_appropriate_obj_name;

pub fn finalize(intermediate: IntermediateState) -> Result<FullState> {
    log::debug!("flow_reason_codegen: finalizing intermediate state");

    let mut used_names: HashSet<String> = HashSet::new();

    let mut objects: Vec<FinalizedObj> = intermediate
        .objects
        .iter()
        .map(|obj| {
            if let Some(name) = &obj.original_flow_type_name {
                used_names.insert(name.clone());
            }
            FinalizedObj {
                original_flow_type_name: obj.original_flow_type_name.clone(),
                record_name: obj.original_flow_type_name.clone(),
                at_path: vec!["root".to_string()],
                definition: obj.definition.clone(),
                found_in_union: obj.found_in_union,
            }
        })
        .collect();

    let mut full = FullState {
        enums: intermediate.enums,
        unions: Vec::new(),
        objects: Vec::new(),
        variables: intermediate.variables.clone(),
        response: intermediate.response.clone(),
        fragment: intermediate.fragment.clone(),
    };

    if let Some(shape) = &intermediate.variables {
        register_shape(shape, &mut full);
    }
    if let Some(shape) = &intermediate.response {
        register_shape(shape, &mut full);
    }
    if let Some(root) = &intermediate.fragment {
        register_shape(&root.definition, &mut full);
    }

    objects.append(&mut full.objects);
    full.objects = objects;

    for obj in full.objects.iter_mut() {
        if obj.record_name.is_none() {
            let name = find_appropriate_obj_name(None, &mut used_names, &obj.at_path)?;
            obj.record_name = Some(name);
        }
    }

    for union in full.unions.iter_mut() {
        if union.name.is_empty() {
            union.name = find_appropriate_obj_name(None, &mut used_names, &union.at_path)?;
        }
    }

    dedup_enums(&mut full.enums);

    Ok(full)
}

/// Walks every property of `shape`, registering nested enums/unions/
/// objects into `full` (step 2 of §4.4). `shape` itself is one of the
/// three roots and is never registered as an object in its own right.
fn register_shape(shape: &ObjectShape, full: &mut FullState) {
    for value in &shape.values {
        if let PropValues::Prop(_, prop_value) = value {
            register_prop_value(prop_value, full, false);
        }
    }
}

fn register_prop_value(value: &PropValue, full: &mut FullState, found_in_union: bool) {
    match &value.prop_type {
        PropType::Enum(enm) => full.enums.push(enm.clone()),
        PropType::Union(union) => register_union(union, full),
        PropType::Object(shape) => register_object(shape, full, found_in_union),
        PropType::Array(inner) => register_prop_value(inner, full, found_in_union),
        PropType::Scalar(_) | PropType::TypeReference(_) | PropType::FragmentRefValue(_) => {}
    }
}

fn register_object(shape: &ObjectShape, full: &mut FullState, found_in_union: bool) {
    full.objects.push(FinalizedObj {
        original_flow_type_name: None,
        record_name: None,
        at_path: shape.at_path.clone(),
        definition: shape.clone(),
        found_in_union,
    });
    for value in &shape.values {
        if let PropValues::Prop(_, prop_value) = value {
            register_prop_value(prop_value, full, found_in_union);
        }
    }
}

fn register_union(union: &Union, full: &mut FullState) {
    full.unions.push(union.clone());
    for member in &union.members {
        register_object(&member.shape, full, true);
    }
}

fn dedup_enums(enums: &mut Vec<crate::model::FullEnum>) {
    let mut seen = HashSet::new();
    enums.retain(|enm| seen.insert(enm.name.clone()));
}
