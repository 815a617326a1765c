//! The `Types` module (spec §4.5 step 4): one record per finalized object
//! marked for declaration.

use crate::model::FullState;
use crate::printer::record::print_record;
use crate::printer::render::NameLookup;

/// Selects the objects that get a top-level declaration: not folded into
/// a union, and with a record name assigned (spec §4.5 "Declaration
/// selection"). Objects with an original Flow type name are already
/// first in `full.objects` (the finalizer places them there); this
/// function then reverses insertion order so that dependents (named
/// later, i.e. discovered deeper in the walk) end up appearing after
/// their dependencies in the emitted source.
fn declarable(full: &FullState) -> Vec<(&str, &crate::model::ObjectShape)> {
    let mut selected: Vec<(&str, &crate::model::ObjectShape)> = full
        .objects
        .iter()
        .filter(|obj| !obj.found_in_union && obj.record_name.is_some())
        .map(|obj| (obj.record_name.as_deref().unwrap(), &obj.definition))
        .collect();
    selected.reverse();
    selected
}

/// Prints the `Types` module, or `None` when there is nothing to
/// declare.
pub fn print_types_module(full: &FullState, names: &NameLookup) -> Option<String> {
    let selected = declarable(full);
    if selected.is_empty() {
        return None;
    }

    let mut out = String::from("module Types = {\n");
    for (name, shape) in selected {
        let type_ident = crate::naming::value_ident(name);
        for line in print_record(&type_ident, shape, names).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("};\nopen Types;\n");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FinalizedObj, ObjectShape};

    #[test]
    fn empty_state_prints_nothing() {
        assert!(print_types_module(&FullState::default(), &NameLookup::build(&FullState::default())).is_none());
    }

    #[test]
    fn emits_reversed_insertion_order() {
        let mut full = FullState::default();
        full.objects.push(FinalizedObj {
            original_flow_type_name: None,
            record_name: Some("First".to_string()),
            at_path: vec!["a".to_string()],
            definition: ObjectShape::new(vec!["a".to_string()], vec![]),
            found_in_union: false,
        });
        full.objects.push(FinalizedObj {
            original_flow_type_name: None,
            record_name: Some("Second".to_string()),
            at_path: vec!["b".to_string()],
            definition: ObjectShape::new(vec!["b".to_string()], vec![]),
            found_in_union: false,
        });
        let names = NameLookup::build(&full);
        let printed = print_types_module(&full, &names).unwrap();
        let first_pos = printed.find("type first").unwrap();
        let second_pos = printed.find("type second").unwrap();
        assert!(second_pos < first_pos, "second should be emitted before first (reversed order)");
    }

    #[test]
    fn found_in_union_objects_are_excluded() {
        let mut full = FullState::default();
        full.objects.push(FinalizedObj {
            original_flow_type_name: None,
            record_name: Some("Hidden".to_string()),
            at_path: vec!["a".to_string()],
            definition: ObjectShape::new(vec!["a".to_string()], vec![]),
            found_in_union: true,
        });
        let names = NameLookup::build(&full);
        assert!(print_types_module(&full, &names).is_none());
    }
}
