//! Root definitions (spec §4.5 step 5): `variables`, `refetchVariables`,
//! `response` (spelled per operation kind), and `fragment`.

use crate::config::OperationType;
use crate::model::FullState;
use crate::printer::operation_kind::response_type_name;
use crate::printer::record::{print_record, print_record_all_required};
use crate::printer::render::NameLookup;

pub fn print_roots(full: &FullState, operation_type: &OperationType, names: &NameLookup) -> String {
    let mut out = String::new();

    if let Some(variables) = &full.variables {
        out.push_str(&print_record("variables", variables, names));
        out.push('\n');

        // Exactly one `refetchVariables`, derived from `variables` with
        // every field forced non-optional, for Query operations only
        // (spec §8 testable property).
        if operation_type.is_query() {
            out.push_str(&print_record_all_required("refetchVariables", variables, names));
            out.push('\n');
        }
    }

    if let Some(response) = &full.response {
        out.push_str(&print_record(response_type_name(operation_type), response, names));
        out.push('\n');
    }

    if let Some(fragment) = &full.fragment {
        if fragment.plural {
            out.push_str(&print_record("fragmentItem", &fragment.definition, names));
            out.push_str("type fragment = array(fragmentItem);\n");
        } else {
            out.push_str(&print_record("fragment", &fragment.definition, names));
        }
        out.push('\n');
    }

    out
}
