//! Shared record-printing used by `Types`, the operation roots, and the
//! per-union-member records nested in `Unions`.

use crate::model::{ObjectShape, PropValues};
use crate::naming;
use crate::printer::render::{render_prop_value, render_prop_value_required, NameLookup};

/// Prints `type <name> = { field: ty, ... };`. `FragmentRef` entries
/// become a field named after the fragment, typed as an opaque ref
/// (consumers pass these through to fragment-reading helpers; they carry
/// no data of their own here).
pub fn print_record(name: &str, shape: &ObjectShape, names: &NameLookup) -> String {
    print_record_with(name, shape, names, false)
}

/// Like `print_record`, but renders every field as non-optional
/// regardless of declared nullability (used for `refetchVariables`,
/// spec §4.5 step 5).
pub fn print_record_all_required(name: &str, shape: &ObjectShape, names: &NameLookup) -> String {
    print_record_with(name, shape, names, true)
}

fn print_record_with(name: &str, shape: &ObjectShape, names: &NameLookup, force_required: bool) -> String {
    let mut out = format!("type {} = {{\n", name);
    for value in &shape.values {
        match value {
            PropValues::Prop(key, prop_value) => {
                let field_name = naming::field_name(key);
                let ty = if force_required {
                    render_prop_value_required(prop_value, names)
                } else {
                    render_prop_value(prop_value, names)
                };
                out.push_str(&format!("  {}: {},\n", field_name, ty));
            }
            PropValues::FragmentRef(fragment_name) => {
                let field_name = naming::field_name(fragment_name);
                out.push_str(&format!("  {}: {}_fragmentRef,\n", field_name, naming::value_ident(fragment_name)));
            }
        }
    }
    out.push_str("};\n");
    out
}
