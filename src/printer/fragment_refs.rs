//! Fragment-ref assets (spec §4.5 step 7): emitted only when a fragment
//! root is present, so consumers have a name and an opaque tag to pass
//! the reference around with instead of the fragment's own record type.

use crate::model::FragmentRoot;
use crate::naming;

/// Prints the fragment-ref name and opaque tag, or `None` when this
/// operation has no fragment root.
pub fn print_fragment_ref_assets(fragment: Option<&FragmentRoot>) -> Option<String> {
    let fragment = fragment?;
    let ident = naming::value_ident(&fragment.name);
    let mut out = String::new();
    out.push_str(&format!("type {}_fragmentRef;\n", ident));
    out.push_str(&format!(
        "external {}_getFragmentRef: fragment => {}_fragmentRef = \"%identity\";\n",
        ident, ident
    ));
    Some(out)
}
