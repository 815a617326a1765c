//! Enum emission (spec §4.5 step 2): one variant type plus runtime
//! conversion helpers per `FullEnum`.

use crate::model::FullEnum;
use crate::naming;

/// Prints one enum declaration and its `toJs`/`fromJs` conversion
/// helpers. An enum with a single literal value still emits (spec §8
/// boundary behavior).
pub fn print_enum(enm: &FullEnum) -> String {
    let type_ident = naming::value_ident(&enm.name);
    let variants: Vec<String> = enm.values.iter().map(|v| naming::type_name(v)).collect();

    let mut out = String::new();
    out.push_str(&format!("type {} =\n", type_ident));
    for variant in &variants {
        out.push_str(&format!("  | {}\n", variant));
    }
    out.push_str(";\n\n");

    out.push_str(&format!("let {}ToJs = (value: {}): string =>\n", type_ident, type_ident));
    out.push_str("  switch (value) {\n");
    for (variant, raw) in variants.iter().zip(enm.values.iter()) {
        out.push_str(&format!("  | {} => \"{}\"\n", variant, raw));
    }
    out.push_str("  };\n\n");

    out.push_str(&format!("let {}FromJs = (value: string): {} =>\n", type_ident, type_ident));
    out.push_str("  switch (value) {\n");
    for (variant, raw) in variants.iter().zip(enm.values.iter()) {
        out.push_str(&format!("  | \"{}\" => {}\n", raw, variant));
    }
    out.push_str(&format!(
        "  | other => raise(Invalid_argument(\"unknown value for {}: \" ++ other))\n",
        type_ident
    ));
    out.push_str("  };\n");

    out
}
