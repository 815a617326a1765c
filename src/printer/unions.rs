//! The `Unions` module (spec §4.5 step 3): one polymorphic-variant alias
//! per union, covering every member plus an `Unselected` catch-all, with
//! flat per-member record aliases named `<UnionName>_<MemberName>` (spec
//! §9 open question: the exact spellings are left to the printer).

use crate::model::{FullState, Union};
use crate::naming;
use crate::printer::record::print_record;
use crate::printer::render::NameLookup;

fn member_record_name(union_ident: &str, member_name: &str) -> String {
    format!("{}_{}", union_ident, naming::value_ident(member_name))
}

fn print_union(union: &Union, names: &NameLookup) -> String {
    let union_ident = naming::value_ident(&union.name);
    let mut out = String::new();

    for member in &union.members {
        let record_name = member_record_name(&union_ident, &member.name);
        out.push_str(&print_record(&record_name, &member.shape, names));
    }

    out.push_str(&format!("type {} = [\n", union_ident));
    for member in &union.members {
        let record_name = member_record_name(&union_ident, &member.name);
        out.push_str(&format!("  | `{}({})\n", member.name, record_name));
    }
    out.push_str("  | `Unselected(string)\n");
    out.push_str("];\n");

    out
}

/// Prints the `Unions` module, or `None` when there are no unions (spec
/// §8 boundary: no union => no module, no error).
pub fn print_unions_module(full: &FullState, names: &NameLookup) -> Option<String> {
    if full.unions.is_empty() {
        return None;
    }

    let mut out = String::from("module Unions = {\n");
    for union in &full.unions {
        for line in print_union(union, names).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("};\nopen Unions;\n");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectShape, PropType, PropValue, PropValues, Scalar, UnionMember};

    #[test]
    fn no_unions_prints_nothing() {
        assert!(print_unions_module(&FullState::default(), &NameLookup::build(&FullState::default())).is_none());
    }

    #[test]
    fn prints_members_and_catch_all() {
        let mut full = FullState::default();
        full.unions.push(Union {
            name: "ResponseNode".to_string(),
            at_path: vec!["node".to_string(), "response".to_string()],
            members: vec![
                UnionMember {
                    name: "A".to_string(),
                    shape: ObjectShape::new(
                        vec!["a".to_string(), "node".to_string()],
                        vec![PropValues::Prop(
                            "a".to_string(),
                            PropValue { nullable: false, prop_type: PropType::Scalar(Scalar::String) },
                        )],
                    ),
                },
                UnionMember {
                    name: "B".to_string(),
                    shape: ObjectShape::new(
                        vec!["b".to_string(), "node".to_string()],
                        vec![PropValues::Prop(
                            "b".to_string(),
                            PropValue { nullable: false, prop_type: PropType::Scalar(Scalar::Float) },
                        )],
                    ),
                },
            ],
        });
        let names = NameLookup::build(&full);
        let printed = print_unions_module(&full, &names).unwrap();
        assert!(printed.contains("type responseNode_a = {\n    a: string,\n  };"));
        assert!(printed.contains("| `A(responseNode_a)"));
        assert!(printed.contains("| `B(responseNode_b)"));
        assert!(printed.contains("| `Unselected(string)"));
        assert!(printed.trim_end().ends_with("open Unions;"));
    }
}
