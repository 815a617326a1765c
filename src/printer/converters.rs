//! The converter-asset builder (spec §4.6): for each root, a nested
//! per-field instruction describing what runtime conversion a field
//! needs, flattened into a JSON-path-keyed table the runtime library
//! consumes.

use crate::config::OperationType;
use crate::model::{FullState, ObjectShape, PropType, PropValue, PropValues};
use crate::naming;
use crate::printer::render::NameLookup;

/// One field's conversion requirement. Mirrors the six shapes named in
/// spec §4.6 exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Skip,
    Nullable(Box<Instruction>),
    Enum(String),
    Union(String),
    Array(Box<Instruction>),
    Object(String),
}

/// Which way values flow through the converter: raw JSON into target
/// shapes (`response`/`fragment`), or target shapes back into raw JSON
/// (`variables`, and the mutation's extra `wrapResponse` pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Unwrap,
    Wrap,
}

impl Direction {
    /// The raw sentinel used for an absent nullable value: `undefined` by
    /// default, `null` for `wrapResponse` (spec §4.6).
    fn nullable_sentinel(self, is_wrap_response: bool) -> &'static str {
        if is_wrap_response {
            "null"
        } else {
            match self {
                Direction::Unwrap => "undefined",
                Direction::Wrap => "undefined",
            }
        }
    }
}

fn instruction_for(value: &PropValue, names: &NameLookup) -> Instruction {
    let inner = match &value.prop_type {
        PropType::Scalar(_) | PropType::TypeReference(_) | PropType::FragmentRefValue(_) => Instruction::Skip,
        PropType::Enum(enm) => Instruction::Enum(naming::value_ident(&enm.name)),
        PropType::Union(union) => Instruction::Union(naming::value_ident(&union.name)),
        PropType::Object(shape) => {
            Instruction::Object(names.record_for(&shape.at_path).unwrap_or_default().to_string())
        }
        PropType::Array(inner) => Instruction::Array(Box::new(instruction_for(inner, names))),
    };
    if value.nullable && matches!(inner, Instruction::Skip) {
        Instruction::Nullable(Box::new(Instruction::Skip))
    } else {
        inner
    }
}

fn render_instruction(instruction: &Instruction) -> String {
    match instruction {
        Instruction::Skip => "Internal.Skip".to_string(),
        Instruction::Nullable(inner) => format!("Internal.Nullable({})", render_instruction(inner)),
        Instruction::Enum(name) => format!("Internal.Enum(\"{}\")", name),
        Instruction::Union(name) => format!("Internal.Union(\"{}\")", name),
        Instruction::Array(inner) => format!("Internal.Array({})", render_instruction(inner)),
        Instruction::Object(name) => format!("Internal.Object(\"{}\")", name),
    }
}

/// Flattens `shape` into `(path, instruction)` pairs, recursing through
/// nested objects/union members/arrays so a host can resolve every
/// convertible field without re-walking the record tree itself. `Skip`
/// entries are omitted — only fields that need conversion are listed.
fn collect_instructions(shape: &ObjectShape, path_prefix: &str, names: &NameLookup, out: &mut Vec<(String, Instruction)>) {
    for value in &shape.values {
        let (key, prop_value) = match value {
            PropValues::Prop(key, prop_value) => (key, prop_value),
            PropValues::FragmentRef(_) => continue,
        };
        let path = if path_prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path_prefix, key)
        };

        let instruction = instruction_for(prop_value, names);
        if instruction != Instruction::Skip {
            out.push((path.clone(), instruction));
        }

        recurse_into_nested(&prop_value.prop_type, &path, names, out);
    }
}

fn recurse_into_nested(prop_type: &PropType, path: &str, names: &NameLookup, out: &mut Vec<(String, Instruction)>) {
    match prop_type {
        PropType::Object(shape) => collect_instructions(shape, path, names, out),
        PropType::Union(union) => {
            for member in &union.members {
                let member_path = format!("{}.{}", path, naming::value_ident(&member.name));
                collect_instructions(&member.shape, &member_path, names, out);
            }
        }
        PropType::Array(inner) => {
            let element_path = format!("{}.[]", path);
            recurse_into_nested(&inner.prop_type, &element_path, names, out);
        }
        _ => {}
    }
}

fn print_table(table_name: &str, shape: &ObjectShape, names: &NameLookup) -> String {
    let mut entries = Vec::new();
    collect_instructions(shape, "", names, &mut entries);

    let mut out = format!("let {}: array((string, Internal.instruction)) = [|\n", table_name);
    for (path, instruction) in &entries {
        out.push_str(&format!("  (\"{}\", {}),\n", path, render_instruction(instruction)));
    }
    out.push_str("|];\n");
    out
}

/// Prints one converter block: the instruction table plus the function
/// the rest of the module calls. `fn_name` and `table_name` are the
/// spellings callers look for (`response`/`wrapResponse` matter for the
/// mutation testable property in spec §8).
fn print_converter(fn_name: &str, table_name: &str, shape: &ObjectShape, direction: Direction, type_name: &str, names: &NameLookup, is_wrap_response: bool) -> String {
    let sentinel = direction.nullable_sentinel(is_wrap_response);
    let mut out = format!("/* {} direction, nullable sentinel: {} */\n", fn_name, sentinel);
    out.push_str(&print_table(table_name, shape, names));
    match direction {
        Direction::Unwrap => {
            out.push_str(&format!(
                "let {}: Js.Json.t => {} = raw => Internal.convert({}, raw);\n",
                fn_name, type_name, table_name
            ));
        }
        Direction::Wrap => {
            out.push_str(&format!(
                "let {}: {} => Js.Json.t = value => Internal.revert({}, value, ~nullableSentinel=\"{}\");\n",
                fn_name, type_name, table_name, sentinel
            ));
        }
    }
    out
}

/// Prints the `Internal` module body (spec §4.5 step 6, §4.6).
pub fn print_internal_module(full: &FullState, operation_type: &OperationType, names: &NameLookup) -> String {
    let mut blocks = Vec::new();

    if let Some(variables) = &full.variables {
        blocks.push(print_converter(
            "variablesConverter",
            "variablesInstructions",
            variables,
            Direction::Wrap,
            "variables",
            names,
            false,
        ));
    }

    if let Some(response) = &full.response {
        let response_type = crate::printer::operation_kind::response_type_name(operation_type);
        blocks.push(print_converter(
            "responseConverter",
            "responseInstructions",
            response,
            Direction::Unwrap,
            response_type,
            names,
            false,
        ));

        // Mutations also need to wrap a (client-held) response back into
        // raw JSON, with `null` as the nullable sentinel (spec §4.6, §8
        // testable property).
        if operation_type.is_mutation() {
            blocks.push(print_converter(
                "wrapResponseConverter",
                "wrapResponseInstructions",
                response,
                Direction::Wrap,
                response_type,
                names,
                true,
            ));
        }
    }

    if let Some(fragment) = &full.fragment {
        blocks.push(print_converter(
            "fragmentConverter",
            "fragmentInstructions",
            &fragment.definition,
            Direction::Unwrap,
            "fragment",
            names,
            false,
        ));
    }

    let mut out = String::from("module Internal = {\n");
    for block in &blocks {
        for line in block.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}
