//! The extractor (spec §4.1, §4.7): classifies top-level type aliases into
//! `Variables`/`Response`/`Fragment` roots, enums, and objects.
//!
//! Grounded on the teacher's `lib.rs::generate_module_token_stream`
//! operation-selection logic and `operations.rs`'s classification of a
//! `graphql_parser::query::OperationDefinition` by operation kind.

use crate::ast::{FlowModule, FlowType, TypeAlias};
use crate::config::OperationType;
use crate::error::Result;
use crate::model::{FragmentRoot, FullEnum, IntermediateState, Obj};
use crate::property_mapper::{make_obj_shape, KnownEnums};

const FUTURE_ADDED_VALUE: &str = "%future added value";

/// Classifies every top-level alias in `module` according to
/// `operation_type`, producing an `IntermediateState`.
///
/// A non-empty `module.parse_errors` is a `ParseError` outcome (§4.7): the
/// extractor is not a validator, so it logs a diagnostic and returns an
/// empty intermediate state rather than trying to classify a partial
/// tree.
pub fn extract(module: &FlowModule, operation_type: &OperationType) -> Result<IntermediateState> {
    if !module.parse_errors.is_empty() {
        for message in &module.parse_errors {
            log::warn!("flow_reason_codegen: parse error, skipping extraction: {}", message);
        }
        return Ok(IntermediateState::default());
    }

    // Two passes: enums must be known before the second pass maps
    // properties, because a `Generic(name)` reference to an enum can
    // precede the enum's own declaration in input order.
    let known_enums = collect_enums(&module.aliases);

    // `known_enums` is an unordered lookup table for the property mapper;
    // `state.enums` preserves input order (deduped) for the emitter.
    let mut state = IntermediateState {
        enums: ordered_enums(&module.aliases),
        ..IntermediateState::default()
    };

    match operation_type {
        OperationType::Query(name) | OperationType::Mutation(name) | OperationType::Subscription(name) => {
            extract_operation(&module.aliases, name, &known_enums, &mut state)?;
        }
        OperationType::Fragment { name, plural } => {
            extract_fragment(&module.aliases, name, *plural, &known_enums, &mut state)?;
        }
    }

    Ok(state)
}

fn collect_enums(aliases: &[TypeAlias]) -> KnownEnums {
    let mut known = KnownEnums::new();
    for alias in aliases {
        if let Some(enm) = as_enum(alias) {
            known.entry(enm.name.clone()).or_insert(enm);
        }
    }
    known
}

fn ordered_enums(aliases: &[TypeAlias]) -> Vec<FullEnum> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for alias in aliases {
        if let Some(enm) = as_enum(alias) {
            if seen.insert(enm.name.clone()) {
                out.push(enm);
            }
        }
    }
    out
}

fn as_enum(alias: &TypeAlias) -> Option<FullEnum> {
    let literals = alias.right.as_string_literal_union()?;
    let values: Vec<String> = literals
        .into_iter()
        .filter(|l| *l != FUTURE_ADDED_VALUE)
        .map(str::to_owned)
        .collect();
    Some(FullEnum {
        name: alias.id.clone(),
        values,
    })
}

fn extract_operation(
    aliases: &[TypeAlias],
    operation_name: &str,
    known_enums: &KnownEnums,
    state: &mut IntermediateState,
) -> Result<()> {
    let variables_name = format!("{}Variables", operation_name);
    let response_name = format!("{}Response", operation_name);

    for alias in aliases {
        if alias.right.as_string_literal_union().is_some() {
            // Already folded into `state.enums` above.
            continue;
        }

        if alias.id == operation_name && alias.right.is_object() {
            // The aggregate operation descriptor, not interesting.
            continue;
        }

        if alias.id == variables_name {
            if let FlowType::Object(properties) = &alias.right {
                state.variables = Some(make_obj_shape(&["variables".to_string()], properties, known_enums)?);
            }
            continue;
        }

        if alias.id == response_name {
            if let FlowType::Object(properties) = &alias.right {
                state.response = Some(make_obj_shape(&["response".to_string()], properties, known_enums)?);
            }
            continue;
        }

        if let FlowType::Object(properties) = &alias.right {
            let definition = make_obj_shape(&["objects".to_string()], properties, known_enums)?;
            state.objects.push(Obj {
                original_flow_type_name: Some(alias.id.clone()),
                found_in_union: false,
                definition,
            });
        }
    }

    Ok(())
}

fn extract_fragment(
    aliases: &[TypeAlias],
    fragment_name: &str,
    plural: bool,
    known_enums: &KnownEnums,
    state: &mut IntermediateState,
) -> Result<()> {
    for alias in aliases {
        if alias.right.as_string_literal_union().is_some() {
            continue;
        }

        if alias.id == fragment_name {
            let properties = match &alias.right {
                FlowType::Object(properties) => Some(properties.as_slice()),
                other => other.as_array_element().and_then(|elem| match elem {
                    FlowType::Object(properties) => Some(properties.as_slice()),
                    _ => None,
                }),
            };
            if let Some(properties) = properties {
                let definition = make_obj_shape(&["fragment".to_string()], properties, known_enums)?;
                state.fragment = Some(FragmentRoot {
                    name: fragment_name.to_string(),
                    plural,
                    definition,
                });
            }
            continue;
        }

        if !alias.id.contains('$') {
            if let FlowType::Object(properties) = &alias.right {
                let definition = make_obj_shape(&["objects".to_string()], properties, known_enums)?;
                state.objects.push(Obj {
                    original_flow_type_name: Some(alias.id.clone()),
                    found_in_union: false,
                    definition,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FlowProperty;
    use crate::model::{PropType, PropValue, PropValues, Scalar};

    fn prop(key: &str, value: FlowType, optional: bool) -> FlowProperty {
        FlowProperty {
            key: key.to_string(),
            value,
            optional,
        }
    }

    #[test]
    fn minimal_fragment_drops_refType_field() {
        let module = FlowModule {
            aliases: vec![TypeAlias {
                id: "Foo".to_string(),
                right: FlowType::Object(vec![
                    prop("$refType", FlowType::Generic { name: "Foo$ref".to_string(), type_args: vec![] }, false),
                    prop("id", FlowType::String, false),
                    prop("completed", FlowType::Nullable(Box::new(FlowType::Boolean)), true),
                ]),
            }],
            parse_errors: vec![],
        };
        let op = OperationType::Fragment {
            name: "Foo".to_string(),
            plural: false,
        };
        let state = extract(&module, &op).unwrap();
        let fragment = state.fragment.expect("fragment root");
        assert_eq!("Foo", fragment.name);
        assert!(!fragment.plural);
        assert_eq!(
            vec![
                PropValues::Prop(
                    "id".to_string(),
                    PropValue { nullable: false, prop_type: PropType::Scalar(Scalar::String) }
                ),
                PropValues::Prop(
                    "completed".to_string(),
                    PropValue { nullable: true, prop_type: PropType::Scalar(Scalar::Boolean) }
                ),
            ],
            fragment.definition.values
        );
    }

    #[test]
    fn query_extracts_variables_and_response_and_enum() {
        let module = FlowModule {
            aliases: vec![
                TypeAlias {
                    id: "Status".to_string(),
                    right: FlowType::Union(vec![
                        FlowType::StringLiteral("ACTIVE".to_string()),
                        FlowType::StringLiteral("INACTIVE".to_string()),
                        FlowType::StringLiteral(FUTURE_ADDED_VALUE.to_string()),
                    ]),
                },
                TypeAlias {
                    id: "TodoQueryVariables".to_string(),
                    right: FlowType::Object(vec![prop("id", FlowType::String, false)]),
                },
                TypeAlias {
                    id: "TodoQueryResponse".to_string(),
                    right: FlowType::Object(vec![prop(
                        "status",
                        FlowType::Generic { name: "Status".to_string(), type_args: vec![] },
                        false,
                    )]),
                },
                TypeAlias {
                    id: "TodoQuery".to_string(),
                    right: FlowType::Object(vec![]),
                },
            ],
            parse_errors: vec![],
        };
        let op = OperationType::Query("TodoQuery".to_string());
        let state = extract(&module, &op).unwrap();

        assert_eq!(1, state.enums.len());
        assert_eq!(vec!["ACTIVE", "INACTIVE"], state.enums[0].values);
        assert!(state.variables.is_some());
        assert!(state.response.is_some());
        assert!(state.objects.is_empty());
    }

    #[test]
    fn parse_error_yields_empty_intermediate_state() {
        let module = FlowModule {
            aliases: vec![],
            parse_errors: vec!["unexpected token".to_string()],
        };
        let op = OperationType::Query("Anything".to_string());
        let state = extract(&module, &op).unwrap();
        assert_eq!(IntermediateState::default(), state);
    }
}
