//! The six end-to-end scenarios enumerated in the spec's testable
//! properties: one fixture per scenario, checked against the emitted
//! text.

use flow_reason_codegen::{
    print_from_flow_types, ConnectionConfig, Error, FlowModule, FlowProperty, FlowType, OperationType, PrintConfig,
    TypeAlias,
};

fn prop(key: &str, value: FlowType, optional: bool) -> FlowProperty {
    FlowProperty {
        key: key.to_string(),
        value,
        optional,
    }
}

fn module(aliases: Vec<TypeAlias>) -> FlowModule {
    FlowModule {
        aliases,
        parse_errors: vec![],
    }
}

#[test]
fn minimal_fragment() {
    let input = module(vec![TypeAlias {
        id: "Foo".to_string(),
        right: FlowType::Object(vec![
            prop("$refType", FlowType::Generic { name: "Foo$ref".to_string(), type_args: vec![] }, false),
            prop("id", FlowType::String, false),
            prop("completed", FlowType::Nullable(Box::new(FlowType::Boolean)), true),
        ]),
    }]);

    let operation_type = OperationType::Fragment { name: "Foo".to_string(), plural: false };
    let printed = print_from_flow_types(&input, &operation_type, &PrintConfig::default()).unwrap();

    assert!(printed.starts_with("/* @generated */"));
    assert!(printed.contains("type fragment = {\n  id: string,\n  completed: option(bool),\n};"));
    assert!(!printed.contains("refType"));
    assert!(printed.contains("type foo_fragmentRef;"));
    assert!(printed.contains("let operationType = `Fragment((\"Foo\", false));"));
}

#[test]
fn query_with_enum_emits_refetch_variables() {
    let input = module(vec![
        TypeAlias {
            id: "Status".to_string(),
            right: FlowType::Union(vec![
                FlowType::StringLiteral("ACTIVE".to_string()),
                FlowType::StringLiteral("INACTIVE".to_string()),
                FlowType::StringLiteral("%future added value".to_string()),
            ]),
        },
        TypeAlias {
            id: "TodoQueryVariables".to_string(),
            right: FlowType::Object(vec![prop("id", FlowType::Nullable(Box::new(FlowType::String)), true)]),
        },
        TypeAlias {
            id: "TodoQueryResponse".to_string(),
            right: FlowType::Object(vec![prop(
                "status",
                FlowType::Generic { name: "Status".to_string(), type_args: vec![] },
                false,
            )]),
        },
    ]);

    let operation_type = OperationType::Query("TodoQuery".to_string());
    let printed = print_from_flow_types(&input, &operation_type, &PrintConfig::default()).unwrap();

    assert!(printed.contains("type status =\n  | Active\n  | Inactive\n;"));
    assert!(printed.contains("type variables = {\n  id: option(string),\n};"));
    assert!(printed.contains("type refetchVariables = {\n  id: string,\n};"));
}

#[test]
fn mutation_emits_wrap_response_with_null_sentinel() {
    let input = module(vec![TypeAlias {
        id: "AddTodoResponse".to_string(),
        right: FlowType::Object(vec![prop("id", FlowType::String, false)]),
    }]);

    let operation_type = OperationType::Mutation("AddTodo".to_string());
    let printed = print_from_flow_types(&input, &operation_type, &PrintConfig::default()).unwrap();

    assert!(printed.contains("responseConverter"));
    assert!(printed.contains("wrapResponseConverter"));
    assert!(printed.contains("nullable sentinel: null"));
    assert!(printed.contains("type mutationResponse = {\n  id: string,\n};"));
}

#[test]
fn inline_union_drops_other_member() {
    let node_union = FlowType::Union(vec![
        FlowType::Object(vec![
            prop("__typename", FlowType::StringLiteral("A".to_string()), false),
            prop("a", FlowType::String, false),
        ]),
        FlowType::Object(vec![
            prop("__typename", FlowType::StringLiteral("B".to_string()), false),
            prop("b", FlowType::Number, false),
        ]),
        FlowType::Object(vec![prop("__typename", FlowType::StringLiteral("%other".to_string()), false)]),
    ]);

    let input = module(vec![TypeAlias {
        id: "NodeQueryResponse".to_string(),
        right: FlowType::Object(vec![prop("node", node_union, false)]),
    }]);

    let operation_type = OperationType::Query("NodeQuery".to_string());
    let printed = print_from_flow_types(&input, &operation_type, &PrintConfig::default()).unwrap();

    assert!(printed.contains("| `A("));
    assert!(printed.contains("| `B("));
    assert!(printed.contains("| `Unselected(string)"));
    assert!(!printed.contains("`Other"));
    assert!(printed.contains("open Unions;"));
}

#[test]
fn connection_helper_targets_configured_field() {
    // Builds response.edges.todos.viewer so the finalizer assigns it the
    // leaf-first path `["viewer", "todos", "edges", "response"]`, with
    // "response" the operation-root anchor `make_obj_shape` prepended
    // onto. `atObjectPath` below is root-first from the top selection
    // field down, per spec end-to-end scenario 5, and names no anchor —
    // `find_connection_target` strips it before comparing.
    let input = module(vec![TypeAlias {
        id: "ViewerQueryResponse".to_string(),
        right: FlowType::Object(vec![prop(
            "edges",
            FlowType::Object(vec![prop(
                "todos",
                FlowType::Object(vec![prop(
                    "viewer",
                    FlowType::Object(vec![prop("name", FlowType::String, false)]),
                    false,
                )]),
                false,
            )]),
            false,
        )]),
    }]);

    let config = PrintConfig {
        connection: Some(ConnectionConfig {
            at_object_path: vec!["edges".to_string(), "todos".to_string(), "viewer".to_string()],
            field_name: "todos".to_string(),
        }),
    };

    let operation_type = OperationType::Query("ViewerQuery".to_string());
    let printed = print_from_flow_types(&input, &operation_type, &config).unwrap();

    assert!(printed.contains("module Utils"));
    assert!(printed.contains("getConnectionNodes"));
    assert!(printed.contains("value##todos"));
}

#[test]
fn unmatched_connection_path_emits_no_helper_and_no_error() {
    let input = module(vec![TypeAlias {
        id: "ViewerQueryResponse".to_string(),
        right: FlowType::Object(vec![prop("id", FlowType::String, false)]),
    }]);

    let config = PrintConfig {
        connection: Some(ConnectionConfig {
            at_object_path: vec!["nowhere".to_string()],
            field_name: "todos".to_string(),
        }),
    };

    let operation_type = OperationType::Query("ViewerQuery".to_string());
    let printed = print_from_flow_types(&input, &operation_type, &config).unwrap();
    assert!(!printed.contains("module Utils"));
}

#[test]
fn no_operations_fails_with_no_extractable_operations_found() {
    let input = module(vec![TypeAlias {
        id: "Unrelated".to_string(),
        right: FlowType::String,
    }]);

    let operation_type = OperationType::Query("TodoQuery".to_string());
    let result = print_from_flow_types(&input, &operation_type, &PrintConfig::default());
    assert_eq!(Err(Error::NoExtractableOperationsFound), result);
}
