//! Operation-kind-dependent spellings (spec §4.5 step 5, step 9; §9 open
//! question: "the specific spellings are delegated to the printer").

use crate::config::OperationType;

/// The identifier used for the `response` root, which varies by
/// operation kind (spec §4.5 step 5).
pub fn response_type_name(operation_type: &OperationType) -> &'static str {
    match operation_type {
        OperationType::Query(_) => "response",
        OperationType::Mutation(_) => "mutationResponse",
        OperationType::Subscription(_) => "subscriptionResponse",
        OperationType::Fragment { .. } => "fragmentResponse",
    }
}

/// The trailing operation-type descriptor (spec §4.5 step 9), mirroring
/// `OperationType`.
pub fn print_operation_type_descriptor(operation_type: &OperationType) -> String {
    match operation_type {
        OperationType::Query(name) => format!("let operationType = `Query(\"{}\");\n", name),
        OperationType::Mutation(name) => format!("let operationType = `Mutation(\"{}\");\n", name),
        OperationType::Subscription(name) => format!("let operationType = `Subscription(\"{}\");\n", name),
        OperationType::Fragment { name, plural } => {
            format!("let operationType = `Fragment((\"{}\", {}));\n", name, plural)
        }
    }
}
