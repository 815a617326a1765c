use serde::Deserialize;

/// Which GraphQL operation kind this invocation is generating code for
/// (spec §3). `name` is always the unqualified operation identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationType {
    Fragment { name: String, plural: bool },
    Query(String),
    Mutation(String),
    Subscription(String),
}

impl OperationType {
    pub fn name(&self) -> &str {
        match self {
            OperationType::Fragment { name, .. } => name,
            OperationType::Query(name) => name,
            OperationType::Mutation(name) => name,
            OperationType::Subscription(name) => name,
        }
    }

    pub(crate) fn is_mutation(&self) -> bool {
        matches!(self, OperationType::Mutation(_))
    }

    pub(crate) fn is_query(&self) -> bool {
        matches!(self, OperationType::Query(_))
    }
}

/// Host-supplied, already-parsed configuration (spec §3, §6). The host
/// owns environment variables, flags and persisted state; this struct is
/// the entire surface the core reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintConfig {
    pub connection: Option<ConnectionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// Root-first path to the object carrying the connection field.
    #[serde(rename = "atObjectPath")]
    pub at_object_path: Vec<String>,
    #[serde(rename = "fieldName")]
    pub field_name: String,
}
