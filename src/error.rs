use thiserror::Error;

/// The five fatal error kinds a single invocation of the core can produce
/// (spec §7). None are retried; each aborts the whole invocation except
/// `ParseError`, which the extractor downgrades to an empty intermediate
/// state and logs instead (see `extractor::extract`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("input could not be parsed: {0}")]
    ParseError(String),

    #[error("missing `__typename: \"X\"` literal on union member at path {path}")]
    MissingTypenameOnUnion { path: String },

    /// Reserved: unreachable today because every numeric literal maps to
    /// `Scalar::Float` (spec §4.2); kept typed so a future Int/Float split
    /// has somewhere to report ambiguity.
    #[error("could not map number literal to a scalar type")]
    CouldNotMapNumber,

    #[error("no variables, response or fragment definitions were found in the input")]
    NoExtractableOperationsFound,

    #[error("a record name was requested from an empty path")]
    ObjectPathEmpty,
}

pub type Result<T> = std::result::Result<T, Error>;
