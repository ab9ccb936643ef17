use thiserror::Error;

/// Errors produced by the strict accessors.
///
/// The combinators themselves are total and never return these; only
/// [`Optional::value`](crate::Optional::value) and
/// [`parse_optional`](crate::parse_optional) do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionalError {
    #[error("Expected a value of type {type_name}, found None")]
    Absent { type_name: &'static str },

    #[error("Cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, OptionalError>;
