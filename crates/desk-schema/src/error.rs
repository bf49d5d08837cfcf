//! Registry and validation failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown schema '{0}'")]
    NotFound(String),

    /// Every violation the validator reported, one per line when displayed.
    #[error("value does not match the {schema} schema:\n  - {}", .errors.join("\n  - "))]
    ValidationFailed { schema: String, errors: Vec<String> },

    /// A desk type produced a schema that cannot be serialized or compiled.
    #[error("cannot build schema: {0}")]
    Generation(String),
}
