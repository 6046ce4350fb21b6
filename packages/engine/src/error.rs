use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that stop resolution.
///
/// Contract violations are not here: they are advisory and go to a
/// [`DiagnosticSink`](crate::DiagnosticSink) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Component '{name}' is already registered")]
    DuplicateRegistration { name: String },

    #[error("Component '{name}' is not registered")]
    UnknownComponent { name: String },

    #[error("Invalid definition for component '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Component '{name}' does not declare a shorthand mapping rule")]
    NoShorthandRule { name: String },

    #[error("Cannot derive a key for item {index} of the '{component}' shorthand list; give it an explicit `key`")]
    MissingKey { component: String, index: usize },

    #[error("Duplicate key '{key}' in the '{component}' shorthand list")]
    DuplicateKey { component: String, key: String },

    #[error("Unsupported shorthand value of type `{kind}` for '{component}'")]
    UnsupportedShorthandType { component: String, kind: String },
}
