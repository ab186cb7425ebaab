use thiserror::Error;

/// Errors raised while applying a settings change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown setting: {0}")]
    UnknownField(String),
    #[error("Setting {field} expects {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error("Unknown clock style: {0}")]
    UnknownStyle(String),
    #[error("Expected KEY=VALUE, got {0:?}")]
    MalformedAssignment(String),
    #[error("Setting {field} does not support {operation}")]
    Unsupported {
        field: &'static str,
        operation: &'static str,
    },
}
