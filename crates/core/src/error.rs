use crate::validation::FieldError;

/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A keyed lookup or mutation target does not exist.
    #[error("{entity} with key {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// A form failed its validation schema before submission.
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// A uniqueness or state invariant would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldError {
            field,
            message: message.into(),
        }])
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
