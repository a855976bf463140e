//! Error type for input validation.

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core before a plan is computed.
///
/// Plan computation itself is total; only input validation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing, non-numeric, or holds an unrecognized value
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl CoreError {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::InvalidInput { field, .. } => field,
        }
    }
}
