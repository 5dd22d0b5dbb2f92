// ==========================================
// QR Roster - crate error types
// ==========================================
// Tool: thiserror derive macro
// Policy: per-row validation failures are caught and counted by the
// bulk pipeline; every other kind propagates to the caller, which must
// restore job state to idle regardless of outcome.
// ==========================================

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== User input =====
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    // ===== CSV tokenizer =====
    #[error("CSV parse failed: {0}")]
    Parse(#[from] csv::Error),

    // ===== Empty work =====
    #[error("nothing to do: {0}")]
    EmptyInput(String),

    // ===== Job overlap guard =====
    #[error("an export is already running")]
    JobAlreadyRunning,

    // ===== Document builder =====
    #[error("document build failed: {0}")]
    DocumentBuild(#[source] anyhow::Error),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExportError {
    /// Shorthand for a field-level validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ExportError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the per-row errors the bulk pipeline counts instead of
    /// propagating.
    pub fn is_row_level(&self) -> bool {
        matches!(self, ExportError::Validation { .. })
    }
}

/// Result type alias.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = ExportError::validation("period", "must be >= 1");
        assert_eq!(err.to_string(), "invalid period: must be >= 1");
        assert!(err.is_row_level());
    }

    #[test]
    fn test_non_validation_is_not_row_level() {
        assert!(!ExportError::JobAlreadyRunning.is_row_level());
        assert!(!ExportError::EmptyInput("no rows".into()).is_row_level());
    }
}
