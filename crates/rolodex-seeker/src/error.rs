//! Error types for the seeker crate.

use thiserror::Error;

use crate::field::FieldKind;
use crate::mode::MatchMode;

/// Errors that can occur when resolving a criterion against a record schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeekerError {
    /// The criterion names a field outside the record's schema.
    #[error("invalid field: '{0}'")]
    InvalidField(String),

    /// The criterion value cannot be parsed into the field's kind.
    #[error("invalid criteria value '{value}' for {kind} field '{field}'")]
    InvalidCriteriaValue {
        field: String,
        value: String,
        kind: FieldKind,
    },

    /// The match mode is not one of the modes valid for the field's kind.
    #[error("invalid match mode '{mode}' for {kind} field '{field}'")]
    InvalidMatchMode {
        field: String,
        mode: MatchMode,
        kind: FieldKind,
    },

    /// The match mode name does not name any mode at all.
    #[error("invalid match mode: unknown mode '{0}'")]
    UnknownMatchMode(String),
}

impl SeekerError {
    /// Returns `true` for both flavours of match mode rejection.
    pub fn is_invalid_match_mode(&self) -> bool {
        matches!(
            self,
            SeekerError::InvalidMatchMode { .. } | SeekerError::UnknownMatchMode(_)
        )
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
