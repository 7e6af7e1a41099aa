//! Error types for the user store.

use rolodex_seeker::SeekerError;
use thiserror::Error;

/// Errors returned by [`UserRepository`](crate::UserRepository) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepoError {
    /// No user has the requested id.
    #[error("user does not exist: {0}")]
    UserNotFound(u64),

    /// The search criterion was rejected.
    #[error(transparent)]
    Search(#[from] SeekerError),
}

impl RepoError {
    /// Classifies this error for the caller's transport.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepoError::UserNotFound(_) => ErrorKind::RecordNotFound,
            RepoError::Search(SeekerError::InvalidField(_)) => ErrorKind::InvalidField,
            RepoError::Search(SeekerError::InvalidCriteriaValue { .. }) => {
                ErrorKind::InvalidCriteriaValue
            }
            RepoError::Search(
                SeekerError::InvalidMatchMode { .. } | SeekerError::UnknownMatchMode(_),
            ) => ErrorKind::InvalidMatchMode,
        }
    }
}

/// The four failure classes a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RecordNotFound,
    InvalidField,
    InvalidCriteriaValue,
    InvalidMatchMode,
}

impl ErrorKind {
    /// Process exit code used by the command-line front end.
    ///
    /// Lookup misses exit with 3, rejected criteria with 2.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::RecordNotFound => 3,
            ErrorKind::InvalidField
            | ErrorKind::InvalidCriteriaValue
            | ErrorKind::InvalidMatchMode => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::RecordNotFound => "RECORD_NOT_FOUND",
            ErrorKind::InvalidField => "INVALID_FIELD",
            ErrorKind::InvalidCriteriaValue => "INVALID_CRITERIA_VALUE",
            ErrorKind::InvalidMatchMode => "INVALID_MATCH_MODE",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_seeker::{FieldKind, MatchMode};

    #[test]
    fn kinds_cover_the_taxonomy() {
        assert_eq!(RepoError::UserNotFound(7).kind(), ErrorKind::RecordNotFound);
        assert_eq!(
            RepoError::from(SeekerError::InvalidField("x".into())).kind(),
            ErrorKind::InvalidField
        );
        assert_eq!(
            RepoError::from(SeekerError::InvalidCriteriaValue {
                field: "height".into(),
                value: "abc".into(),
                kind: FieldKind::Float,
            })
            .kind(),
            ErrorKind::InvalidCriteriaValue
        );
        assert_eq!(
            RepoError::from(SeekerError::InvalidMatchMode {
                field: "city".into(),
                mode: MatchMode::GreaterThan,
                kind: FieldKind::Text,
            })
            .kind(),
            ErrorKind::InvalidMatchMode
        );
        assert_eq!(
            RepoError::from(SeekerError::UnknownMatchMode("LIKE".into())).kind(),
            ErrorKind::InvalidMatchMode
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ErrorKind::RecordNotFound.exit_code(), 3);
        assert_eq!(ErrorKind::InvalidField.exit_code(), 2);
        assert_eq!(ErrorKind::InvalidCriteriaValue.exit_code(), 2);
        assert_eq!(ErrorKind::InvalidMatchMode.exit_code(), 2);
    }

    #[test]
    fn messages_pass_through() {
        assert_eq!(
            RepoError::UserNotFound(999999).to_string(),
            "user does not exist: 999999"
        );
        assert_eq!(
            RepoError::from(SeekerError::InvalidField("age".into())).to_string(),
            "invalid field: 'age'"
        );
    }
}
