//! Match modes for criteria.
//!
//! The [`MatchMode`] enum defines every supported comparison, grouped by the
//! field kinds they apply to. Not all modes are valid for all kinds.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekerError;
use crate::field::FieldKind;

/// Comparison mode of a criterion.
///
/// Modes are grouped by the kinds they support:
/// - **Text**: `Contains`, `StartsWith`, `EndsWith`, `Exact`
/// - **Numeric**: `Equals`, `NotEquals`, `GreaterThan`, `GreaterThanOrEqual`,
///   `LessThan`, `LessThanOrEqual`
/// - **Boolean**: `Equals`, `Not`
///
/// Ordering modes read from the caller's side: `GreaterThan` with value `X`
/// selects records whose value is greater than `X`, which is evaluated as
/// `X < record`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchMode {
    // Text modes
    /// Record value contains the criterion as a substring.
    Contains,
    /// Record value begins with the criterion.
    StartsWith,
    /// Record value ends with the criterion.
    EndsWith,
    /// Case-insensitive full equality.
    Exact,

    // Numeric modes (Equals is shared with booleans)
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Boolean negation
    Not,
}

impl MatchMode {
    /// Every mode, in declaration order.
    pub const ALL: [MatchMode; 11] = [
        MatchMode::Contains,
        MatchMode::StartsWith,
        MatchMode::EndsWith,
        MatchMode::Exact,
        MatchMode::Equals,
        MatchMode::NotEquals,
        MatchMode::GreaterThan,
        MatchMode::GreaterThanOrEqual,
        MatchMode::LessThan,
        MatchMode::LessThanOrEqual,
        MatchMode::Not,
    ];

    /// Returns `true` if this mode is valid for text fields.
    pub fn is_text_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Contains | MatchMode::StartsWith | MatchMode::EndsWith | MatchMode::Exact
        )
    }

    /// Returns `true` if this mode is valid for numeric fields.
    pub fn is_number_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Equals
                | MatchMode::NotEquals
                | MatchMode::GreaterThan
                | MatchMode::GreaterThanOrEqual
                | MatchMode::LessThan
                | MatchMode::LessThanOrEqual
        )
    }

    /// Returns `true` if this mode is valid for boolean fields.
    pub fn is_bool_mode(self) -> bool {
        matches!(self, MatchMode::Equals | MatchMode::Not)
    }

    /// Returns `true` if this mode may be used against a field of `kind`.
    pub fn is_valid_for(self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Text => self.is_text_mode(),
            FieldKind::SignedInteger | FieldKind::UnsignedInteger | FieldKind::Float => {
                self.is_number_mode()
            }
            FieldKind::Boolean => self.is_bool_mode(),
        }
    }

    /// Evaluates a text comparison.
    ///
    /// Both arguments are expected to be case-folded already.
    pub fn eval_text(self, record: &str, criterion: &str) -> bool {
        match self {
            MatchMode::Contains => record.contains(criterion),
            MatchMode::StartsWith => record.starts_with(criterion),
            MatchMode::EndsWith => record.ends_with(criterion),
            MatchMode::Exact => record == criterion,
            _ => false,
        }
    }

    /// Evaluates a numeric comparison given `criterion.cmp(record)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            MatchMode::Equals => ordering == Ordering::Equal,
            MatchMode::NotEquals => ordering != Ordering::Equal,
            MatchMode::GreaterThan => ordering == Ordering::Less,
            MatchMode::GreaterThanOrEqual => ordering != Ordering::Greater,
            MatchMode::LessThan => ordering == Ordering::Greater,
            MatchMode::LessThanOrEqual => ordering != Ordering::Less,
            _ => false,
        }
    }

    /// Evaluates a boolean comparison.
    pub fn eval_bool(self, criterion: bool, record: bool) -> bool {
        match self {
            MatchMode::Equals => criterion == record,
            MatchMode::Not => criterion != record,
            _ => false,
        }
    }

    /// Returns the wire name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Contains => "CONTAINS",
            MatchMode::StartsWith => "STARTS_WITH",
            MatchMode::EndsWith => "ENDS_WITH",
            MatchMode::Exact => "EXACT",
            MatchMode::Equals => "EQUALS",
            MatchMode::NotEquals => "NOT_EQUALS",
            MatchMode::GreaterThan => "GREATER_THAN",
            MatchMode::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            MatchMode::LessThan => "LESS_THAN",
            MatchMode::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            MatchMode::Not => "NOT",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = SeekerError;

    /// Parses a wire name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        MatchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| SeekerError::UnknownMatchMode(s.to_string()))
    }
}
