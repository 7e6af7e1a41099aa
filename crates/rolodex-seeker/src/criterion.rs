//! Criteria: the untyped request form of a single filter.
//!
//! A [`Criterion`] holds the raw field name and textual value exactly as the
//! caller supplied them. [`Criterion::compile`] resolves it against a record
//! type's field table and parses the value once into a typed [`Target`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::field::{Accessor, Searchable};
use crate::mode::MatchMode;
use crate::query::Matcher;
use crate::value::Number;

/// A single declarative filter.
///
/// # Example
///
/// ```
/// use rolodex_seeker::{Criterion, MatchMode};
///
/// let criterion = Criterion::new("city", "pest").with_mode(MatchMode::EndsWith);
/// assert_eq!(criterion.match_mode, Some(MatchMode::EndsWith));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// Routing key of the field to compare.
    pub field: String,
    /// Comparison value, parsed into the field's kind.
    pub value: String,
    /// Comparison mode; the field kind's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_mode: Option<MatchMode>,
}

impl Criterion {
    /// Creates a criterion using the field kind's default mode.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Criterion {
            field: field.into(),
            value: value.into(),
            match_mode: None,
        }
    }

    /// Sets an explicit match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = Some(mode);
        self
    }

    /// Resolves this criterion against `T`'s field table.
    ///
    /// Checks run in a fixed order: field name, then value, then mode.
    pub fn compile<T: Searchable>(&self) -> Result<Matcher<T>> {
        let field =
            T::field(&self.field).ok_or_else(|| SeekerError::InvalidField(self.field.clone()))?;
        let kind = field.kind();

        let target =
            Target::parse(field.accessor(), &self.value).ok_or_else(|| {
                SeekerError::InvalidCriteriaValue {
                    field: self.field.clone(),
                    value: self.value.clone(),
                    kind,
                }
            })?;

        let mode = self.match_mode.unwrap_or_else(|| kind.default_mode());
        if !mode.is_valid_for(kind) {
            return Err(SeekerError::InvalidMatchMode {
                field: self.field.clone(),
                mode,
                kind,
            });
        }

        Ok(Matcher::new(field, mode, target))
    }
}

/// Criterion value parsed into the field's kind.
///
/// Text targets are stored case-folded.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Text(String),
    Number(Number),
    Bool(bool),
}

impl Target {
    /// Parses `raw` as the kind read by `accessor`.
    ///
    /// Float criteria are parsed at the field's own width before widening, so
    /// the printed form of a stored `f32` parses back to an equal target.
    pub fn parse<T>(accessor: &Accessor<T>, raw: &str) -> Option<Target> {
        let target = match accessor {
            Accessor::Text(_) => Target::Text(fold_case(raw)),
            Accessor::Signed(_) => Target::Number(Number::from(raw.parse::<i64>().ok()?)),
            Accessor::Unsigned(_) => Target::Number(Number::from(parse_unsigned(raw)?)),
            Accessor::Float32(_) => Target::Number(Number::from(parse_float32(raw)?)),
            Accessor::Float64(_) => Target::Number(Number::from(parse_float64(raw)?)),
            Accessor::Bool(_) => Target::Bool(parse_bool(raw)?),
        };
        Some(target)
    }
}

/// Lowercases `s` one character at a time.
///
/// Unlike [`str::to_lowercase`], the result for a character never depends on
/// its neighbours (no final-sigma rule), so folding a substring yields a
/// substring of the folded whole.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

// No sign allowed on unsigned values.
fn parse_unsigned(raw: &str) -> Option<u64> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

// Overflow to infinity is a range error unless infinity was spelled out.
fn parse_float64(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(value)
}

// Values beyond the f32 range keep their f64 form instead of narrowing to
// infinity.
fn parse_float32(raw: &str) -> Option<f64> {
    let wide = parse_float64(raw)?;
    if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
        return Some(wide);
    }
    raw.parse::<f32>().ok().map(f64::from)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
