//! Compiled criteria and collection scans.
//!
//! A [`Matcher`] is a criterion that has already been resolved against a
//! record type: the field is known, the mode is validated and the value is
//! parsed. Evaluating it against a record cannot fail, so a scan either fails
//! up front or runs to completion.

use std::fmt;

use crate::criterion::{fold_case, Criterion, Target};
use crate::error::Result;
use crate::field::{Field, Searchable};
use crate::mode::MatchMode;
use crate::value::Value;

/// A criterion compiled against `T`'s field table.
///
/// # Example
///
/// ```
/// use rolodex_seeker::{Accessor, Criterion, Field, MatchMode, Searchable};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// fn name(t: &Task) -> &str {
///     &t.name
/// }
///
/// fn priority(t: &Task) -> u64 {
///     u64::from(t.priority)
/// }
///
/// impl Searchable for Task {
///     const FIELDS: &'static [Field<Self>] = &[
///         Field::new("name", Accessor::Text(name)),
///         Field::new("priority", Accessor::Unsigned(priority)),
///     ];
/// }
///
/// let tasks = vec![
///     Task { name: "Write docs".into(), priority: 3 },
///     Task { name: "Fix bug".into(), priority: 5 },
/// ];
///
/// // "priority greater than 4"
/// let matcher = Criterion::new("priority", "4")
///     .with_mode(MatchMode::GreaterThan)
///     .compile::<Task>()?;
///
/// let results = matcher.filter(&tasks);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Fix bug");
/// # Ok::<(), rolodex_seeker::SeekerError>(())
/// ```
pub struct Matcher<T: 'static> {
    field: &'static Field<T>,
    mode: MatchMode,
    target: Target,
}

impl<T: 'static> Matcher<T> {
    pub(crate) fn new(field: &'static Field<T>, mode: MatchMode, target: Target) -> Self {
        log::trace!(
            "compiled criterion field={} kind={} mode={}",
            field.name(),
            field.kind(),
            mode
        );
        Matcher {
            field,
            mode,
            target,
        }
    }

    /// Field this matcher reads.
    pub fn field(&self) -> &'static Field<T> {
        self.field
    }

    /// Effective mode, after defaulting.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Parsed comparison value.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns `true` if `item` satisfies the criterion.
    pub fn matches(&self, item: &T) -> bool {
        match (&self.target, self.field.read(item)) {
            (Target::Text(pattern), Value::Text(text)) => {
                self.mode.eval_text(&fold_case(text), pattern)
            }
            (Target::Number(criterion), Value::Number(record)) => {
                match criterion.compare(record) {
                    Some(ordering) => self.mode.eval_ordering(ordering),
                    // NaN on either side: only NotEquals holds
                    None => self.mode == MatchMode::NotEquals,
                }
            }
            (Target::Bool(criterion), Value::Bool(record)) => {
                self.mode.eval_bool(*criterion, record)
            }
            // The target was parsed for this field's accessor, so the kinds
            // always line up.
            _ => false,
        }
    }

    /// Collects matching items in encounter order.
    pub fn filter<'a, I>(&self, items: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }

    /// Counts matching items.
    pub fn count<'a, I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().filter(|item| self.matches(item)).count()
    }
}

impl<T: 'static> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("field", &self.field)
            .field("mode", &self.mode)
            .field("target", &self.target)
            .finish()
    }
}

/// Evaluates one criterion against one record.
pub fn evaluate<T: Searchable>(criterion: &Criterion, record: &T) -> Result<bool> {
    Ok(criterion.compile::<T>()?.matches(record))
}

/// Scans `items` and returns the ones matching `criterion`.
///
/// Fails before touching any item if the criterion is invalid for `T`, so
/// the result is either complete or an error.
pub fn search<'a, T, I>(items: I, criterion: &Criterion) -> Result<Vec<&'a T>>
where
    T: Searchable,
    I: IntoIterator<Item = &'a T>,
{
    let matcher = criterion.compile::<T>()?;
    Ok(matcher.filter(items))
}
