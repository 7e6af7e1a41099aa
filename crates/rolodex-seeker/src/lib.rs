//! Seeker - single-criterion query engine for typed record collections.
//!
//! A caller describes a filter as a [`Criterion`]: a field name, a textual
//! value and an optional [`MatchMode`]. Seeker resolves the field through a
//! static table supplied by the record type ([`Searchable`]), parses the value
//! into the field's kind and evaluates it against each record.
//!
//! # Quick Start
//!
//! ```rust
//! use rolodex_seeker::{search, Accessor, Criterion, Field, MatchMode, Searchable};
//!
//! struct Person {
//!     name: String,
//!     height: f32,
//!     married: bool,
//! }
//!
//! fn name(p: &Person) -> &str {
//!     &p.name
//! }
//!
//! fn height(p: &Person) -> f32 {
//!     p.height
//! }
//!
//! fn married(p: &Person) -> bool {
//!     p.married
//! }
//!
//! impl Searchable for Person {
//!     const FIELDS: &'static [Field<Self>] = &[
//!         Field::new("name", Accessor::Text(name)),
//!         Field::new("height", Accessor::Float32(height)),
//!         Field::new("married", Accessor::Bool(married)),
//!     ];
//! }
//!
//! let people = vec![
//!     Person { name: "Anna".into(), height: 5.4, married: true },
//!     Person { name: "Hannah".into(), height: 6.1, married: false },
//! ];
//!
//! // Text fields default to a case-insensitive substring match.
//! let found = search(&people, &Criterion::new("name", "ANN"))?;
//! assert_eq!(found.len(), 2);
//!
//! let tall = Criterion::new("height", "6").with_mode(MatchMode::GreaterThan);
//! let found = search(&people, &tall)?;
//! assert_eq!(found[0].name, "Hannah");
//! # Ok::<(), rolodex_seeker::SeekerError>(())
//! ```
//!
//! # Field Kinds and Modes
//!
//! | Kind | Modes | Default |
//! |------|-------|---------|
//! | Text | `Contains`, `StartsWith`, `EndsWith`, `Exact` | `Contains` |
//! | Signed / unsigned integer, float | `Equals`, `NotEquals`, `GreaterThan`, `GreaterThanOrEqual`, `LessThan`, `LessThanOrEqual` | `Equals` |
//! | Boolean | `Equals`, `Not` | `Equals` |
//!
//! Text comparison is case-insensitive. Ordering modes describe the record
//! relative to the value: `GreaterThan 6` selects records above 6.
//!
//! # Errors
//!
//! An unknown field, an unparseable value or a mode outside the field kind's
//! set is reported as a [`SeekerError`] before any record is evaluated.

mod criterion;
mod error;
mod field;
mod mode;
mod query;
mod value;

// Re-export public API
pub use criterion::{fold_case, parse_bool, Criterion, Target};
pub use error::{Result, SeekerError};
pub use field::{Accessor, Field, FieldKind, Searchable};
pub use mode::MatchMode;
pub use query::{evaluate, search, Matcher};
pub use value::{Number, Value};
