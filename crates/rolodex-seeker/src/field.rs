//! Static field tables.
//!
//! A record type opts into querying by implementing [`Searchable`], which
//! hands the engine a static table of [`Field`]s. Each entry pairs a routing
//! key with a typed [`Accessor`]; the accessor's variant fixes the field's
//! [`FieldKind`], so no value is ever inspected at runtime to learn its type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::MatchMode;
use crate::value::{Number, Value};

/// Static semantic kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    SignedInteger,
    UnsignedInteger,
    Float,
    Boolean,
}

impl FieldKind {
    /// Mode used when a criterion carries none.
    pub fn default_mode(self) -> MatchMode {
        match self {
            FieldKind::Text => MatchMode::Contains,
            _ => MatchMode::Equals,
        }
    }

    /// Modes valid for this kind, in declaration order.
    pub fn modes(self) -> impl Iterator<Item = MatchMode> {
        MatchMode::ALL
            .into_iter()
            .filter(move |mode| mode.is_valid_for(self))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::SignedInteger => "signed integer",
            FieldKind::UnsignedInteger => "unsigned integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed extraction function for one field of `T`.
///
/// Integer accessors return the widened 64-bit type; record types with a
/// narrower field widen inside the function (`|r| i64::from(r.age)`).
/// Floats keep their declared width so criteria can be parsed at the same
/// precision as the stored value.
pub enum Accessor<T> {
    Text(fn(&T) -> &str),
    Signed(fn(&T) -> i64),
    Unsigned(fn(&T) -> u64),
    Float32(fn(&T) -> f32),
    Float64(fn(&T) -> f64),
    Bool(fn(&T) -> bool),
}

impl<T> Accessor<T> {
    /// Kind of the field this accessor reads.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Accessor::Text(_) => FieldKind::Text,
            Accessor::Signed(_) => FieldKind::SignedInteger,
            Accessor::Unsigned(_) => FieldKind::UnsignedInteger,
            Accessor::Float32(_) | Accessor::Float64(_) => FieldKind::Float,
            Accessor::Bool(_) => FieldKind::Boolean,
        }
    }

    /// Reads and widens the field from `item`.
    pub fn read<'a>(&self, item: &'a T) -> Value<'a> {
        match self {
            Accessor::Text(get) => Value::Text(get(item)),
            Accessor::Signed(get) => Value::Number(Number::from(get(item))),
            Accessor::Unsigned(get) => Value::Number(Number::from(get(item))),
            Accessor::Float32(get) => Value::Number(Number::from(get(item))),
            Accessor::Float64(get) => Value::Number(Number::from(get(item))),
            Accessor::Bool(get) => Value::Bool(get(item)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Accessor::Text(_) => "Text",
            Accessor::Signed(_) => "Signed",
            Accessor::Unsigned(_) => "Unsigned",
            Accessor::Float32(_) => "Float32",
            Accessor::Float64(_) => "Float64",
            Accessor::Bool(_) => "Bool",
        };
        write!(f, "Accessor::{variant}")
    }
}

/// One entry of a record type's field table.
pub struct Field<T> {
    name: &'static str,
    accessor: Accessor<T>,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, accessor: Accessor<T>) -> Self {
        Field { name, accessor }
    }

    /// Routing key, matched case-sensitively against criteria.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }

    pub const fn accessor(&self) -> &Accessor<T> {
        &self.accessor
    }

    pub fn read<'a>(&self, item: &'a T) -> Value<'a> {
        self.accessor.read(item)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Record types that can be matched against criteria.
///
/// # Example
///
/// ```
/// use rolodex_seeker::{Accessor, Field, FieldKind, Searchable};
///
/// struct Sensor {
///     label: String,
///     reading: f32,
/// }
///
/// fn label(s: &Sensor) -> &str {
///     &s.label
/// }
///
/// fn reading(s: &Sensor) -> f32 {
///     s.reading
/// }
///
/// impl Searchable for Sensor {
///     const FIELDS: &'static [Field<Self>] = &[
///         Field::new("label", Accessor::Text(label)),
///         Field::new("reading", Accessor::Float32(reading)),
///     ];
/// }
///
/// assert_eq!(Sensor::field("reading").map(Field::kind), Some(FieldKind::Float));
/// assert!(Sensor::field("Reading").is_none());
/// ```
pub trait Searchable: Sized + 'static {
    /// Field table. Keys must be unique.
    const FIELDS: &'static [Field<Self>];

    /// Looks up a field by routing key.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}
