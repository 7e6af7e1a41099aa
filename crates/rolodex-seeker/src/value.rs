//! Runtime values read out of records.
//!
//! The [`Value`] enum is what a field accessor produces for one record.
//! Numbers are widened to one of three canonical representations on the way
//! out, so comparison never has to know the field's declared width.

use std::cmp::Ordering;

/// Runtime value of a field, borrowed from the source record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value, already widened.
    Number(Number),
    /// Boolean value.
    Bool(bool),
}

/// Numeric value in its widened form.
///
/// - `I64` for every signed integer width
/// - `U64` for every unsigned integer width
/// - `F64` for both float widths
///
/// Widening is exact: every `i8..=i64`, `u8..=u64` and `f32` value has an
/// identical representative in the wider type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers.
    ///
    /// Returns `None` when either side is NaN. A field always yields the same
    /// variant as the criterion parsed for it, so the mixed-variant arm only
    /// serves callers comparing numbers by hand.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! widen {
    ($variant:ident, $wide:ty, $($narrow:ty),+) => {
        $(
            impl From<$narrow> for Number {
                fn from(n: $narrow) -> Self {
                    Number::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

widen!(I64, i64, i8, i16, i32, i64);
widen!(U64, u64, u8, u16, u32, u64);
widen!(F64, f64, f32, f64);
