//! Generic value tree produced by the format decoders
//!
//! Every supported format is lowered into this single representation
//! before validation, so the validator never sees format-specific types.

use core::fmt;

/// A decoded configuration value.
///
/// Mappings preserve the order the decoder emitted entries in; key lookup
/// is always by name, so ordering never affects validation outcomes.
/// Values are built once by a decoder and never mutated afterwards.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Value {
    /// Explicit null marker.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// UTF-8 string scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Insertion-ordered mapping of string keys to values.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Look up a mapping member by key.
    ///
    /// Returns `None` when the value is not a mapping or the key is
    /// absent.
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match *self {
            Self::Mapping(ref entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Check whether a mapping contains `key`.
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Short variant name used in log output.
    #[must_use]
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match *self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

/// Value equality as used for `enum` membership checks.
///
/// Integers and floats compare numerically (`Int(1)` equals
/// `Float(1.0)`), but booleans never equal numbers even though some host
/// formats model them as 0/1. Mapping equality compares entries by key,
/// not by position: ordering carries no meaning for validation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (&Self::Int(a), &Self::Float(b)) | (&Self::Float(b), &Self::Int(a)) => {
                int_eq_float(a, b)
            }
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(name, other)| name == key && other == value)
                    })
            }
            _ => false,
        }
    }
}

/// Exact integer/float comparison.
///
/// Casting the integer to `f64` would round values beyond 2^53 and let
/// e.g. `Int(9007199254740993)` equal `Float(9007199254740992.0)`;
/// instead require the float to be a whole number that converts back to
/// exactly `a`. The upper bound excludes 2^63, which the saturating cast
/// would otherwise collapse onto `i64::MAX`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn int_eq_float(a: i64, b: f64) -> bool {
    b.fract() == 0.0 && b >= i64::MIN as f64 && b < i64::MAX as f64 && b as i64 == a
}

/// Rendering used verbatim inside error messages: scalars print plainly,
/// strings are single-quoted, containers use bracket/brace notation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(ref s) => write!(f, "'{s}'"),
            Self::Sequence(ref items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(ref entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
