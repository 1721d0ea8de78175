//! Classification of decoded structured values.
//!
//! Arguments arrive as [`serde_json::Value`] trees decoded by the caller.
//! [`ValueKind`] names their runtime shape for diagnostics, while
//! [`MergeArgument`] is the closed form the merger accepts once validation has
//! normalised the null sentinel.

use std::fmt;

use serde_json::{Map, Value};

/// Runtime shape of a structured value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    /// Associative structure with unique string keys.
    Mapping,
    /// Ordered list of values.
    Sequence,
    /// Text scalar.
    String,
    /// Number with an exact integer representation.
    Integer,
    /// Floating point number.
    Float,
    /// Boolean scalar.
    Boolean,
    /// Explicit null.
    Null,
}

impl ValueKind {
    /// Classify `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_merge::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!("2")), ValueKind::String);
    /// assert_eq!(ValueKind::of(&json!(2)), ValueKind::Integer);
    /// assert_eq!(ValueKind::of(&json!({})), ValueKind::Mapping);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Mapping,
            Value::Array(_) => Self::Sequence,
            Value::String(_) => Self::String,
            Value::Number(number) if number.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }

    /// Human-readable type name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mapping => "Mapping",
            Self::Sequence => "Sequence",
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated merge argument.
///
/// The calling DSL passes an empty string where it has no value for an
/// argument; validation turns that into [`MergeArgument::Undef`], which merges
/// as an empty mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MergeArgument<'a> {
    /// A mapping borrowed from the caller's argument list.
    Mapping(&'a Map<String, Value>),
    /// The null sentinel.
    Undef,
}

impl<'a> MergeArgument<'a> {
    /// Returns the borrowed mapping, or `None` for the null sentinel.
    #[must_use]
    pub const fn as_mapping(self) -> Option<&'a Map<String, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Undef => None,
        }
    }

    /// Returns `true` when this argument is the null sentinel.
    #[must_use]
    pub const fn is_undef(self) -> bool {
        matches!(self, Self::Undef)
    }
}

impl<'a> From<&'a Map<String, Value>> for MergeArgument<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}
