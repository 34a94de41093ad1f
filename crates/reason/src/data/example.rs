//! The [`Example`] trait and its value types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

// ============================================================================
// Values
// ============================================================================

/// An owned feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Borrow as a [`ValueRef`].
    #[inline]
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Number(n) => ValueRef::Number(*n),
            Value::Text(s) => ValueRef::Text(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// A borrowed feature value as returned by [`Example::value_of`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> ValueRef<'a> {
    /// The numeric value, if this is a number.
    ///
    /// Text is never parsed: a string where a number is expected carries no
    /// information.
    #[inline]
    pub fn as_number(self) -> Option<f64> {
        match self {
            ValueRef::Number(n) => Some(n),
            ValueRef::Text(_) => None,
        }
    }

    /// String form used for vocabulary lookup and hashing.
    ///
    /// Numbers use Rust's shortest round-trip formatting, so `2.0` becomes
    /// `"2"` and `2.5` becomes `"2.5"`.
    #[inline]
    pub fn to_text(self) -> Cow<'a, str> {
        match self {
            ValueRef::Number(n) => Cow::Owned(n.to_string()),
            ValueRef::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Interpret as an integer index.
    ///
    /// Finite numbers are truncated toward zero; text must parse as a
    /// base-10 integer.
    pub fn to_index(self) -> Option<i64> {
        match self {
            ValueRef::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            ValueRef::Number(_) => None,
            ValueRef::Text(s) => s.parse::<i64>().ok(),
        }
    }
}

// ============================================================================
// Example Trait
// ============================================================================

/// A single input record, queried by feature name.
///
/// Returning `None` means "no value". Engines never store examples and never
/// fail because of a missing or mistyped value.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use reason::data::{Example, Value, ValueRef};
///
/// let mut row: HashMap<String, Value> = HashMap::new();
/// row.insert("age".into(), 42.0.into());
/// row.insert("city".into(), "berlin".into());
///
/// assert_eq!(row.value_of("age"), Some(ValueRef::Number(42.0)));
/// assert_eq!(row.value_of("city"), Some(ValueRef::Text("berlin")));
/// assert_eq!(row.value_of("missing"), None);
/// ```
pub trait Example {
    /// The value of the named feature, if any.
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>>;
}

impl<E: Example + ?Sized> Example for &E {
    #[inline]
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).value_of(name)
    }
}

impl<E: Example + ?Sized> Example for Box<E> {
    #[inline]
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).value_of(name)
    }
}

impl<S: BuildHasher> Example for HashMap<String, Value, S> {
    #[inline]
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>> {
        self.get(name).map(Value::as_value_ref)
    }
}

impl Example for BTreeMap<String, Value> {
    #[inline]
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>> {
        self.get(name).map(Value::as_value_ref)
    }
}

/// JSON objects answer with numbers and strings; every other JSON type
/// (null, bool, array, object) reads as "no value".
impl Example for serde_json::Map<String, serde_json::Value> {
    fn value_of(&self, name: &str) -> Option<ValueRef<'_>> {
        match self.get(name)? {
            serde_json::Value::Number(n) => n.as_f64().map(ValueRef::Number),
            serde_json::Value::String(s) => Some(ValueRef::Text(s)),
            _ => None,
        }
    }
}
