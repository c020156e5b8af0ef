//! `Value` — The dynamic runtime value that outcomes are tested against
//!
//! Primitives are held inline; dates, arrays, objects and callables live behind
//! an `Arc`, which gives them reference identity. Cloning a `Value` shares that
//! identity, building a new one does not.
//!
//! # Extensibility via `Custom`
//!
//! For domain types not covered by the built-in variants, implement
//! [`CustomValue`] and wrap in `Value::Custom(Arc::new(your_type))`.

#[cfg(feature = "serde")]
use crate::MatchError;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Point in time carried by [`Value::Date`] and date outcomes.
pub type Date = chrono::DateTime<chrono::Utc>;

/// Extension trait for custom runtime values.
///
/// Custom values behave like opaque objects: `typeof` reports `"object"`,
/// equality is by `Arc` identity, and property lookup goes through
/// [`CustomValue::get`].
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
/// use casematch::{CustomValue, Value};
///
/// #[derive(Debug)]
/// struct Point { x: f64, y: f64 }
///
/// impl CustomValue for Point {
///     fn custom_type_name(&self) -> &'static str { "point" }
///     fn as_any(&self) -> &dyn Any { self }
///     fn get(&self, key: &str) -> Value {
///         match key {
///             "x" => Value::from(self.x),
///             "y" => Value::from(self.y),
///             _ => Value::Undefined,
///         }
///     }
/// }
///
/// let p = Value::Custom(Arc::new(Point { x: 1.0, y: 2.0 }));
/// assert_eq!(p.type_of(), "object");
/// assert_eq!(p.get("x").as_f64(), Some(1.0));
/// assert!(p.is_instance_of::<Point>());
/// ```
pub trait CustomValue: Send + Sync + Debug {
    /// Returns a human-readable type identifier, e.g. `"point"`.
    fn custom_type_name(&self) -> &'static str;

    /// Returns a reference to `self` as `&dyn Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Property lookup used by keyed structural patterns.
    ///
    /// Default: every key is `Undefined`.
    fn get(&self, _key: &str) -> Value {
        Value::Undefined
    }
}

/// A callable runtime value (the JS `function` type).
///
/// Only its identity and `typeof` matter to the matcher; [`Callable::call`]
/// exists so callers can carry real behavior through a `Value`.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Callable {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Reference identity.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable")
    }
}

/// The dynamic value under test.
///
/// # Variants
///
/// - `Undefined` — Absent value (missing key, out-of-range index)
/// - `Null` — Explicit null
/// - `Bool`, `Number`, `String` — Primitives compared by value
/// - `Date`, `Array`, `Object`, `Function`, `Custom` — Compared by identity
///
/// # Equality
///
/// `PartialEq` is strict equality (`===`): `NaN != NaN`, `-0.0 == 0.0`, and
/// two separately built arrays with the same elements are NOT equal.
///
/// # Example
///
/// ```
/// use casematch::Value;
///
/// let data = Value::object([("name", Value::from("alice")), ("age", Value::from(30))]);
/// assert_eq!(data.get("name").as_str(), Some("alice"));
/// assert!(data.get("missing").is_undefined());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,

    /// Explicit null.
    Null,

    /// Boolean.
    Bool(bool),

    /// IEEE-754 double, the only number type.
    Number(f64),

    /// String data.
    String(String),

    /// Point in time, compared by identity.
    Date(Arc<Date>),

    /// Ordered list.
    Array(Arc<Vec<Value>>),

    /// Keyed record.
    Object(Arc<BTreeMap<String, Value>>),

    /// Callable.
    Function(Callable),

    /// Domain-specific extension.
    Custom(Arc<dyn CustomValue>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl Value {
    /// Build an array value.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build an object value.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build a date value with a fresh identity.
    #[must_use]
    pub fn date(date: Date) -> Self {
        Self::Date(Arc::new(date))
    }

    /// Build a callable value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Callable::new(f))
    }

    /// Strict equality (`===`).
    ///
    /// Primitives compare by value, everything else by reference identity.
    #[must_use]
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The `typeof` name of this value.
    ///
    /// `null`, dates, arrays, objects and custom values all report `"object"`.
    #[must_use]
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Null | Self::Date(_) | Self::Array(_) | Self::Object(_) | Self::Custom(_) => {
                "object"
            }
        }
    }

    /// A finer-grained type description, used in traces.
    ///
    /// For `Custom` values this delegates to [`CustomValue::custom_type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Custom(c) => c.custom_type_name(),
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `-0`, `NaN` and `""` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Property lookup.
    ///
    /// - objects: the entry for `key`
    /// - arrays: canonical decimal indices and `length`
    /// - strings: `length` and canonical indices, both in UTF-16 code units;
    ///   an index landing on half of a surrogate pair is `Undefined`
    /// - custom values: [`CustomValue::get`]
    ///
    /// Anything else, including lookups on `undefined` and `null`, yields
    /// `Undefined` rather than failing.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        match self {
            Self::Object(map) => map.get(key).cloned().unwrap_or_default(),
            Self::Array(items) => {
                if key == "length" {
                    return Value::from(items.len());
                }
                parse_index(key)
                    .and_then(|i| items.get(i))
                    .cloned()
                    .unwrap_or_default()
            }
            Self::String(s) => {
                if key == "length" {
                    return Value::from(s.encode_utf16().count());
                }
                parse_index(key)
                    .and_then(|i| s.encode_utf16().nth(i))
                    .and_then(|unit| char::from_u32(u32::from(unit)))
                    .map_or(Value::Undefined, |c| Value::from(c.to_string()))
            }
            Self::Custom(c) => c.get(key),
            _ => Value::Undefined,
        }
    }

    /// Element lookup for arrays; `None` for other variants or out of range.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Runtime type test against a Rust type.
    ///
    /// Dates test against [`Date`], arrays against `Vec<Value>`, objects
    /// against `BTreeMap<String, Value>`, callables against [`Callable`], and
    /// custom values against their concrete type.
    #[must_use]
    pub fn is_instance_of<T: Any>(&self) -> bool {
        match self {
            Self::Date(d) => (&**d as &dyn Any).is::<T>(),
            Self::Array(items) => (&**items as &dyn Any).is::<T>(),
            Self::Object(map) => (&**map as &dyn Any).is::<T>(),
            Self::Function(f) => (f as &dyn Any).is::<T>(),
            Self::Custom(c) => c.as_any().is::<T>(),
            _ => false,
        }
    }

    /// Returns `true` if this is `Undefined`.
    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if this is `Null`.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for `Null` or `Undefined`.
    #[inline]
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a number.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as a date.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get the value as an array slice.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Try to get the value as an object map.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get the value as a custom value reference.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Convert any serializable type through its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidConfig`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Self, MatchError> {
        serde_json::to_value(value)
            .map(Self::from)
            .map_err(|e| MatchError::InvalidConfig {
                source: e.to_string(),
            })
    }
}

/// Canonical array index: no sign, no leading zeros (except `"0"` itself).
fn parse_index(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)] // numbers are doubles, as in the values being modeled
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(Arc::new(map))
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Function(f)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Undefined,
        }
    }
}

/// JSON `null` maps to [`Value::Null`]; there is no JSON spelling of `Undefined`.
#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Number(f64::NAN), Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::array(items),
            serde_json::Value::Object(map) => Self::object(map),
        }
    }
}
