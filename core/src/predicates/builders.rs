//! Curried builders: configure once, get a function outcome back.

use crate::{Date, MatchError, Outcome, Value, MAX_REGEX_PATTERN_LENGTH};
use std::any::Any;
use std::cmp::Ordering;

/// Operand of the ordering builders ([`gt`], [`lt`], [`gte`], [`lte`]).
///
/// A value is only ordered against an operand of the same kind: numbers
/// against numbers, strings against strings (UTF-16 code unit order), dates
/// against dates (by instant). Anything else, `undefined` included, fails the
/// comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    /// Numeric operand.
    Number(f64),
    /// String operand.
    String(String),
    /// Date operand.
    Date(Date),
}

impl Comparable {
    /// Order `value` relative to this operand, if the kinds agree.
    #[must_use]
    pub fn compare(&self, value: &Value) -> Option<Ordering> {
        match (value, self) {
            (Value::Number(v), Self::Number(c)) => v.partial_cmp(c),
            (Value::String(v), Self::String(c)) => Some(v.encode_utf16().cmp(c.encode_utf16())),
            (Value::Date(v), Self::Date(c)) => Some((**v).cmp(c)),
            _ => None,
        }
    }
}

impl From<f64> for Comparable {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Comparable {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Comparable {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Comparable {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Comparable {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Comparable {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Date> for Comparable {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

fn ordered(operand: Comparable, accept: fn(Ordering) -> bool) -> Outcome {
    Outcome::function(move |value: &Value| operand.compare(value).is_some_and(accept))
}

/// `value > operand`.
///
/// ```
/// use casematch::predicates::gt;
/// use casematch::{is_match, TriState, Value};
///
/// assert_eq!(is_match(&Value::from(6), &gt(5)), TriState::True);
/// assert_eq!(is_match(&Value::from("b"), &gt("a")), TriState::True);
/// assert_eq!(is_match(&Value::Undefined, &gt(5)), TriState::False);
/// ```
pub fn gt(operand: impl Into<Comparable>) -> Outcome {
    ordered(operand.into(), Ordering::is_gt)
}

/// `value < operand`.
pub fn lt(operand: impl Into<Comparable>) -> Outcome {
    ordered(operand.into(), Ordering::is_lt)
}

/// `value >= operand`.
pub fn gte(operand: impl Into<Comparable>) -> Outcome {
    ordered(operand.into(), Ordering::is_ge)
}

/// `value <= operand`.
pub fn lte(operand: impl Into<Comparable>) -> Outcome {
    ordered(operand.into(), Ordering::is_le)
}

/// String values starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> Outcome {
    let prefix = prefix.into();
    Outcome::function(move |value: &Value| value.as_str().is_some_and(|s| s.starts_with(&*prefix)))
}

/// String values ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> Outcome {
    let suffix = suffix.into();
    Outcome::function(move |value: &Value| value.as_str().is_some_and(|s| s.ends_with(&*suffix)))
}

/// String values containing `needle`.
pub fn includes_string(needle: impl Into<String>) -> Outcome {
    includes_string_from(needle, 0)
}

/// String values containing `needle` at or after char `position`.
///
/// A position past the end searches the empty tail, so only an empty needle
/// matches there.
///
/// ```
/// use casematch::predicates::includes_string_from;
/// use casematch::{is_match, TriState, Value};
///
/// let value = Value::from("abcabc");
/// assert_eq!(is_match(&value, &includes_string_from("a", 1)), TriState::True);
/// assert_eq!(is_match(&value, &includes_string_from("a", 4)), TriState::False);
/// ```
pub fn includes_string_from(needle: impl Into<String>, position: usize) -> Outcome {
    let needle = needle.into();
    Outcome::function(move |value: &Value| {
        value.as_str().is_some_and(|s| {
            let start = s.char_indices().nth(position).map_or(s.len(), |(i, _)| i);
            s[start..].contains(&*needle)
        })
    })
}

/// String values matching a regular expression (Rust `regex` syntax, linear time).
///
/// # Errors
///
/// - [`MatchError::PatternTooLong`] if `pattern` exceeds [`MAX_REGEX_PATTERN_LENGTH`]
/// - [`MatchError::InvalidPattern`] if it fails to compile
pub fn regex(pattern: &str) -> Result<Outcome, MatchError> {
    if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
        return Err(MatchError::PatternTooLong {
            len: pattern.len(),
            max: MAX_REGEX_PATTERN_LENGTH,
        });
    }
    regex::Regex::new(pattern)
        .map(from_regex)
        .map_err(|e| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e.to_string(),
        })
}

/// String values matching an already compiled regex.
#[must_use]
pub fn from_regex(re: regex::Regex) -> Outcome {
    Outcome::function(move |value: &Value| value.as_str().is_some_and(|s| re.is_match(s)))
}

/// Values whose runtime type is `T`; see [`Value::is_instance_of`].
#[must_use]
pub fn instance_of<T: Any>() -> Outcome {
    Outcome::function(|value: &Value| value.is_instance_of::<T>())
}

/// Values whose `typeof` is `name`.
pub fn type_of(name: impl Into<String>) -> Outcome {
    let name = name.into();
    Outcome::function(move |value: &Value| value.type_of() == name)
}
