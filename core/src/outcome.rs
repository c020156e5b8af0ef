//! `Outcome` — What a value is compared against
//!
//! An explicit sum type over literal, structural, functional and operator
//! patterns. Evaluation lives in [`Evaluator`](crate::Evaluator); this module
//! is the data contract plus constructors.
//!
//! # Variants by group
//!
//! - Literal: `Undefined`, `Bool`, `Number`, `String` (strict equality)
//! - Structural: `Date`, `Array`, `Object`
//! - Functional: `Function` (lazy predicate over the value under test)
//! - Operator: `Operator` (catalog combinator nodes)
//! - `Other`: any remaining shape, which never produces a verdict

use crate::{Date, MatchError, OperatorOutcome, Value};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// A lazy predicate: receives the value under test, returns the next outcome.
///
/// Returning [`Outcome::Bool`] is the final verdict; any other outcome is
/// matched against the same value.
pub type OutcomeFn = Arc<dyn Fn(&Value) -> Outcome + Send + Sync>;

/// A pattern a [`Value`] is tested against.
///
/// No validation happens at construction: a shape that cannot be compared with
/// the value evaluates to [`TriState::Unknown`](crate::TriState::Unknown).
///
/// # Example
///
/// ```
/// use casematch::{is_match, Outcome, TriState, Value};
///
/// let user = Value::object([("name", Value::from("alice")), ("age", Value::from(30))]);
///
/// // Keys absent from the pattern are ignored.
/// let pattern = Outcome::object([("name", "alice")]);
/// assert_eq!(is_match(&user, &pattern), TriState::True);
///
/// // A function outcome sees the value at its position.
/// let adult = Outcome::object([(
///     "age",
///     Outcome::function(|age: &Value| age.as_f64().is_some_and(|n| n >= 18.0)),
/// )]);
/// assert_eq!(is_match(&user, &adult), TriState::True);
/// ```
#[derive(Clone)]
pub enum Outcome {
    /// Matches only `Value::Undefined`.
    Undefined,

    /// Strictly equal boolean.
    Bool(bool),

    /// Strictly equal number (`NaN` never matches, `-0` matches `0`).
    Number(f64),

    /// Strictly equal string.
    String(String),

    /// Date comparison, by identity unless configured otherwise.
    Date(Arc<Date>),

    /// Positional pattern: element `i` is tested against `value[i]`.
    Array(Vec<Outcome>),

    /// Keyed subset pattern, evaluated in insertion order.
    Object(Vec<(String, Outcome)>),

    /// Lazy predicate.
    Function(OutcomeFn),

    /// Combinator node.
    Operator(OperatorOutcome),

    /// A shape with no comparison rule (null, callables, custom values).
    Other(Value),
}

impl Outcome {
    /// Build a function outcome.
    ///
    /// The closure may return anything convertible into an outcome: a `bool`
    /// is the final verdict, anything else is matched against the same value.
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Outcome>,
    {
        Self::Function(Arc::new(move |value| f(value).into()))
    }

    /// Build a positional array pattern.
    pub fn array<I, O>(items: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Outcome>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a keyed subset pattern. Keys are evaluated in the given order.
    pub fn object<I, K, O>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, O)>,
        K: Into<String>,
        O: Into<Outcome>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(k, o)| (k.into(), o.into()))
                .collect(),
        )
    }

    /// Build a date pattern with a fresh identity.
    ///
    /// Under the default [`DateEquality::Identity`](crate::DateEquality::Identity)
    /// it only matches the same `Arc`; see [`Outcome::from`] with a
    /// [`Value::Date`] to reuse an existing identity.
    #[must_use]
    pub fn date(date: Date) -> Self {
        Self::Date(Arc::new(date))
    }

    /// Short name of the variant, used in log fields.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Operator(_) => "operator",
            Self::Other(_) => "other",
        }
    }

    /// Returns `true` for the literal variants.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Bool(_) | Self::Number(_) | Self::String(_)
        )
    }

    /// Static nesting depth.
    ///
    /// Function outcomes count as a single level since what they return is
    /// only known at evaluation time.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Array(items) => 1 + items.iter().map(Outcome::depth).max().unwrap_or(0),
            Self::Object(fields) => {
                1 + fields.iter().map(|(_, o)| o.depth()).max().unwrap_or(0)
            }
            Self::Operator(op) => op.depth(),
            _ => 1,
        }
    }

    /// Check the static nesting depth against `max_depth`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DepthExceeded`] if the outcome is nested deeper.
    pub fn validate(&self, max_depth: usize) -> Result<(), MatchError> {
        let depth = self.depth();
        if depth > max_depth {
            return Err(MatchError::DepthExceeded {
                depth,
                max: max_depth,
            });
        }
        Ok(())
    }
}

impl Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            Self::Function(_) => f.write_str("Function"),
            Self::Operator(op) => f.debug_tuple("Operator").field(op).finish(),
            Self::Other(v) => f.debug_tuple("Other").field(v).finish(),
        }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Outcome {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Outcome {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Outcome {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Outcome {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Date> for Outcome {
    fn from(d: Date) -> Self {
        Self::date(d)
    }
}

impl From<Vec<Outcome>> for Outcome {
    fn from(items: Vec<Outcome>) -> Self {
        Self::Array(items)
    }
}

impl From<OperatorOutcome> for Outcome {
    fn from(op: OperatorOutcome) -> Self {
        Self::Operator(op)
    }
}

/// A value used as a pattern.
///
/// Primitives become literals, dates keep their identity, arrays and objects
/// become structural patterns (object keys in sorted order), and `null`,
/// callables and custom values become [`Outcome::Other`].
impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Date(d) => Self::Date(d),
            Value::Array(items) => Self::Array(items.iter().cloned().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v.clone())))
                    .collect(),
            ),
            other @ (Value::Null | Value::Function(_) | Value::Custom(_)) => Self::Other(other),
        }
    }
}
