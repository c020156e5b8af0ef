//! Nullary catalog predicates.
//!
//! Each predicate inspects the value under test and returns a `Computed`
//! [`OperatorOutcome`] carrying its verdict. Use them as outcomes through
//! [`check`](super::check) or [`Outcome::function`](crate::Outcome::function).

use crate::{IntegerSemantics, MatchError, OperatorOutcome, Value};

/// Signature shared by every catalog predicate.
pub type Check = fn(&Value) -> OperatorOutcome;

/// Matches every value, `undefined` included.
#[must_use]
pub fn is_anything(_value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_anything", true)
}

/// `null`, or anything whose `typeof` is not `"object"` (functions included).
#[must_use]
pub fn is_primitive(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed(
        "is_primitive",
        value.is_null() || value.type_of() != "object",
    )
}

/// `typeof` is `"object"`: objects, arrays, dates, custom values and `null`.
#[must_use]
pub fn is_object(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_object", value.type_of() == "object")
}

/// Callable values.
#[must_use]
pub fn is_function(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_function", matches!(value, Value::Function(_)))
}

/// Any number, `NaN` and infinities included.
#[must_use]
pub fn is_number(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_number", matches!(value, Value::Number(_)))
}

/// String values, the empty string included.
#[must_use]
pub fn is_string(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_string", matches!(value, Value::String(_)))
}

/// Only `null`.
#[must_use]
pub fn is_null(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_null", value.is_null())
}

/// Only `undefined`.
#[must_use]
pub fn is_undefined(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_undefined", value.is_undefined())
}

/// `null` or `undefined`.
#[must_use]
pub fn is_nullish(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_nullish", value.is_nullish())
}

/// Falsy values; see [`Value::is_truthy`].
#[must_use]
pub fn is_falsy(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_falsy", !value.is_truthy())
}

/// Truthy values; see [`Value::is_truthy`].
#[must_use]
pub fn is_truthy(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_truthy", value.is_truthy())
}

/// `true` or `false`.
#[must_use]
pub fn is_boolean(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_boolean", matches!(value, Value::Bool(_)))
}

/// Finite numbers without a fractional part, `0` and `-0` included.
///
/// See [`is_integer_with`] for the legacy variant.
#[must_use]
pub fn is_integer(value: &Value) -> OperatorOutcome {
    integer_check(value, IntegerSemantics::Strict)
}

/// Integer check under the given semantics.
///
/// ```
/// use casematch::predicates::{check, is_integer_with};
/// use casematch::{is_match, IntegerSemantics, TriState, Value};
///
/// let legacy = check(is_integer_with(IntegerSemantics::Legacy));
/// assert_eq!(is_match(&Value::from(0), &legacy), TriState::False);
/// assert_eq!(is_match(&Value::from(2.5), &legacy), TriState::True);
/// ```
#[must_use]
pub fn is_integer_with(
    semantics: IntegerSemantics,
) -> impl Fn(&Value) -> OperatorOutcome + Send + Sync + Copy + 'static {
    move |value: &Value| integer_check(value, semantics)
}

fn integer_check(value: &Value, semantics: IntegerSemantics) -> OperatorOutcome {
    let result = match (value, semantics) {
        (Value::Number(n), IntegerSemantics::Strict) => n.is_finite() && n.fract() == 0.0,
        (Value::Number(n), IntegerSemantics::Legacy) => super::to_integer(*n) != 0.0,
        _ => false,
    };
    OperatorOutcome::computed("is_integer", result)
}

/// Numbers below zero.
#[must_use]
pub fn is_negative(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_negative", value.as_f64().is_some_and(|n| n < 0.0))
}

/// Numbers above zero.
#[must_use]
pub fn is_positive(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_positive", value.as_f64().is_some_and(|n| n > 0.0))
}

/// `>= 0`, so both zeros qualify and `NaN` does not.
#[must_use]
pub fn is_non_negative(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed(
        "is_non_negative",
        value.as_f64().is_some_and(|n| n >= 0.0),
    )
}

/// Only `-0`.
#[must_use]
pub fn is_minus_zero(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed(
        "is_minus_zero",
        value
            .as_f64()
            .is_some_and(|n| n == 0.0 && (1.0 / n) == f64::NEG_INFINITY),
    )
}

/// Only `+0`.
#[must_use]
pub fn is_plus_zero(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed(
        "is_plus_zero",
        value
            .as_f64()
            .is_some_and(|n| n == 0.0 && (1.0 / n) == f64::INFINITY),
    )
}

/// Numbers other than `NaN` and the infinities.
#[must_use]
pub fn is_finite(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_finite", value.as_f64().is_some_and(f64::is_finite))
}

/// Positive or negative infinity.
#[must_use]
pub fn is_infinite(value: &Value) -> OperatorOutcome {
    OperatorOutcome::computed("is_infinite", value.as_f64().is_some_and(f64::is_infinite))
}

/// One catalog predicate under all of its names.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Canonical name, e.g. `"is_number"`.
    pub name: &'static str,
    /// Plural alias, e.g. `"numbers"`.
    pub alias: &'static str,
    /// camelCase spelling of the name, e.g. `"isNumber"`.
    pub camel_name: &'static str,
    /// camelCase spelling of the alias, e.g. `"numbers"`.
    pub camel_alias: &'static str,
    /// The predicate.
    pub check: Check,
}

impl CatalogEntry {
    const fn new(
        name: &'static str,
        alias: &'static str,
        camel_name: &'static str,
        camel_alias: &'static str,
        check: Check,
    ) -> Self {
        Self {
            name,
            alias,
            camel_name,
            camel_alias,
            check,
        }
    }

    /// Returns `true` if `name` is any spelling of this entry.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        name == self.name || name == self.alias || name == self.camel_name || name == self.camel_alias
    }
}

/// Every catalog predicate, in declaration order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::new("is_anything", "anything", "isAnything", "anything", is_anything),
    CatalogEntry::new("is_primitive", "primitives", "isPrimitive", "primitives", is_primitive),
    CatalogEntry::new("is_object", "objects", "isObject", "objects", is_object),
    CatalogEntry::new("is_function", "functions", "isFunction", "functions", is_function),
    CatalogEntry::new("is_number", "numbers", "isNumber", "numbers", is_number),
    CatalogEntry::new("is_string", "strings", "isString", "strings", is_string),
    CatalogEntry::new("is_null", "null", "isNull", "null", is_null),
    CatalogEntry::new("is_undefined", "undefined", "isUndefined", "undefined", is_undefined),
    CatalogEntry::new("is_nullish", "nullish", "isNullish", "nullish", is_nullish),
    CatalogEntry::new("is_falsy", "falsy", "isFalsy", "falsy", is_falsy),
    CatalogEntry::new("is_truthy", "truthy", "isTruthy", "truthy", is_truthy),
    CatalogEntry::new("is_boolean", "booleans", "isBoolean", "booleans", is_boolean),
    CatalogEntry::new("is_integer", "integers", "isInteger", "integers", is_integer),
    CatalogEntry::new("is_negative", "negative_numbers", "isNegative", "negativeNumbers", is_negative),
    CatalogEntry::new("is_positive", "positive_numbers", "isPositive", "positiveNumbers", is_positive),
    CatalogEntry::new(
        "is_non_negative",
        "non_negative_numbers",
        "isNonNegative",
        "nonNegativeNumbers",
        is_non_negative,
    ),
    CatalogEntry::new("is_minus_zero", "minus_zero", "isMinusZero", "minusZero", is_minus_zero),
    CatalogEntry::new("is_plus_zero", "plus_zero", "isPlusZero", "plusZero", is_plus_zero),
    CatalogEntry::new("is_finite", "finite_numbers", "isFinite", "finiteNumbers", is_finite),
    CatalogEntry::new(
        "is_infinite",
        "infinite_numbers",
        "isInfinite",
        "infiniteNumbers",
        is_infinite,
    ),
];

/// Find a catalog predicate by any of its names.
///
/// ```
/// use casematch::predicates::lookup;
/// use casematch::Value;
///
/// let check = lookup("isNumber").unwrap();
/// assert_eq!(check(&Value::from(1)).computed_result(), Some(true));
/// assert!(lookup("numbers").is_some());
/// assert!(lookup("bananas").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Check> {
    CATALOG
        .iter()
        .find(|entry| entry.answers_to(name))
        .map(|entry| entry.check)
}

/// Like [`lookup`], failing with the list of known names.
///
/// # Errors
///
/// Returns [`MatchError::UnknownPredicate`] if no entry answers to `name`.
pub fn lookup_checked(name: &str) -> Result<Check, MatchError> {
    lookup(name).ok_or_else(|| MatchError::UnknownPredicate {
        name: name.to_string(),
        available: names().into_iter().map(str::to_string).collect(),
    })
}

/// Canonical names and aliases of every catalog predicate.
#[must_use]
pub fn names() -> Vec<&'static str> {
    CATALOG
        .iter()
        .flat_map(|entry| [entry.name, entry.alias])
        .collect()
}
