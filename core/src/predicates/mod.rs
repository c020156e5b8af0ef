//! Predicate library — ready-made outcomes and combinators
//!
//! Three families:
//!
//! - **Catalog** — nullary predicates (`is_number`, `is_nullish`, ...) that
//!   inspect the value and return a computed operator node. Each has a plural
//!   alias (`numbers`, `nullish`, ...) and can be looked up by name.
//! - **Composites** — [`some`] and [`all`] fold the verdicts of several
//!   outcomes with OR and AND. Every sub-outcome is evaluated.
//! - **Builders** — [`gt`], [`starts_with`], [`regex`], [`instance_of`], ...
//!   take an operand and return a function outcome.
//!
//! # Example
//!
//! ```
//! use casematch::predicates::{all, check, gt, is_integer, lt, some, strings};
//! use casematch::{is_match, TriState, Value};
//!
//! let small_int = all([check(is_integer), gt(0), lt(10)]);
//! assert_eq!(is_match(&Value::from(3), &small_int), TriState::True);
//! assert_eq!(is_match(&Value::from(3.5), &small_int), TriState::False);
//!
//! let text_or_small = some([check(strings), small_int]);
//! assert_eq!(is_match(&Value::from("x"), &text_or_small), TriState::True);
//! ```

mod builders;
mod catalog;

use crate::operator::{ALL, SOME};
use crate::{OperatorOutcome, Outcome, Value};

pub use builders::{
    ends_with, from_regex, gt, gte, includes_string, includes_string_from, instance_of, lt, lte,
    regex, starts_with, type_of, Comparable,
};
pub use catalog::{
    is_anything, is_boolean, is_falsy, is_finite, is_function, is_infinite, is_integer,
    is_integer_with, is_minus_zero, is_negative, is_non_negative, is_null, is_nullish, is_number,
    is_object, is_plus_zero, is_positive, is_primitive, is_string, is_truthy, is_undefined,
    lookup, lookup_checked, names, CatalogEntry, Check, CATALOG,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Aliases
// ═══════════════════════════════════════════════════════════════════════════════

/// Alias of [`is_anything`].
pub use catalog::is_anything as anything;
/// Alias of [`is_boolean`].
pub use catalog::is_boolean as booleans;
/// Alias of [`is_falsy`].
pub use catalog::is_falsy as falsy;
/// Alias of [`is_finite`].
pub use catalog::is_finite as finite_numbers;
/// Alias of [`is_function`].
pub use catalog::is_function as functions;
/// Alias of [`is_infinite`].
pub use catalog::is_infinite as infinite_numbers;
/// Alias of [`is_integer`].
pub use catalog::is_integer as integers;
/// Alias of [`is_minus_zero`].
pub use catalog::is_minus_zero as minus_zero;
/// Alias of [`is_negative`].
pub use catalog::is_negative as negative_numbers;
/// Alias of [`is_non_negative`].
pub use catalog::is_non_negative as non_negative_numbers;
/// Alias of [`is_null`].
pub use catalog::is_null as null;
/// Alias of [`is_nullish`].
pub use catalog::is_nullish as nullish;
/// Alias of [`is_number`].
pub use catalog::is_number as numbers;
/// Alias of [`is_object`].
pub use catalog::is_object as objects;
/// Alias of [`is_plus_zero`].
pub use catalog::is_plus_zero as plus_zero;
/// Alias of [`is_positive`].
pub use catalog::is_positive as positive_numbers;
/// Alias of [`is_primitive`].
pub use catalog::is_primitive as primitives;
/// Alias of [`is_string`].
pub use catalog::is_string as strings;
/// Alias of [`is_truthy`].
pub use catalog::is_truthy as truthy;
/// Alias of [`is_undefined`].
pub use catalog::is_undefined as undefined;

// ═══════════════════════════════════════════════════════════════════════════════
// Combinators
// ═══════════════════════════════════════════════════════════════════════════════

/// Use a catalog predicate (or any operator-producing function) as an outcome.
///
/// Equivalent to [`Outcome::function`].
pub fn check<F>(predicate: F) -> Outcome
where
    F: Fn(&Value) -> OperatorOutcome + Send + Sync + 'static,
{
    Outcome::function(predicate)
}

/// Matches if any outcome matches (OR fold, no short-circuit).
///
/// An empty list folds to `Unknown`.
pub fn some<I, O>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = O>,
    O: Into<Outcome>,
{
    OperatorOutcome::recursive(SOME, outcomes).into()
}

/// Matches if every outcome matches (AND fold, no short-circuit).
///
/// An empty list folds to `Unknown`.
pub fn all<I, O>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = O>,
    O: Into<Outcome>,
{
    OperatorOutcome::recursive(ALL, outcomes).into()
}

/// Truncate toward zero, mapping `NaN` to `0`.
///
/// Zeros keep their sign and infinities pass through unchanged.
///
/// ```
/// use casematch::predicates::to_integer;
///
/// assert_eq!(to_integer(f64::NAN), 0.0);
/// assert_eq!(to_integer(-2.7), -2.0);
/// assert!(to_integer(-0.0).is_sign_negative());
/// assert_eq!(to_integer(f64::INFINITY), f64::INFINITY);
/// ```
#[must_use]
pub fn to_integer(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else if x == 0.0 || x.is_infinite() {
        x
    } else {
        x.signum() * x.abs().floor()
    }
}
