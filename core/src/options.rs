//! Evaluation options.
//!
//! Defaults reproduce the long-standing behavior of the engine: dates compare
//! by identity and function outcomes may chain up to [`MAX_CALL_DEPTH`] calls.

use crate::{Date, MAX_CALL_DEPTH};
use std::sync::Arc;

/// Options carried by an [`Evaluator`](crate::Evaluator).
///
/// # Example
///
/// ```
/// use casematch::{DateEquality, MatchOptions};
///
/// let options = MatchOptions::default()
///     .with_date_equality(DateEquality::Instant)
///     .with_max_call_depth(16);
/// assert_eq!(options.max_call_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchOptions {
    /// How a date outcome compares against a date value.
    pub date_equality: DateEquality,

    /// Maximum number of chained function outcomes on one evaluation path;
    /// a longer chain folds to `Unknown`. Structural nesting is not limited.
    pub max_call_depth: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            date_equality: DateEquality::Identity,
            max_call_depth: MAX_CALL_DEPTH,
        }
    }
}

impl MatchOptions {
    /// Set the date comparison mode.
    #[must_use]
    pub fn with_date_equality(mut self, date_equality: DateEquality) -> Self {
        self.date_equality = date_equality;
        self
    }

    /// Set the maximum function outcome chain length.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

/// Date comparison mode.
///
/// `Identity` is the default: two separately built dates never match, even
/// when they denote the same instant. `Instant` compares the points in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DateEquality {
    /// Same allocation (`Arc::ptr_eq`).
    #[default]
    Identity,
    /// Same point in time.
    Instant,
}

impl DateEquality {
    /// Compare two dates under this mode.
    #[must_use]
    pub fn compare(self, value: &Arc<Date>, outcome: &Arc<Date>) -> bool {
        match self {
            Self::Identity => Arc::ptr_eq(value, outcome),
            Self::Instant => value == outcome,
        }
    }
}

/// Which values [`is_integer_with`](crate::predicates::is_integer_with) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntegerSemantics {
    /// Finite numbers with no fractional part, zero included.
    #[default]
    Strict,
    /// Numbers whose [`to_integer`](crate::predicates::to_integer) is non-zero.
    ///
    /// Rejects `0` and `-0`, and accepts fractional numbers such as `2.5`.
    Legacy,
}
