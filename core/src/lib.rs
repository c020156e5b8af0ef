//! casematch - structural pattern matching and case dispatch over dynamic values
//!
//! A value is tested against declaratively built shapes ("outcomes"), and the
//! first case whose shape matches wins the dispatch.
//!
//! # Architecture
//!
//! - [`Value`] — Dynamic runtime value under test (primitives, dates, arrays,
//!   objects, callables, plus an extensible `Custom` variant)
//! - [`Outcome`] — What a value is compared against: literals, structural
//!   shapes, lazy functions and operator nodes
//! - [`TriState`] — `True | False | Unknown`, the accumulator of every fold
//! - [`Evaluator`] / [`is_match`] — Recursive evaluation of a value against an outcome
//! - [`predicates`] — Catalog of ready-made combinators (`is_number`, `some`, `gt`, `regex`, ...)
//! - [`Match<A>`] — Lazy dispatcher with first-match-wins semantics
//!
//! # Key Design Insights
//!
//! 1. **Unknown is not false**: an empty structural pattern folds to
//!    [`TriState::Unknown`]. Only [`TriState::True`] selects a case.
//!
//! 2. **Shape mismatches never error**: an outcome that cannot be compared
//!    against the value yields `Unknown`. Panics in caller closures propagate.
//!
//! 3. **Lazy dispatch**: building a [`Match`] runs nothing. Each activation
//!    reads the value once and stops at the first matching case.
//!
//! # Example
//!
//! ```
//! use casematch::prelude::*;
//! use casematch::predicates::{gt, is_string};
//!
//! let dispatch: Match<&str> = Match::new(|| Value::from(7))
//!     .case(|_| (Outcome::from(1), "one"))
//!     .case(|_| (check(is_string), "text"))
//!     .case(|_| (gt(5), "big"));
//!
//! assert_eq!(dispatch.activate(), Some("big"));
//!
//! let verdict = is_match(&Value::from(3), &some([lt(0), gt(2)]));
//! assert_eq!(verdict, TriState::True);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod dispatch;
mod evaluator;
mod operator;
mod options;
mod outcome;
mod trace;
mod tri_state;
mod value;

pub mod predicates;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use dispatch::{match_cases, Case, Match};
pub use evaluator::{is_match, is_match_with_trace, Evaluator};
pub use operator::{OperatorKind, OperatorOutcome};
pub use options::{DateEquality, IntegerSemantics, MatchOptions};
pub use outcome::{Outcome, OutcomeFn};
pub use tri_state::{Combine, TriState};
pub use value::{Callable, CustomValue, Date, Value};

// Trace types
pub use trace::{CaseStep, DispatchTrace, OutcomeTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use casematch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::predicates::{all, check, gt, gte, lt, lte, some};
    pub use crate::{
        // Dispatch
        is_match,
        match_cases,
        Case,
        // Values
        CustomValue,
        Date,
        DateEquality,
        DispatchTrace,
        Evaluator,
        // Errors
        MatchError,
        Match,
        MatchOptions,
        // Outcomes
        OperatorOutcome,
        Outcome,
        OutcomeTrace,
        TriState,
        Value,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Suggested maximum nesting depth for [`Outcome::validate`].
///
/// Evaluation itself never limits structural nesting.
pub const MAX_DEPTH: usize = 64;

/// Default cap on chained function outcomes during evaluation.
///
/// A function outcome that returns another outcome is one call; a chain
/// longer than this on a single path folds to [`TriState::Unknown`].
pub const MAX_CALL_DEPTH: usize = 64;

/// Maximum length for regex patterns accepted by [`predicates::regex`].
///
/// Regex compilation is expensive even with the linear-time Rust `regex` crate.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4096;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from outcome construction and validation.
///
/// Evaluation itself never fails: these are raised while building outcomes
/// (a bad regex, an unknown catalog name) or when validating them up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Outcome nesting exceeds the allowed depth.
    DepthExceeded {
        /// Actual depth of the outcome tree.
        depth: usize,
        /// Maximum allowed depth.
        max: usize,
    },
    /// A regex pattern failed to compile.
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying error message.
        source: String,
    },
    /// A regex pattern exceeds [`MAX_REGEX_PATTERN_LENGTH`].
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// A catalog predicate name was not found.
    UnknownPredicate {
        /// The name that was looked up.
        name: String,
        /// Names that ARE in the catalog (for self-correcting error messages).
        available: Vec<String>,
    },
    /// A value or outcome description could not be converted.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthExceeded { depth, max } => {
                write!(
                    f,
                    "outcome nesting depth is {depth}, but maximum allowed is {max}"
                )
            }
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern \"{pattern}\": {source}")
            }
            Self::PatternTooLong { len, max } => {
                write!(f, "pattern length is {len}, but maximum allowed is {max}")
            }
            Self::UnknownPredicate { name, available } => {
                write!(f, "unknown predicate \"{name}\"")?;
                if available.is_empty() {
                    write!(f, " (catalog is empty)")
                } else {
                    write!(f, "; known: {}", available.join(", "))
                }
            }
            Self::InvalidConfig { source } => {
                write!(f, "invalid config: {source}")
            }
        }
    }
}

impl std::error::Error for MatchError {}
