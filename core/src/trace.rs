//! Evaluation trace types for debugging match and dispatch decisions.
//!
//! Trace types mirror the runtime types ([`Outcome`](crate::Outcome),
//! [`Match`](crate::Match)) but capture verdicts instead of inputs. Use
//! [`is_match_with_trace`](crate::is_match_with_trace) or
//! [`Match::activate_with_trace`](crate::Match::activate_with_trace) to see
//! the full decision path.
//!
//! # Two Levels of Trace
//!
//! - [`OutcomeTrace`] — Per-outcome: which sub-patterns produced which verdict?
//! - [`DispatchTrace`] — Per-activation: which cases were tried, which one won?
//!
//! # Example
//!
//! ```
//! use casematch::{is_match_with_trace, Outcome, Value};
//!
//! let value = Value::object([("a", 1), ("b", 2)]);
//! let trace = is_match_with_trace(&value, &Outcome::object([("a", 1), ("b", 3)]));
//! assert!(trace.verdict().is_false());
//! println!("{trace:#?}");
//! ```

use crate::TriState;
use std::fmt;

/// Trace of a single outcome evaluation.
///
/// Mirrors [`Outcome`](crate::Outcome) structure but captures verdicts.
/// Composite nodes record every child, matching the evaluator, which never
/// short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeTrace {
    /// A literal or date comparison.
    Literal {
        /// Verdict of the comparison.
        verdict: TriState,
        /// The value under test (Debug format).
        value: String,
        /// The literal it was compared with (Debug format).
        outcome: String,
    },
    /// A function outcome was invoked.
    Function {
        /// Final verdict.
        verdict: TriState,
        /// Trace of the returned outcome; `None` when it returned a boolean.
        returned: Option<Box<OutcomeTrace>>,
    },
    /// An operator node.
    Operator {
        /// Final verdict.
        verdict: TriState,
        /// Operator name (e.g. `"some"`, `"is_number"`).
        op: String,
        /// Traces of the sub-outcomes of a recursive node, in order.
        children: Vec<OutcomeTrace>,
    },
    /// A positional or keyed structural pattern.
    Structural {
        /// Fold of every entry's verdict.
        verdict: TriState,
        /// `"array"`, `"object"` or `"date"`.
        kind: &'static str,
        /// Index or key paired with that entry's trace.
        entries: Vec<(String, OutcomeTrace)>,
    },
    /// A chain of function outcomes hit the configured call limit.
    DepthExceeded {
        /// The configured limit.
        max: usize,
    },
    /// An outcome with no comparison rule.
    Unsupported {
        /// The outcome (Debug format).
        outcome: String,
    },
}

impl OutcomeTrace {
    /// Get the verdict of this node.
    ///
    /// `DepthExceeded` and `Unsupported` are always `Unknown`.
    #[must_use]
    pub fn verdict(&self) -> TriState {
        match self {
            Self::Literal { verdict, .. }
            | Self::Function { verdict, .. }
            | Self::Operator { verdict, .. }
            | Self::Structural { verdict, .. } => *verdict,
            Self::DepthExceeded { .. } | Self::Unsupported { .. } => TriState::Unknown,
        }
    }

    /// Returns `true` if the verdict is `True`.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.verdict().is_true()
    }
}

/// Trace of a full [`Match`](crate::Match) activation.
///
/// # INV: `result` == `activate()` result
///
/// The `result` field always equals what
/// [`Match::activate()`](crate::Match::activate) would return for the same
/// value.
pub struct DispatchTrace<A> {
    /// The selected action (identical to what `activate()` returns).
    pub result: Option<A>,
    /// The value under test (Debug format).
    pub value: String,
    /// Trace of each case that was evaluated, in order.
    /// Stops after the first match (preserves first-match-wins).
    pub steps: Vec<CaseStep>,
}

impl<A> DispatchTrace<A> {
    /// Index of the case that was selected, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.steps
            .last()
            .filter(|step| step.verdict.is_true())
            .map(|step| step.index)
    }
}

impl<A: fmt::Debug> fmt::Debug for DispatchTrace<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTrace")
            .field("result", &self.result)
            .field("value", &self.value)
            .field("steps", &self.steps)
            .finish()
    }
}

/// One case's evaluation in a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStep {
    /// Index of the case (0-based, in registration order).
    pub index: usize,
    /// Verdict for this case's outcome.
    pub verdict: TriState,
    /// Full outcome evaluation trace.
    pub outcome_trace: OutcomeTrace,
}
