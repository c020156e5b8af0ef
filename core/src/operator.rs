//! `OperatorOutcome` — Tagged combinator nodes built by the predicate catalog
//!
//! An operator node carries a name (`op`) and one of three evaluation kinds:
//!
//! | Kind | Verdict |
//! |------|---------|
//! | [`OperatorKind::Comparable`] | `value === result` |
//! | [`OperatorKind::Computed`] | the stored boolean, as-is |
//! | [`OperatorKind::Recursive`] | fold of every sub-outcome's verdict |
//!
//! For `Recursive` nodes the name selects the combination: `"some"` is OR,
//! any other name is AND.

use crate::{Combine, Outcome, Value};
use std::borrow::Cow;

/// Name of the OR-combining operator.
pub(crate) const SOME: &str = "some";

/// Name of the AND-combining operator built by [`all`](crate::predicates::all).
pub(crate) const ALL: &str = "all";

/// A combinator node.
///
/// # Example
///
/// ```
/// use casematch::{is_match, OperatorOutcome, Outcome, TriState, Value};
///
/// let node = OperatorOutcome::comparable("is_answer", 42);
/// assert_eq!(is_match(&Value::from(42), &node.into()), TriState::True);
/// ```
#[derive(Debug, Clone)]
pub struct OperatorOutcome {
    op: Cow<'static, str>,
    kind: OperatorKind,
}

/// How an operator node reaches its verdict.
#[derive(Debug, Clone)]
pub enum OperatorKind {
    /// Compare the value under test against this literal with strict equality.
    Comparable(Value),
    /// The verdict was already computed when the node was built.
    Computed(bool),
    /// Evaluate every sub-outcome and fold the verdicts.
    Recursive(Vec<Outcome>),
}

impl OperatorOutcome {
    /// A node that strictly compares the value against `result`.
    pub fn comparable(op: impl Into<Cow<'static, str>>, result: impl Into<Value>) -> Self {
        Self {
            op: op.into(),
            kind: OperatorKind::Comparable(result.into()),
        }
    }

    /// A node whose verdict is `result`.
    pub fn computed(op: impl Into<Cow<'static, str>>, result: bool) -> Self {
        Self {
            op: op.into(),
            kind: OperatorKind::Computed(result),
        }
    }

    /// A node that folds the verdicts of `outcomes`.
    pub fn recursive<I, O>(op: impl Into<Cow<'static, str>>, outcomes: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Outcome>,
    {
        Self {
            op: op.into(),
            kind: OperatorKind::Recursive(outcomes.into_iter().map(Into::into).collect()),
        }
    }

    /// The operator name.
    #[must_use]
    pub fn op(&self) -> &str {
        &self.op
    }

    /// The evaluation kind.
    #[must_use]
    pub fn kind(&self) -> &OperatorKind {
        &self.kind
    }

    /// How a `Recursive` node combines its sub-verdicts.
    #[must_use]
    pub fn combine(&self) -> Combine {
        if self.op == SOME {
            Combine::Or
        } else {
            Combine::And
        }
    }

    /// Returns `true` if this is a `Recursive` node.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        matches!(self.kind, OperatorKind::Recursive(_))
    }

    /// The computed verdict, if this is a `Computed` node.
    #[must_use]
    pub fn computed_result(&self) -> Option<bool> {
        match self.kind {
            OperatorKind::Computed(b) => Some(b),
            _ => None,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match &self.kind {
            OperatorKind::Recursive(outcomes) => {
                1 + outcomes.iter().map(Outcome::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}
