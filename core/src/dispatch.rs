//! `Match` — Lazy dispatcher with first-match-wins semantics
//!
//! A `Match` holds a value getter and an ordered list of [`Case`] clauses.
//! Building it runs nothing; each [`Match::activate`] reads the value once,
//! then walks the cases until one of them evaluates to `True`.

use crate::trace::{CaseStep, DispatchTrace};
use crate::{Evaluator, MatchOptions, Outcome, TriState, Value};
use std::fmt::{self, Debug};

type CaseFn<A> = Box<dyn Fn(&Value) -> (Outcome, A) + Send + Sync>;
type ValueFn = Box<dyn Fn() -> Value + Send + Sync>;

/// A case clause: given the value under test, produce the outcome it must
/// match and the action selected when it does.
///
/// The clause itself is only invoked when the dispatcher reaches it.
pub struct Case<A> {
    when: CaseFn<A>,
}

impl<A> Case<A> {
    /// Create a case from a clause.
    pub fn new<F, O>(when: F) -> Self
    where
        F: Fn(&Value) -> (O, A) + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self {
            when: Box::new(move |value| {
                let (outcome, action) = when(value);
                (outcome.into(), action)
            }),
        }
    }

    /// Invoke the clause.
    pub fn resolve(&self, value: &Value) -> (Outcome, A) {
        (self.when)(value)
    }

    /// Invoke the clause and evaluate its outcome with `evaluator`.
    pub fn evaluate(&self, evaluator: &Evaluator, value: &Value) -> (TriState, A) {
        let (outcome, action) = self.resolve(value);
        (evaluator.is_match(value, &outcome), action)
    }
}

impl<A> Debug for Case<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Case")
    }
}

/// Lazy case dispatcher.
///
/// # INV: First-match-wins
///
/// Cases are evaluated in registration order. The first case whose outcome
/// evaluates to [`TriState::True`] terminates the activation; later clauses
/// are never invoked. `False` and `Unknown` both fall through.
///
/// # INV: One read per activation
///
/// The getter runs exactly once per [`Match::activate`], and never at
/// construction. Nothing is memoized between activations.
///
/// # Example
///
/// ```
/// use casematch::prelude::*;
///
/// let dispatch = Match::new(|| Value::object([("status", 404)]))
///     .case(|_| (Outcome::object([("status", 200)]), "ok"))
///     .case(|_| (Outcome::object([("status", gte(400))]), "error"));
///
/// assert_eq!(dispatch.activate(), Some("error"));
/// ```
pub struct Match<A> {
    get_value: ValueFn,
    cases: Vec<Case<A>>,
    evaluator: Evaluator,
}

impl<A> Match<A> {
    /// Create a dispatcher over the values produced by `get_value`.
    pub fn new<F, V>(get_value: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            get_value: Box::new(move || get_value().into()),
            cases: Vec::new(),
            evaluator: Evaluator::default(),
        }
    }

    /// Append a case clause.
    #[must_use]
    pub fn case<F, O>(self, when: F) -> Self
    where
        F: Fn(&Value) -> (O, A) + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        self.with_case(Case::new(when))
    }

    /// Append a prebuilt [`Case`].
    #[must_use]
    pub fn with_case(mut self, case: Case<A>) -> Self {
        self.cases.push(case);
        self
    }

    /// Evaluate cases under `options` instead of the defaults.
    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.evaluator = Evaluator::new(options);
        self
    }

    /// Returns the number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Read the value and return the action of the first matching case.
    ///
    /// Returns `None` when no case evaluates to `True`, including when there
    /// are no cases at all.
    pub fn activate(&self) -> Option<A> {
        let value = (self.get_value)();

        for (index, case) in self.cases.iter().enumerate() {
            let (outcome, action) = case.resolve(&value);
            let verdict = self.evaluator.is_match(&value, &outcome);
            tracing::trace!(index, outcome = outcome.kind_name(), %verdict, "case evaluated");
            if verdict.is_true() {
                tracing::debug!(index, "case selected");
                return Some(action);
            }
        }

        tracing::debug!(cases = self.cases.len(), "no case matched");
        None
    }

    /// Like [`Match::activate`], also recording every evaluated case.
    ///
    /// The trace's `result` always equals what `activate()` returns for the
    /// same value.
    pub fn activate_with_trace(&self) -> DispatchTrace<A> {
        let value = (self.get_value)();
        let mut steps = Vec::new();

        for (index, case) in self.cases.iter().enumerate() {
            let (outcome, action) = case.resolve(&value);
            let outcome_trace = self.evaluator.is_match_with_trace(&value, &outcome);
            let verdict = outcome_trace.verdict();
            steps.push(CaseStep {
                index,
                verdict,
                outcome_trace,
            });
            if verdict.is_true() {
                return DispatchTrace {
                    result: Some(action),
                    value: format!("{value:?}"),
                    steps,
                };
            }
        }

        DispatchTrace {
            result: None,
            value: format!("{value:?}"),
            steps,
        }
    }
}

impl<A> Debug for Match<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("cases_len", &self.cases.len())
            .field("evaluator", &self.evaluator)
            .finish()
    }
}

/// Build a dispatcher from a getter and a list of cases in one call.
///
/// ```
/// use casematch::{match_cases, Case, Outcome, Value};
///
/// let dispatch = match_cases(
///     || Value::from("b"),
///     [
///         Case::new(|_| (Outcome::from("a"), 1)),
///         Case::new(|_| (Outcome::from("b"), 2)),
///     ],
/// );
/// assert_eq!(dispatch.activate(), Some(2));
/// ```
pub fn match_cases<F, V, A, I>(get_value: F, cases: I) -> Match<A>
where
    F: Fn() -> V + Send + Sync + 'static,
    V: Into<Value>,
    I: IntoIterator<Item = Case<A>>,
{
    cases
        .into_iter()
        .fold(Match::new(get_value), Match::with_case)
}
