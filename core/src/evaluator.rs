//! `Evaluator` — Recursive evaluation of a value against an outcome
//!
//! Dispatch order for an outcome:
//!
//! 1. `Function` — invoke with the value; a `Bool` return is the verdict,
//!    anything else is evaluated against the same value
//! 2. `Operator` — comparable, computed or recursive node
//! 3. Literals — strict equality
//! 4. `Date`, `Array`, `Object` — structural comparison
//! 5. `Other` — `Unknown`
//!
//! Structural and recursive comparisons fold their sub-verdicts with
//! [`TriState::fold`], evaluating every entry.

use crate::trace::OutcomeTrace;
use crate::{Combine, MatchOptions, OperatorKind, OperatorOutcome, Outcome, TriState, Value};

/// Stand-in for elements past the end of an array value.
static UNDEFINED: Value = Value::Undefined;

/// Evaluates values against outcomes under a set of [`MatchOptions`].
///
/// Evaluation never fails. Structural nesting is unbounded; only a chain of
/// function outcomes returning further outcomes is capped, at
/// [`MatchOptions::max_call_depth`] calls along one path, past which the
/// chain yields `Unknown`. Use [`Outcome::validate`] to reject over-deep
/// patterns up front.
///
/// # Example
///
/// ```
/// use casematch::{DateEquality, Evaluator, MatchOptions, Outcome, TriState, Value};
/// use chrono::TimeZone;
///
/// let instant = chrono::Utc.timestamp_opt(1_700_000_000, 0).unwrap();
/// let value = Value::date(instant);
/// let pattern = Outcome::date(instant);
///
/// // Separately built dates are different identities.
/// assert_eq!(Evaluator::default().is_match(&value, &pattern), TriState::False);
///
/// let by_instant = Evaluator::new(MatchOptions::default().with_date_equality(DateEquality::Instant));
/// assert_eq!(by_instant.is_match(&value, &pattern), TriState::True);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: MatchOptions,
}

impl Evaluator {
    /// Create an evaluator with the given options.
    #[must_use]
    pub const fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Evaluate `value` against `outcome`.
    #[must_use]
    pub fn is_match(&self, value: &Value, outcome: &Outcome) -> TriState {
        self.eval(value, outcome, 0)
    }

    /// Evaluate `value` against `outcome`, recording the decision path.
    ///
    /// The trace's verdict always equals [`Evaluator::is_match`].
    #[must_use]
    pub fn is_match_with_trace(&self, value: &Value, outcome: &Outcome) -> OutcomeTrace {
        self.eval_traced(value, outcome, 0)
    }

    /// `calls` counts function outcomes on the current path that returned
    /// another outcome.
    fn eval(&self, value: &Value, outcome: &Outcome, calls: usize) -> TriState {
        match outcome {
            Outcome::Function(f) => match f(value) {
                Outcome::Bool(b) => TriState::from(b),
                next if self.call_limit_reached(calls, &next) => TriState::Unknown,
                next => self.eval(value, &next, calls + 1),
            },
            Outcome::Operator(op) => self.eval_operator(value, op, calls),
            Outcome::Undefined => TriState::from(value.is_undefined()),
            Outcome::Bool(b) => TriState::from(matches!(value, Value::Bool(v) if v == b)),
            Outcome::Number(n) => TriState::from(matches!(value, Value::Number(v) if v == n)),
            Outcome::String(s) => TriState::from(matches!(value, Value::String(v) if v == s)),
            Outcome::Date(d) => match value {
                Value::Date(v) => TriState::from(self.options.date_equality.compare(v, d)),
                _ => TriState::Unknown,
            },
            Outcome::Array(items) => match value {
                Value::Array(values) => TriState::fold(
                    items.iter().enumerate().map(|(i, item)| {
                        self.eval(values.get(i).unwrap_or(&UNDEFINED), item, calls)
                    }),
                    Combine::And,
                ),
                _ => TriState::fold(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| self.eval(&value.get(&i.to_string()), item, calls)),
                    Combine::And,
                ),
            },
            Outcome::Object(fields) => TriState::fold(
                fields
                    .iter()
                    .map(|(key, field)| self.eval(&value.get(key), field, calls)),
                Combine::And,
            ),
            Outcome::Other(other) => {
                tracing::trace!(outcome = other.type_name(), "outcome has no comparison rule");
                TriState::Unknown
            }
        }
    }

    fn eval_operator(&self, value: &Value, op: &OperatorOutcome, calls: usize) -> TriState {
        match op.kind() {
            OperatorKind::Comparable(result) => TriState::from(value.strict_equals(result)),
            OperatorKind::Computed(result) => TriState::from(*result),
            OperatorKind::Recursive(outcomes) => TriState::fold(
                outcomes.iter().map(|o| self.eval(value, o, calls)),
                op.combine(),
            ),
        }
    }

    fn call_limit_reached(&self, calls: usize, next: &Outcome) -> bool {
        let reached = calls >= self.options.max_call_depth;
        if reached {
            tracing::warn!(
                max_call_depth = self.options.max_call_depth,
                returned = next.kind_name(),
                "function outcome chain exceeds max call depth, treating as unknown"
            );
        }
        reached
    }

    fn eval_traced(&self, value: &Value, outcome: &Outcome, calls: usize) -> OutcomeTrace {
        match outcome {
            Outcome::Function(f) => match f(value) {
                Outcome::Bool(b) => OutcomeTrace::Function {
                    verdict: TriState::from(b),
                    returned: None,
                },
                next if self.call_limit_reached(calls, &next) => OutcomeTrace::Function {
                    verdict: TriState::Unknown,
                    returned: Some(Box::new(OutcomeTrace::DepthExceeded {
                        max: self.options.max_call_depth,
                    })),
                },
                next => {
                    let returned = self.eval_traced(value, &next, calls + 1);
                    OutcomeTrace::Function {
                        verdict: returned.verdict(),
                        returned: Some(Box::new(returned)),
                    }
                }
            },
            Outcome::Operator(op) => {
                let children: Vec<OutcomeTrace> = match op.kind() {
                    OperatorKind::Recursive(outcomes) => outcomes
                        .iter()
                        .map(|o| self.eval_traced(value, o, calls))
                        .collect(),
                    _ => Vec::new(),
                };
                let verdict = match op.kind() {
                    OperatorKind::Recursive(_) => {
                        TriState::fold(children.iter().map(OutcomeTrace::verdict), op.combine())
                    }
                    _ => self.eval_operator(value, op, calls),
                };
                OutcomeTrace::Operator {
                    verdict,
                    op: op.op().to_string(),
                    children,
                }
            }
            Outcome::Undefined | Outcome::Bool(_) | Outcome::Number(_) | Outcome::String(_) => {
                OutcomeTrace::Literal {
                    verdict: self.eval(value, outcome, calls),
                    value: format!("{value:?}"),
                    outcome: format!("{outcome:?}"),
                }
            }
            Outcome::Date(_) if matches!(value, Value::Date(_)) => OutcomeTrace::Literal {
                verdict: self.eval(value, outcome, calls),
                value: format!("{value:?}"),
                outcome: format!("{outcome:?}"),
            },
            Outcome::Date(_) => OutcomeTrace::Structural {
                verdict: TriState::Unknown,
                kind: "date",
                entries: Vec::new(),
            },
            Outcome::Array(items) => {
                let entries: Vec<(String, OutcomeTrace)> = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let trace = match value {
                            Value::Array(values) => self.eval_traced(
                                values.get(i).unwrap_or(&UNDEFINED),
                                item,
                                calls,
                            ),
                            _ => self.eval_traced(&value.get(&i.to_string()), item, calls),
                        };
                        (i.to_string(), trace)
                    })
                    .collect();
                structural("array", entries)
            }
            Outcome::Object(fields) => {
                let entries: Vec<(String, OutcomeTrace)> = fields
                    .iter()
                    .map(|(key, field)| {
                        (key.clone(), self.eval_traced(&value.get(key), field, calls))
                    })
                    .collect();
                structural("object", entries)
            }
            Outcome::Other(_) => OutcomeTrace::Unsupported {
                outcome: format!("{outcome:?}"),
            },
        }
    }
}

fn structural(kind: &'static str, entries: Vec<(String, OutcomeTrace)>) -> OutcomeTrace {
    let verdict = TriState::fold(entries.iter().map(|(_, t)| t.verdict()), Combine::And);
    OutcomeTrace::Structural {
        verdict,
        kind,
        entries,
    }
}

/// Evaluate `value` against `outcome` with default options.
///
/// # Example
///
/// ```
/// use casematch::{is_match, Outcome, TriState, Value};
///
/// assert_eq!(is_match(&Value::from(1), &Outcome::from(1)), TriState::True);
/// assert_eq!(is_match(&Value::from("1"), &Outcome::from(1)), TriState::False);
///
/// // Empty patterns carry no verdict.
/// let empty = Outcome::object(Vec::<(String, Outcome)>::new());
/// assert_eq!(is_match(&Value::from(1), &empty), TriState::Unknown);
/// ```
#[must_use]
pub fn is_match(value: &Value, outcome: &Outcome) -> TriState {
    Evaluator::default().is_match(value, outcome)
}

/// Evaluate with default options, recording the decision path.
#[must_use]
pub fn is_match_with_trace(value: &Value, outcome: &Outcome) -> OutcomeTrace {
    Evaluator::default().is_match_with_trace(value, outcome)
}
