//! casematch-test: Test helpers for conformance testing
//!
//! Provides call-counting spies for observing laziness and a small custom
//! value type for exercising keyed lookup on user-defined values.
//!
//! # Example
//!
//! ```
//! use casematch_test::prelude::*;
//!
//! let spy = CallCounter::new();
//! let dispatch = Match::new(|| Value::from(2))
//!     .with_case(spy.case(Outcome::from(2), "hit"))
//!     .with_case(spy.case(Outcome::from(2), "never"));
//!
//! assert_eq!(dispatch.activate(), Some("hit"));
//! assert_eq!(spy.count(), 1);
//! ```

use casematch::prelude::*;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Shared call counter.
///
/// Clones share the same count, so a counter can be handed to several
/// outcomes or cases and read back once.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Record one call.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// A function outcome that records each evaluation, then defers to `outcome`.
    #[must_use]
    pub fn outcome(&self, outcome: Outcome) -> Outcome {
        let counter = self.clone();
        Outcome::function(move |_: &Value| {
            counter.hit();
            outcome.clone()
        })
    }

    /// A case whose clause records each invocation.
    #[must_use]
    pub fn case<A>(&self, outcome: Outcome, action: A) -> Case<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        let counter = self.clone();
        Case::new(move |_| {
            counter.hit();
            (outcome.clone(), action.clone())
        })
    }
}

/// A user-defined value with two numeric fields.
///
/// `x` and `y` are visible to keyed patterns; every other key is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Wrap a new point as a [`Value`].
    #[must_use]
    pub fn value(x: f64, y: f64) -> Value {
        Value::Custom(Arc::new(Self { x, y }))
    }
}

impl CustomValue for Point {
    fn custom_type_name(&self) -> &'static str {
        "point"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn get(&self, key: &str) -> Value {
        match key {
            "x" => Value::from(self.x),
            "y" => Value::from(self.y),
            _ => Value::Undefined,
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{CallCounter, Point};
    pub use casematch::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use casematch::predicates::instance_of;

    #[test]
    fn test_counter_is_shared_between_clones() {
        let counter = CallCounter::new();
        let clone = counter.clone();
        clone.hit();
        counter.hit();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_counting_outcome_defers() {
        let counter = CallCounter::new();
        let outcome = counter.outcome(Outcome::from("a"));

        assert_eq!(is_match(&Value::from("a"), &outcome), TriState::True);
        assert_eq!(is_match(&Value::from("b"), &outcome), TriState::False);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_counting_outcomes_in_composites() {
        let counter = CallCounter::new();
        let outcome = some([
            counter.outcome(Outcome::from(true)),
            counter.outcome(Outcome::from(1)),
        ]);
        assert_eq!(is_match(&Value::from(1), &outcome), TriState::True);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_point_lookup() {
        let p = Point::value(1.0, 2.0);
        assert_eq!(
            is_match(&p, &Outcome::object([("x", 1), ("y", 2)])),
            TriState::True
        );
        assert_eq!(
            is_match(&p, &Outcome::object([("z", 0)])),
            TriState::False
        );
        assert_eq!(is_match(&p, &instance_of::<Point>()), TriState::True);
    }

    #[test]
    fn test_full_dispatch() {
        let first = CallCounter::new();
        let second = CallCounter::new();
        let third = CallCounter::new();

        let dispatch = Match::new(|| Point::value(0.0, 5.0))
            .with_case(first.case(Outcome::object([("x", 1)]), "right"))
            .with_case(second.case(Outcome::object([("y", gt(0))]), "up"))
            .with_case(third.case(Outcome::object([("y", 5)]), "five"));

        assert_eq!(dispatch.activate(), Some("up"));
        assert_eq!(
            (first.count(), second.count(), third.count()),
            (1, 1, 0)
        );
    }
}
