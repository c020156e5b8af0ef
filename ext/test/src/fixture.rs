//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the casematch dispatcher.
//!
//! A fixture lists cases in order (an outcome description plus an action
//! name) and a set of inputs. Each input is dispatched through the cases and
//! the selected action is compared with `expect`. Inputs may also pin the
//! verdict of every case with `verdicts`, which is how `unknown` is told
//! apart from `false`.

use casematch::predicates::{self, Comparable};
use casematch::prelude::*;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: MatchOptions,
    pub cases: Vec<CaseConfig>,
    pub inputs: Vec<TestInput>,
}

/// One dispatcher case: outcome description and the action it selects
#[derive(Debug, Deserialize)]
pub struct CaseConfig {
    pub outcome: OutcomeConfig,
    pub action: String,
}

/// Outcome description.
/// Uses untagged deserialization - each variant is keyed by its field name.
///
/// Object keys come from a YAML mapping and are evaluated in sorted order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OutcomeConfig {
    Literal { literal: serde_json::Value },
    Undefined { undefined: bool },
    Array { array: Vec<OutcomeConfig> },
    Object { object: BTreeMap<String, OutcomeConfig> },
    AnyOf { some: Vec<OutcomeConfig> },
    AllOf { all: Vec<OutcomeConfig> },
    Check { check: String },
    Gt { gt: serde_json::Value },
    Lt { lt: serde_json::Value },
    Gte { gte: serde_json::Value },
    Lte { lte: serde_json::Value },
    StartsWith { starts_with: String },
    EndsWith { ends_with: String },
    Includes {
        includes: String,
        #[serde(default)]
        position: usize,
    },
    Regex { regex: String },
    TypeOf { type_of: String },
}

/// One input to dispatch
#[derive(Debug, Deserialize)]
pub struct TestInput {
    pub name: String,
    /// Absent means `undefined`; an explicit `null` is `null`.
    #[serde(default, deserialize_with = "present")]
    pub value: Option<serde_json::Value>,
    pub expect: Option<String>,
    /// Expected verdict per case, spelled `true`, `false` or `unknown`.
    #[serde(default)]
    pub verdicts: Option<Vec<VerdictConfig>>,
}

/// A pinned verdict: a YAML boolean, or the string `unknown`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VerdictConfig {
    Known(bool),
    Named(String),
}

impl VerdictConfig {
    /// The verdict this spelling names, if any.
    #[must_use]
    pub fn to_tri_state(&self) -> Option<TriState> {
        match self {
            Self::Known(b) => Some(TriState::from(*b)),
            Self::Named(name) if name == "unknown" => Some(TriState::Unknown),
            Self::Named(_) => None,
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert config to casematch types
// ═══════════════════════════════════════════════════════════════════════════════

impl OutcomeConfig {
    /// Build an outcome from this description.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownPredicate`] for a `check` name outside the
    /// catalog, regex errors for a bad `regex`, and
    /// [`MatchError::InvalidConfig`] for a comparison operand that is neither
    /// a number nor a string.
    pub fn build(&self) -> Result<Outcome, MatchError> {
        Ok(match self {
            Self::Literal { literal } => Outcome::from(Value::from(literal.clone())),
            Self::Undefined { .. } => Outcome::Undefined,
            Self::Array { array } => Outcome::array(
                array
                    .iter()
                    .map(OutcomeConfig::build)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Self::Object { object } => Outcome::object(
                object
                    .iter()
                    .map(|(key, config)| Ok((key.clone(), config.build()?)))
                    .collect::<Result<Vec<_>, MatchError>>()?,
            ),
            Self::AnyOf { some: children } => some(build_all(children)?),
            Self::AllOf { all: children } => all(build_all(children)?),
            Self::Check { check: name } => check(predicates::lookup_checked(name)?),
            Self::Gt { gt: operand } => gt(comparable(operand)?),
            Self::Lt { lt: operand } => lt(comparable(operand)?),
            Self::Gte { gte: operand } => gte(comparable(operand)?),
            Self::Lte { lte: operand } => lte(comparable(operand)?),
            Self::StartsWith { starts_with } => predicates::starts_with(starts_with.as_str()),
            Self::EndsWith { ends_with } => predicates::ends_with(ends_with.as_str()),
            Self::Includes { includes, position } => {
                predicates::includes_string_from(includes.as_str(), *position)
            }
            Self::Regex { regex } => predicates::regex(regex)?,
            Self::TypeOf { type_of } => predicates::type_of(type_of.as_str()),
        })
    }
}

fn build_all(configs: &[OutcomeConfig]) -> Result<Vec<Outcome>, MatchError> {
    configs.iter().map(OutcomeConfig::build).collect()
}

fn comparable(operand: &serde_json::Value) -> Result<Comparable, MatchError> {
    match operand {
        serde_json::Value::Number(n) => n.as_f64().map(Comparable::from).ok_or_else(|| {
            MatchError::InvalidConfig {
                source: format!("comparison operand {n} is not representable"),
            }
        }),
        serde_json::Value::String(s) => Ok(Comparable::from(s.as_str())),
        other => Err(MatchError::InvalidConfig {
            source: format!("comparison operand must be a number or string, got {other}"),
        }),
    }
}

impl TestInput {
    /// The value this input dispatches on.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.value.clone().map_or(Value::Undefined, Value::from)
    }
}

impl Fixture {
    /// Build a dispatcher over `value` from this fixture's cases.
    ///
    /// # Errors
    ///
    /// Returns the first outcome construction error.
    pub fn build(&self, value: Value) -> Result<Match<String>, MatchError> {
        let cases = self
            .cases
            .iter()
            .map(|case| {
                let outcome = case.outcome.build()?;
                let action = case.action.clone();
                Ok(Case::new(move |_| (outcome.clone(), action.clone())))
            })
            .collect::<Result<Vec<_>, MatchError>>()?;

        Ok(match_cases(move || value.clone(), cases).with_options(self.options))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single input
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub expected_verdicts: Option<Vec<Option<TriState>>>,
    pub actual_verdicts: Vec<TriState>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all inputs and return results
    ///
    /// # Errors
    ///
    /// Returns the first outcome construction error.
    pub fn run(&self) -> Result<Vec<CaseResult>, MatchError> {
        let outcomes = self
            .cases
            .iter()
            .map(|case| case.outcome.build())
            .collect::<Result<Vec<_>, _>>()?;
        let evaluator = Evaluator::new(self.options);

        self.inputs
            .iter()
            .map(|input| {
                let value = input.to_value();
                let actual_verdicts: Vec<TriState> = outcomes
                    .iter()
                    .map(|outcome| evaluator.is_match(&value, outcome))
                    .collect();
                let actual = self.build(value)?.activate();

                let expected_verdicts: Option<Vec<Option<TriState>>> = input
                    .verdicts
                    .as_ref()
                    .map(|pinned| pinned.iter().map(VerdictConfig::to_tri_state).collect());
                let verdicts_ok = expected_verdicts.as_ref().map_or(true, |expected| {
                    expected.len() == actual_verdicts.len()
                        && expected
                            .iter()
                            .zip(&actual_verdicts)
                            .all(|(e, a)| *e == Some(*a))
                });

                Ok(CaseResult {
                    case_name: input.name.clone(),
                    passed: actual == input.expect && verdicts_ok,
                    expected: input.expect.clone(),
                    actual,
                    expected_verdicts,
                    actual_verdicts,
                })
            })
            .collect()
    }

    /// Run all inputs and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' input '{}' failed: expected {:?} {:?}, got {:?} {:?}",
                self.name,
                result.case_name,
                result.expected,
                result.expected_verdicts,
                result.actual,
                result.actual_verdicts
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: &str = r#"
name: routes
description: Method and path routing
cases:
  - outcome:
      object:
        method: { literal: GET }
        path: { starts_with: /api }
    action: api
  - outcome: { check: is_anything }
    action: fallback
inputs:
  - name: api request
    value: { method: GET, path: /api/users }
    expect: api
  - name: other request
    value: { method: POST, path: /api/users }
    expect: fallback
"#;

    #[test]
    fn test_parse_and_run() {
        let fixture = Fixture::from_yaml(ROUTES).unwrap();
        assert_eq!(fixture.cases.len(), 2);
        fixture.run_and_assert();
    }

    #[test]
    fn test_absent_value_is_undefined() {
        let input: TestInput = serde_yaml::from_str("name: missing\nexpect: ~").unwrap();
        assert!(input.to_value().is_undefined());

        let input: TestInput = serde_yaml::from_str("name: explicit null\nvalue: ~").unwrap();
        assert!(input.to_value().is_null());
    }

    #[test]
    fn test_unknown_predicate_is_reported() {
        let config: OutcomeConfig = serde_yaml::from_str("check: is_banana").unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, MatchError::UnknownPredicate { ref name, .. } if name == "is_banana"));
    }

    #[test]
    fn test_bad_comparison_operand() {
        let config: OutcomeConfig = serde_yaml::from_str("gt: [1]").unwrap();
        assert!(matches!(
            config.build(),
            Err(MatchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_verdict_mismatch_fails() {
        let yaml = r#"
name: verdicts
description: Pinned verdicts
cases:
  - outcome: { object: {} }
    action: empty
inputs:
  - name: empty pattern
    value: 1
    expect: ~
    verdicts: [false]
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        let results = fixture.run().unwrap();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual_verdicts, vec![TriState::Unknown]);
    }
}
