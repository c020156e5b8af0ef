//! Conformance tests that run YAML fixtures against casematch
//!
//! Run with: cargo test -p casematch-test --test conformance --features fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use casematch_test::fixture::{Fixture, OutcomeConfig};
use casematch::MatchError;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixture directory next to this crate's manifest
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    assert!(
        dir.exists(),
        "Fixtures directory does not exist: {}",
        dir.display()
    );

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|e| e == "yaml" || e == "yml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "No fixtures in {}", dir.display());

    for path in paths {
        println!("Running fixture: {}", path.display());

        let yaml = fs::read_to_string(&path).expect("read yaml");

        // Parse potentially multiple fixtures (separated by ---)
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {}", path.display(), e);
        });

        for fixture in fixtures {
            println!("  Running: {}", fixture.name);
            fixture.run_and_assert();
        }
    }
}

#[test]
fn test_literals() {
    run_fixtures_in_dir(&fixtures_dir().join("01_literals"));
}

#[test]
fn test_structural() {
    run_fixtures_in_dir(&fixtures_dir().join("02_structural"));
}

#[test]
fn test_predicates() {
    run_fixtures_in_dir(&fixtures_dir().join("03_predicates"));
}

#[test]
fn test_dispatch() {
    run_fixtures_in_dir(&fixtures_dir().join("04_dispatch"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Construction errors
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_predicate_lists_catalog() {
    let config: OutcomeConfig = serde_yaml::from_str("check: is_even").unwrap();
    match config.build() {
        Err(MatchError::UnknownPredicate { name, available }) => {
            assert_eq!(name, "is_even");
            assert!(available.iter().any(|n| n == "is_integer"));
            assert!(available.iter().any(|n| n == "integers"));
        }
        other => panic!("expected UnknownPredicate, got {other:?}"),
    }
}

#[test]
fn test_invalid_regex() {
    let config: OutcomeConfig = serde_yaml::from_str("regex: \"(unclosed\"").unwrap();
    assert!(matches!(
        config.build(),
        Err(MatchError::InvalidPattern { .. })
    ));
}

#[test]
fn test_fixture_with_bad_case_fails_to_run() {
    let yaml = r#"
name: broken
description: Second case names a missing predicate
cases:
  - outcome: { literal: 1 }
    action: one
  - outcome: { check: nope }
    action: never
inputs:
  - name: one
    value: 1
    expect: one
"#;
    let fixture = Fixture::from_yaml(yaml).unwrap();
    assert!(fixture.run().is_err());
}
