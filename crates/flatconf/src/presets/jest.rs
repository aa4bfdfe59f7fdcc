use serde_json::{Map, Value};

use crate::config::{RuleLevel, RuleMap};

pub fn recommended() -> RuleMap {
    super::table(RECOMMENDED)
}

/// Globals the test framework injects, made visible to scoped files only.
/// `false` marks them read-only.
pub fn globals() -> Map<String, Value> {
    GLOBALS
        .iter()
        .map(|name| ((*name).to_string(), Value::Bool(false)))
        .collect()
}

const RECOMMENDED: &[(&str, RuleLevel)] = &[
    ("jest/expect-expect", RuleLevel::Warn),
    ("jest/no-alias-methods", RuleLevel::Error),
    ("jest/no-commented-out-tests", RuleLevel::Warn),
    ("jest/no-conditional-expect", RuleLevel::Error),
    ("jest/no-deprecated-functions", RuleLevel::Error),
    ("jest/no-disabled-tests", RuleLevel::Warn),
    ("jest/no-done-callback", RuleLevel::Error),
    ("jest/no-export", RuleLevel::Error),
    ("jest/no-focused-tests", RuleLevel::Error),
    ("jest/no-identical-title", RuleLevel::Error),
    ("jest/no-interpolation-in-snapshots", RuleLevel::Error),
    ("jest/no-jasmine-globals", RuleLevel::Error),
    ("jest/no-mocks-import", RuleLevel::Error),
    ("jest/no-standalone-expect", RuleLevel::Error),
    ("jest/no-test-prefixes", RuleLevel::Error),
    ("jest/valid-describe-callback", RuleLevel::Error),
    ("jest/valid-expect", RuleLevel::Error),
    ("jest/valid-expect-in-promise", RuleLevel::Error),
    ("jest/valid-title", RuleLevel::Error),
];

const GLOBALS: &[&str] = &[
    "afterAll",
    "afterEach",
    "beforeAll",
    "beforeEach",
    "describe",
    "expect",
    "fit",
    "it",
    "jasmine",
    "jest",
    "pending",
    "spyOn",
    "test",
    "xdescribe",
    "xit",
    "xtest",
];
