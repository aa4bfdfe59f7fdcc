use serde_json::json;

use crate::config::{RuleLevel, RuleMap, RuleSetting};

/// Framework-agnostic assertion conventions.
pub fn dom() -> RuleMap {
    super::all_error(DOM)
}

/// The component-framework flavor: the DOM set plus render-oriented rules.
pub fn react() -> RuleMap {
    let mut rules = dom();
    rules.extend(super::all_error(REACT_EXTRAS));
    rules.insert(
        "testing-library/no-debugging-utils".to_string(),
        RuleSetting::warn(),
    );
    rules.insert(
        "testing-library/no-dom-import".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!("react")]),
    );
    rules
}

const DOM: &[&str] = &[
    "testing-library/await-async-events",
    "testing-library/await-async-queries",
    "testing-library/await-async-utils",
    "testing-library/no-await-sync-events",
    "testing-library/no-await-sync-queries",
    "testing-library/no-global-regexp-flag-in-query",
    "testing-library/no-promise-in-fire-event",
    "testing-library/no-wait-for-multiple-assertions",
    "testing-library/no-wait-for-side-effects",
    "testing-library/no-wait-for-snapshot",
    "testing-library/prefer-find-by",
    "testing-library/prefer-presence-queries",
    "testing-library/prefer-query-by-disappearance",
    "testing-library/prefer-screen-queries",
];

const REACT_EXTRAS: &[&str] = &[
    "testing-library/no-container",
    "testing-library/no-render-in-lifecycle",
    "testing-library/no-unnecessary-act",
    "testing-library/render-result-naming-convention",
];
