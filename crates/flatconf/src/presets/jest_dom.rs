use crate::config::RuleMap;

/// DOM-assertion conventions; every entry is an error.
pub fn recommended() -> RuleMap {
    super::all_error(RULES)
}

const RULES: &[&str] = &[
    "jest-dom/prefer-checked",
    "jest-dom/prefer-empty",
    "jest-dom/prefer-enabled-disabled",
    "jest-dom/prefer-focus",
    "jest-dom/prefer-in-document",
    "jest-dom/prefer-required",
    "jest-dom/prefer-to-have-attribute",
    "jest-dom/prefer-to-have-class",
    "jest-dom/prefer-to-have-style",
    "jest-dom/prefer-to-have-text-content",
    "jest-dom/prefer-to-have-value",
];
