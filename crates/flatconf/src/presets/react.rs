use crate::config::{RuleLevel, RuleMap};

pub fn recommended() -> RuleMap {
    super::table(RECOMMENDED)
}

pub fn hooks_recommended() -> RuleMap {
    super::table(HOOKS)
}

const RECOMMENDED: &[(&str, RuleLevel)] = &[
    ("react/display-name", RuleLevel::Error),
    ("react/jsx-key", RuleLevel::Error),
    ("react/jsx-no-comment-textnodes", RuleLevel::Error),
    ("react/jsx-no-duplicate-props", RuleLevel::Error),
    ("react/jsx-no-target-blank", RuleLevel::Error),
    ("react/jsx-no-undef", RuleLevel::Error),
    ("react/jsx-uses-react", RuleLevel::Error),
    ("react/jsx-uses-vars", RuleLevel::Error),
    ("react/no-children-prop", RuleLevel::Error),
    ("react/no-danger-with-children", RuleLevel::Error),
    ("react/no-deprecated", RuleLevel::Error),
    ("react/no-direct-mutation-state", RuleLevel::Error),
    ("react/no-find-dom-node", RuleLevel::Error),
    ("react/no-is-mounted", RuleLevel::Error),
    ("react/no-render-return-value", RuleLevel::Error),
    ("react/no-string-refs", RuleLevel::Error),
    ("react/no-unescaped-entities", RuleLevel::Error),
    ("react/no-unknown-property", RuleLevel::Error),
    ("react/no-unsafe", RuleLevel::Off),
    ("react/prop-types", RuleLevel::Error),
    ("react/react-in-jsx-scope", RuleLevel::Error),
    ("react/require-render-return", RuleLevel::Error),
];

const HOOKS: &[(&str, RuleLevel)] = &[
    ("react-hooks/rules-of-hooks", RuleLevel::Error),
    ("react-hooks/exhaustive-deps", RuleLevel::Warn),
];
