use crate::config::{RuleLevel, RuleMap};

/// The typed-script plugin's recommended set. Base rules superseded by a
/// typed counterpart are switched off alongside.
pub fn recommended() -> RuleMap {
    super::table(RECOMMENDED)
}

/// The stricter tier that needs type information from the project service.
pub fn recommended_requiring_type_checking() -> RuleMap {
    super::table(TYPE_CHECKED)
}

const RECOMMENDED: &[(&str, RuleLevel)] = &[
    ("no-array-constructor", RuleLevel::Off),
    ("no-loss-of-precision", RuleLevel::Off),
    ("no-unused-vars", RuleLevel::Off),
    ("@typescript-eslint/ban-ts-comment", RuleLevel::Error),
    ("@typescript-eslint/no-array-constructor", RuleLevel::Error),
    ("@typescript-eslint/no-duplicate-enum-values", RuleLevel::Error),
    ("@typescript-eslint/no-explicit-any", RuleLevel::Error),
    ("@typescript-eslint/no-extra-non-null-assertion", RuleLevel::Error),
    ("@typescript-eslint/no-loss-of-precision", RuleLevel::Error),
    ("@typescript-eslint/no-misused-new", RuleLevel::Error),
    ("@typescript-eslint/no-namespace", RuleLevel::Error),
    (
        "@typescript-eslint/no-non-null-asserted-optional-chain",
        RuleLevel::Error,
    ),
    ("@typescript-eslint/no-this-alias", RuleLevel::Error),
    (
        "@typescript-eslint/no-unnecessary-type-constraint",
        RuleLevel::Error,
    ),
    (
        "@typescript-eslint/no-unsafe-declaration-merging",
        RuleLevel::Error,
    ),
    ("@typescript-eslint/no-unused-vars", RuleLevel::Error),
    ("@typescript-eslint/no-var-requires", RuleLevel::Error),
    ("@typescript-eslint/prefer-as-const", RuleLevel::Error),
    ("@typescript-eslint/triple-slash-reference", RuleLevel::Error),
];

const TYPE_CHECKED: &[(&str, RuleLevel)] = &[
    ("no-implied-eval", RuleLevel::Off),
    ("require-await", RuleLevel::Off),
    ("@typescript-eslint/await-thenable", RuleLevel::Error),
    ("@typescript-eslint/no-floating-promises", RuleLevel::Error),
    ("@typescript-eslint/no-for-in-array", RuleLevel::Error),
    ("@typescript-eslint/no-implied-eval", RuleLevel::Error),
    ("@typescript-eslint/no-misused-promises", RuleLevel::Error),
    (
        "@typescript-eslint/no-unnecessary-type-assertion",
        RuleLevel::Error,
    ),
    ("@typescript-eslint/no-unsafe-argument", RuleLevel::Error),
    ("@typescript-eslint/no-unsafe-assignment", RuleLevel::Error),
    ("@typescript-eslint/no-unsafe-call", RuleLevel::Error),
    ("@typescript-eslint/no-unsafe-member-access", RuleLevel::Error),
    ("@typescript-eslint/no-unsafe-return", RuleLevel::Error),
    ("@typescript-eslint/require-await", RuleLevel::Error),
    ("@typescript-eslint/restrict-plus-operands", RuleLevel::Error),
    (
        "@typescript-eslint/restrict-template-expressions",
        RuleLevel::Error,
    ),
    ("@typescript-eslint/unbound-method", RuleLevel::Error),
];
