//! Assembles the ordered fragment sequence from the environment's feature
//! flags. Append order is the precedence contract: later fragments win for
//! the files they match.

use serde_json::{json, Value};

use crate::config::{
    ConfigError, ConfigFragment, ConfigSequence, RuleLevel, RuleMap, RuleSetting,
};
use crate::env::Environment;
use crate::patterns::{FilePatterns, PatternGroup};
use crate::presets;

/// Build and output directories, generated declarations and snapshot trees,
/// excluded from evaluation entirely.
const IGNORED_PATHS: &[&str] = &[
    "build/**",
    "coverage/**",
    "dist/**",
    "node_modules/**",
    "var/**",
    "**/__snapshots__/",
    "**/*.d.ts",
];

/// Compose the full fragment sequence for `env`.
///
/// Identical environments produce identical sequences; composition holds no
/// state between calls.
pub fn build_sequence(env: &Environment) -> Result<ConfigSequence, ConfigError> {
    let patterns = FilePatterns::standard()?;

    let mut fragments = vec![
        ConfigFragment::scoped(patterns.js.clone()),
        ConfigFragment::scoped(patterns.jtsx.clone())
            .with_language_option("parserOptions", json!({"ecmaFeatures": {"jsx": true}})),
        ConfigFragment::universal().with_rules(presets::eslint::recommended()),
    ];

    if env.has_typescript {
        fragments.extend(typescript_fragments(&patterns));
    }
    if env.has_jest {
        fragments.extend(jest_fragments(&patterns));
    }
    if env.has_react {
        fragments.extend(react_fragments(&patterns));
    }
    fragments.push(testing_library_fragment(env.has_react));
    fragments.push(
        ConfigFragment::scoped(patterns.jtsx.clone())
            .with_plugin("jsx-a11y")
            .with_rules(presets::jsx_a11y::recommended()),
    );
    fragments.push(ConfigFragment::universal().with_rules(style_rules()));
    if env.is_development() {
        fragments.push(ConfigFragment::universal().with_rules(development_relaxations()));
    }
    fragments.push(ConfigFragment::ignores(IGNORED_PATHS)?);

    Ok(ConfigSequence::new(fragments))
}

fn typescript_fragments(patterns: &FilePatterns) -> Vec<ConfigFragment> {
    let mut rules = presets::typescript::recommended();
    rules.extend(presets::typescript::recommended_requiring_type_checking());
    // errors under the flat config format
    rules.insert(
        "@typescript-eslint/require-await".to_string(),
        RuleSetting::off(),
    );

    vec![
        ConfigFragment::scoped(patterns.ts.clone())
            .with_language_option("parser", json!("@typescript-eslint/parser"))
            .with_language_option("parserOptions", json!({"projectService": true})),
        ConfigFragment::scoped(patterns.ts.clone())
            .with_plugin("@typescript-eslint")
            .with_rules(rules),
        ConfigFragment::scoped(patterns.ts.clone()).with_rules(typescript_overrides()),
    ]
}

/// Generic rules the typed parser makes redundant, plus the type-safety
/// rules kept at warning severity.
fn typescript_overrides() -> RuleMap {
    let mut rules = RuleMap::new();
    rules.insert("no-undef".to_string(), RuleSetting::off());
    rules.insert("no-redeclare".to_string(), RuleSetting::off());
    rules.insert("no-dupe-class-members".to_string(), RuleSetting::off());
    rules.insert(
        "@typescript-eslint/no-floating-promises".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!({"ignoreVoid": true})]),
    );
    for rule in [
        "no-unsafe-argument",
        "no-unsafe-assignment",
        "no-unsafe-call",
        "no-unsafe-member-access",
        "no-unsafe-return",
    ] {
        rules.insert(format!("@typescript-eslint/{rule}"), RuleSetting::warn());
    }
    rules.insert(
        "@typescript-eslint/restrict-template-expressions".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!({"allowNumber": true})]),
    );
    rules
}

fn jest_fragments(patterns: &FilePatterns) -> Vec<ConfigFragment> {
    vec![
        ConfigFragment::scoped(patterns.test.clone())
            .with_plugin("jest")
            .with_rules(presets::jest::recommended())
            .with_language_option("globals", Value::Object(presets::jest::globals())),
        ConfigFragment::scoped(patterns.test.clone())
            .with_plugin("jest-dom")
            .with_rules(presets::jest_dom::recommended()),
    ]
}

fn react_fragments(patterns: &FilePatterns) -> Vec<ConfigFragment> {
    let mut prop_types_off = RuleMap::new();
    prop_types_off.insert("react/prop-types".to_string(), RuleSetting::off());

    vec![
        ConfigFragment::universal()
            .with_plugin("react")
            .with_rules(presets::react::recommended())
            .with_setting("react", json!({"version": "detect"})),
        ConfigFragment::universal()
            .with_plugin("react-hooks")
            .with_rules(presets::react::hooks_recommended()),
        ConfigFragment::scoped(PatternGroup::concat(
            "test-and-story-files",
            &[&patterns.test, &patterns.story],
        ))
        .with_rules(prop_types_off),
    ]
}

/// Exactly one of the two flavors is appended, keyed on the component
/// framework's presence.
fn testing_library_fragment(has_react: bool) -> ConfigFragment {
    let rules = if has_react {
        presets::testing_library::react()
    } else {
        presets::testing_library::dom()
    };
    ConfigFragment::universal()
        .with_plugin("testing-library")
        .with_rules(rules)
}

fn style_rules() -> RuleMap {
    let mut rules = RuleMap::new();
    rules.insert(
        "comma-dangle".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!("always-multiline")]),
    );
    rules.insert("comma-spacing".to_string(), RuleSetting::error());
    rules.insert("eol-last".to_string(), RuleSetting::error());
    rules.insert("indent".to_string(), RuleSetting::error());
    rules.insert(
        "jsx-quotes".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!("prefer-double")]),
    );
    rules.insert("no-trailing-spaces".to_string(), RuleSetting::error());
    rules.insert(
        "operator-linebreak".to_string(),
        RuleSetting::with_options(RuleLevel::Error, vec![json!("before")]),
    );
    rules.insert(
        "quotes".to_string(),
        RuleSetting::with_options(
            RuleLevel::Error,
            vec![
                json!("single"),
                json!({"avoidEscape": true, "allowTemplateLiterals": true}),
            ],
        ),
    );
    rules.insert(
        "semi".to_string(),
        RuleSetting::with_options(
            RuleLevel::Error,
            vec![
                json!("never"),
                json!({"beforeStatementContinuationChars": "always"}),
            ],
        ),
    );
    rules
}

fn development_relaxations() -> RuleMap {
    let mut rules = RuleMap::new();
    rules.insert("indent".to_string(), RuleSetting::warn());
    rules.insert("no-unused-vars".to_string(), RuleSetting::warn());
    rules.insert("no-unreachable".to_string(), RuleSetting::warn());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Environment {
        Environment::default()
    }

    fn full() -> Environment {
        Environment {
            has_typescript: true,
            has_jest: true,
            has_react: true,
            mode: None,
        }
    }

    fn testing_library_fragments(sequence: &ConfigSequence) -> Vec<&ConfigFragment> {
        sequence
            .fragments()
            .iter()
            .filter(|fragment| fragment.plugins().contains("testing-library"))
            .collect()
    }

    #[test]
    fn bare_environment_has_no_conditional_fragments() {
        let sequence = build_sequence(&bare()).expect("sequence");
        for fragment in sequence.fragments() {
            assert!(!fragment.plugins().contains("@typescript-eslint"));
            assert!(!fragment.plugins().contains("jest"));
            assert!(!fragment.plugins().contains("react"));
            for rule in fragment.rules().keys() {
                assert!(!rule.starts_with("@typescript-eslint/"), "found {rule}");
                assert!(!rule.starts_with("jest/"), "found {rule}");
            }
        }
    }

    #[test]
    fn exactly_one_testing_library_fragment_is_appended() {
        let with_react = build_sequence(&full()).expect("sequence");
        let without_react = build_sequence(&bare()).expect("sequence");

        let react_flavor = testing_library_fragments(&with_react);
        let dom_flavor = testing_library_fragments(&without_react);
        assert_eq!(react_flavor.len(), 1);
        assert_eq!(dom_flavor.len(), 1);
        assert!(react_flavor[0]
            .rules()
            .contains_key("testing-library/no-dom-import"));
        assert!(!dom_flavor[0]
            .rules()
            .contains_key("testing-library/no-dom-import"));
    }

    #[test]
    fn development_relaxation_is_the_last_rule_bearing_fragment() {
        let sequence =
            build_sequence(&bare().with_mode("development")).expect("sequence");
        let last_with_rules = sequence
            .fragments()
            .iter()
            .rev()
            .find(|fragment| !fragment.rules().is_empty())
            .expect("rule-bearing fragment");
        assert_eq!(
            last_with_rules.rules().get("indent"),
            Some(&RuleSetting::warn())
        );
        assert_eq!(
            last_with_rules.rules().get("no-unreachable"),
            Some(&RuleSetting::warn())
        );
        assert_eq!(
            last_with_rules.rules().get("no-unused-vars"),
            Some(&RuleSetting::warn())
        );
    }

    #[test]
    fn production_mode_appends_no_relaxation() {
        let sequence = build_sequence(&bare().with_mode("production")).expect("sequence");
        let relaxed = sequence.fragments().iter().any(|fragment| {
            fragment.rules().get("indent") == Some(&RuleSetting::warn())
        });
        assert!(!relaxed);
    }

    #[test]
    fn ignore_fragment_is_always_present() {
        let sequence = build_sequence(&bare()).expect("sequence");
        let ignores = sequence
            .fragments()
            .iter()
            .find(|fragment| !fragment.ignore_patterns().is_empty())
            .expect("ignore fragment");
        assert_eq!(ignores.ignore_patterns(), IGNORED_PATHS);
    }

    #[test]
    fn sequences_serialize_deterministically() {
        let first = serde_json::to_value(build_sequence(&full()).expect("sequence")).unwrap();
        let second = serde_json::to_value(build_sequence(&full()).expect("sequence")).unwrap();
        assert_eq!(first, second);
    }
}
