//! Recommended rule tables for the plugins the composed configuration
//! enables. One module per upstream plugin.

pub mod eslint;
pub mod jest;
pub mod jest_dom;
pub mod jsx_a11y;
pub mod react;
pub mod testing_library;
pub mod typescript;

use crate::config::{RuleLevel, RuleMap, RuleSetting};

pub(crate) fn table(entries: &[(&str, RuleLevel)]) -> RuleMap {
    entries
        .iter()
        .map(|(name, level)| ((*name).to_string(), RuleSetting::new(*level)))
        .collect()
}

pub(crate) fn all_error(names: &[&str]) -> RuleMap {
    names
        .iter()
        .map(|name| ((*name).to_string(), RuleSetting::error()))
        .collect()
}
