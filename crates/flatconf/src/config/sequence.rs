use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::fragment::ConfigFragment;
use crate::config::types::RuleMap;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid glob pattern {0}: {1}")]
    Glob(String, #[source] globset::Error),
}

/// Ordered fragment list. Later fragments take precedence for the paths they
/// match; the order is fixed at build time and is the precedence contract.
///
/// The sequence is immutable and folding is a pure read, so one sequence can
/// serve any number of concurrent resolutions.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConfigSequence {
    fragments: Vec<ConfigFragment>,
}

impl ConfigSequence {
    pub fn new(fragments: Vec<ConfigFragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[ConfigFragment] {
        &self.fragments
    }

    /// Fold every fragment applicable to `path`, in order.
    ///
    /// Each payload section merges independently: `rules` per rule name with
    /// the later setting replacing the earlier one (options arrays replaced
    /// wholesale), `plugins` as a keyed union, `settings` and
    /// `languageOptions` per top-level key. A later `parserOptions` entry
    /// therefore replaces an earlier one outright.
    pub fn resolve(&self, path: impl AsRef<Path>) -> EffectiveConfig {
        let path = path.as_ref();
        let mut effective = EffectiveConfig::default();
        for fragment in &self.fragments {
            if !fragment.applies_to(path) {
                continue;
            }
            effective.plugins.extend(fragment.plugins.iter().cloned());
            for (name, setting) in &fragment.rules {
                effective.rules.insert(name.clone(), setting.clone());
            }
            for (key, value) in &fragment.settings {
                effective.settings.insert(key.clone(), value.clone());
            }
            for (key, value) in &fragment.language_options {
                effective
                    .language_options
                    .insert(key.clone(), value.clone());
            }
        }
        effective
    }

    /// True when any fragment's exclusion globs match `path`. Ignored paths
    /// are excluded from evaluation entirely.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.fragments
            .iter()
            .any(|fragment| fragment.is_ignore_match(path))
    }
}

/// The per-file merged configuration. An empty result means the path is out
/// of scope for every fragment; that is a value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveConfig {
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub plugins: BTreeSet<String>,
    #[serde(
        rename = "languageOptions",
        skip_serializing_if = "Map::is_empty"
    )]
    pub language_options: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
    #[serde(skip_serializing_if = "RuleMap::is_empty")]
    pub rules: RuleMap,
}

impl EffectiveConfig {
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
            && self.language_options.is_empty()
            && self.settings.is_empty()
            && self.rules.is_empty()
    }
}
