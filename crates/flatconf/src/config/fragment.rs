use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::config::sequence::ConfigError;
use crate::config::types::RuleMap;
use crate::patterns::PatternGroup;

/// One scoped bundle of configuration.
///
/// A fragment with no `files` predicate applies to every path. A fragment
/// carrying only `ignores` is a global exclusion entry and contributes no
/// payload.
#[derive(Debug, Clone)]
pub struct ConfigFragment {
    pub(crate) files: Option<PatternGroup>,
    pub(crate) ignores: Vec<String>,
    pub(crate) ignore_set: GlobSet,
    pub(crate) plugins: BTreeSet<String>,
    pub(crate) rules: RuleMap,
    pub(crate) settings: Map<String, Value>,
    pub(crate) language_options: Map<String, Value>,
}

impl Default for ConfigFragment {
    fn default() -> Self {
        Self {
            files: None,
            ignores: Vec::new(),
            ignore_set: GlobSet::empty(),
            plugins: BTreeSet::new(),
            rules: RuleMap::new(),
            settings: Map::new(),
            language_options: Map::new(),
        }
    }
}

impl ConfigFragment {
    /// Fragment applying to every path.
    pub fn universal() -> Self {
        Self::default()
    }

    /// Fragment applying only to paths matching `files`.
    pub fn scoped(files: PatternGroup) -> Self {
        Self {
            files: Some(files),
            ..Self::default()
        }
    }

    /// Global-exclusion fragment. A pattern ending in `/` excludes the whole
    /// directory tree.
    pub fn ignores(patterns: &[&str]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let expanded = if pattern.ends_with('/') {
                format!("{pattern}**")
            } else {
                (*pattern).to_string()
            };
            let glob =
                Glob::new(&expanded).map_err(|err| ConfigError::Glob(expanded.clone(), err))?;
            builder.add(glob);
        }
        let ignore_set = builder
            .build()
            .map_err(|err| ConfigError::Glob("failed to build ignore set".to_string(), err))?;
        Ok(Self {
            ignores: patterns.iter().map(|pattern| pattern.to_string()).collect(),
            ignore_set,
            ..Self::default()
        })
    }

    pub fn with_plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins.insert(name.into());
        self
    }

    pub fn with_rules(mut self, rules: RuleMap) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    pub fn with_language_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.language_options.insert(key.into(), value);
        self
    }

    pub fn files(&self) -> Option<&PatternGroup> {
        self.files.as_ref()
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignores
    }

    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    pub fn rules(&self) -> &RuleMap {
        &self.rules
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    pub fn language_options(&self) -> &Map<String, Value> {
        &self.language_options
    }

    /// True when the predicate is absent or matches `path`.
    pub fn applies_to(&self, path: impl AsRef<Path>) -> bool {
        match &self.files {
            Some(group) => group.is_match(path),
            None => true,
        }
    }

    pub(crate) fn is_ignore_match(&self, path: &Path) -> bool {
        self.ignore_set.is_match(path)
    }
}

impl Serialize for ConfigFragment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(files) = &self.files {
            map.serialize_entry("files", files.patterns())?;
        }
        if !self.ignores.is_empty() {
            map.serialize_entry("ignores", &self.ignores)?;
        }
        if !self.plugins.is_empty() {
            map.serialize_entry("plugins", &self.plugins)?;
        }
        if !self.language_options.is_empty() {
            map.serialize_entry("languageOptions", &self.language_options)?;
        }
        if !self.settings.is_empty() {
            map.serialize_entry("settings", &self.settings)?;
        }
        if !self.rules.is_empty() {
            map.serialize_entry("rules", &self.rules)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RuleSetting;
    use crate::patterns::{FilePattern, PatternGroup};
    use serde_json::json;

    #[test]
    fn universal_fragment_applies_everywhere() {
        let fragment = ConfigFragment::universal();
        assert!(fragment.applies_to("foo.js"));
        assert!(fragment.applies_to("deep/nested/file.html"));
    }

    #[test]
    fn scoped_fragment_applies_only_to_matching_paths() {
        let group = PatternGroup::new("sql", vec![FilePattern::glob("**/*.sql")])
            .expect("pattern group");
        let fragment = ConfigFragment::scoped(group);
        assert!(fragment.applies_to("queries/users.sql"));
        assert!(!fragment.applies_to("queries/users.js"));
    }

    #[test]
    fn directory_ignores_cover_the_whole_tree() {
        let fragment =
            ConfigFragment::ignores(&["dist/**", "**/__snapshots__/"]).expect("ignore fragment");
        assert!(fragment.is_ignore_match(Path::new("dist/app.js")));
        assert!(fragment.is_ignore_match(Path::new("src/__snapshots__/app.test.js.snap")));
        assert!(!fragment.is_ignore_match(Path::new("src/app.js")));
        // serialized form keeps the patterns as written
        assert_eq!(fragment.ignore_patterns()[1], "**/__snapshots__/");
    }

    #[test]
    fn serializes_in_flat_config_shape() {
        let group = PatternGroup::new("jtsx", vec![FilePattern::glob("**/*.[jt]sx")])
            .expect("pattern group");
        let mut rules = RuleMap::new();
        rules.insert("jsx-quotes".to_string(), RuleSetting::error());
        let fragment = ConfigFragment::scoped(group)
            .with_plugin("react")
            .with_rules(rules)
            .with_language_option("parserOptions", json!({"ecmaFeatures": {"jsx": true}}));

        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({
                "files": ["**/*.[jt]sx"],
                "plugins": ["react"],
                "languageOptions": {"parserOptions": {"ecmaFeatures": {"jsx": true}}},
                "rules": {"jsx-quotes": 2},
            })
        );
    }

    #[test]
    fn compound_patterns_serialize_as_pairs() {
        let group = PatternGroup::new(
            "test",
            vec![FilePattern::under("{test,tests}/**", "**/*.js")],
        )
        .expect("pattern group");
        let fragment = ConfigFragment::scoped(group);
        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({"files": [["{test,tests}/**", "**/*.js"]]})
        );
    }
}
