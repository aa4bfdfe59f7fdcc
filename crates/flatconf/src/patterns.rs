use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::config::ConfigError;

/// A single file-matching predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePattern {
    /// Plain glob matched against the whole path.
    Glob(String),
    /// Compound predicate: the whole path must match `file`, and `dir` must
    /// match the path starting at some segment boundary. Expresses "anywhere
    /// under one of these directories, with one of these extensions".
    Under { dir: String, file: String },
}

impl FilePattern {
    pub fn glob(pattern: impl Into<String>) -> Self {
        FilePattern::Glob(pattern.into())
    }

    pub fn under(dir: impl Into<String>, file: impl Into<String>) -> Self {
        FilePattern::Under {
            dir: dir.into(),
            file: file.into(),
        }
    }
}

impl Serialize for FilePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FilePattern::Glob(pattern) => serializer.serialize_str(pattern),
            FilePattern::Under { dir, file } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(dir)?;
                seq.serialize_element(file)?;
                seq.end()
            }
        }
    }
}

#[derive(Debug, Clone)]
enum CompiledPattern {
    Glob(GlobMatcher),
    Under { dir: GlobMatcher, file: GlobMatcher },
}

impl CompiledPattern {
    fn is_match(&self, path: &Path) -> bool {
        match self {
            CompiledPattern::Glob(glob) => glob.is_match(path),
            CompiledPattern::Under { dir, file } => {
                file.is_match(path) && suffixes(path).any(|suffix| dir.is_match(&suffix))
            }
        }
    }
}

/// The path itself plus every trailing subpath obtained by stripping leading
/// segments: `a/b/c.js` yields `a/b/c.js`, `b/c.js`, `c.js`.
fn suffixes(path: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    let segments: Vec<_> = path.iter().collect();
    let count = segments.len();
    (0..count).map(move |start| segments[start..].iter().collect())
}

/// A named, reusable disjunction of file patterns, compiled once.
///
/// Matching is a pure predicate; groups are immutable after construction.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    name: String,
    patterns: Vec<FilePattern>,
    compiled: Vec<CompiledPattern>,
}

impl PatternGroup {
    /// Compile `patterns` into a group. A malformed glob fails here, not at
    /// match time.
    pub fn new(
        name: impl Into<String>,
        patterns: Vec<FilePattern>,
    ) -> Result<Self, ConfigError> {
        let compiled = patterns
            .iter()
            .map(compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            patterns,
            compiled,
        })
    }

    /// Merge already compiled groups into one disjunction.
    pub fn concat(name: impl Into<String>, groups: &[&PatternGroup]) -> Self {
        let mut patterns = Vec::new();
        let mut compiled = Vec::new();
        for group in groups {
            patterns.extend(group.patterns.iter().cloned());
            compiled.extend(group.compiled.iter().cloned());
        }
        Self {
            name: name.into(),
            patterns,
            compiled,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> &[FilePattern] {
        &self.patterns
    }

    /// True if the path matches any of the group's constituent patterns.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.compiled.iter().any(|pattern| pattern.is_match(path))
    }
}

fn compile(pattern: &FilePattern) -> Result<CompiledPattern, ConfigError> {
    match pattern {
        FilePattern::Glob(glob) => Ok(CompiledPattern::Glob(compile_glob(glob)?)),
        FilePattern::Under { dir, file } => Ok(CompiledPattern::Under {
            dir: compile_glob(dir)?,
            file: compile_glob(file)?,
        }),
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, ConfigError> {
    let glob = Glob::new(pattern).map_err(|err| ConfigError::Glob(pattern.to_string(), err))?;
    Ok(glob.compile_matcher())
}

const SCRIPT_EXTENSIONS: &str = "{js,jsx,mjs,cjs,ts,tsx,mts,cts}";

/// The named file classes shared by the composed fragments.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    /// Plain script files: `.js`, `.jsx`, `.mjs`, `.cjs`.
    pub js: PatternGroup,
    /// Typed script files: `.ts`, `.tsx`, `.mts`, `.cts`.
    pub ts: PatternGroup,
    /// JSX-bearing files only: `.jsx` or `.tsx`.
    pub jtsx: PatternGroup,
    /// Script files under a test directory, or with `.test.`/`.spec.` in the
    /// base name.
    pub test: PatternGroup,
    /// Script files with `.stories.` in the base name.
    pub story: PatternGroup,
}

impl FilePatterns {
    pub fn standard() -> Result<Self, ConfigError> {
        let any_script = format!("**/*.{SCRIPT_EXTENSIONS}");
        Ok(Self {
            js: PatternGroup::new(
                "js-files",
                vec![FilePattern::glob("**/*.{js,jsx,mjs,cjs}")],
            )?,
            ts: PatternGroup::new(
                "ts-files",
                vec![FilePattern::glob("**/*.{ts,tsx,mts,cts}")],
            )?,
            jtsx: PatternGroup::new("jtsx-files", vec![FilePattern::glob("**/*.[jt]sx")])?,
            test: PatternGroup::new(
                "test-files",
                vec![
                    FilePattern::under("{test,tests}/**", any_script.as_str()),
                    FilePattern::under("**/__tests__/**", any_script.as_str()),
                    FilePattern::glob(format!("**/*.{{test,spec}}.{SCRIPT_EXTENSIONS}")),
                ],
            )?,
            story: PatternGroup::new(
                "story-files",
                vec![FilePattern::glob(format!(
                    "**/*.stories.{SCRIPT_EXTENSIONS}"
                ))],
            )?,
        })
    }
}
