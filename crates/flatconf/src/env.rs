use std::env;
use std::fs;
use std::path::Path;

/// Environment variable consulted for the runtime mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Mode value that relaxes a handful of rules to warnings.
pub const DEVELOPMENT_MODE: &str = "development";

/// Feature flags feeding the composer.
///
/// Detection is separated from composition so sequences can be built for
/// synthetic flag combinations without touching the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub has_typescript: bool,
    pub has_jest: bool,
    pub has_react: bool,
    pub mode: Option<String>,
}

impl Environment {
    /// Probe the project at `root` for the optional toolsets and read the
    /// runtime mode. A failed probe counts as "not installed".
    pub fn detect(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            has_typescript: module_exists(root, "typescript"),
            has_jest: module_exists(root, "jest"),
            has_react: module_exists(root, "react"),
            mode: env::var(MODE_ENV_VAR).ok(),
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn is_development(&self) -> bool {
        self.mode.as_deref() == Some(DEVELOPMENT_MODE)
    }
}

/// Look for an installed module the way a Node resolver would: check
/// `node_modules/<name>` in `root` and in each ancestor directory.
fn module_exists(root: &Path, name: &str) -> bool {
    let mut current = root;
    loop {
        let manifest = current.join("node_modules").join(name).join("package.json");
        if fs::metadata(&manifest).is_ok() {
            return true;
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_mode_requires_the_exact_marker() {
        assert!(Environment::default().with_mode("development").is_development());
        assert!(!Environment::default().with_mode("production").is_development());
        assert!(!Environment::default().with_mode("dev").is_development());
        assert!(!Environment::default().is_development());
    }

    #[test]
    fn missing_module_is_absent_not_an_error() {
        assert!(!module_exists(
            Path::new("/nonexistent/flatconf-test-root"),
            "typescript"
        ));
    }
}
