mod compose;
mod config;
mod env;
mod patterns;
mod presets;

pub use compose::build_sequence;
pub use config::{
    ConfigError, ConfigFragment, ConfigSequence, EffectiveConfig, RuleLevel, RuleMap, RuleSetting,
};
pub use env::{Environment, DEVELOPMENT_MODE, MODE_ENV_VAR};
pub use patterns::{FilePattern, FilePatterns, PatternGroup};

// composition pipeline
// - FilePatterns::standard() defines the named file classes
// - Environment::detect() probes the optional toolsets and the runtime mode
// - build_sequence() appends fragments in precedence order, gated on the
//   environment's feature flags
// - ConfigSequence::resolve() folds every fragment matching a path into the
//   effective per-file configuration, later fragments winning per key
