mod fragment;
mod sequence;
mod types;

pub use fragment::ConfigFragment;
pub use sequence::{ConfigError, ConfigSequence, EffectiveConfig};
pub use types::{RuleLevel, RuleMap, RuleSetting};
