use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rule severity, serialized as the numeric levels 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    fn as_number(self) -> u64 {
        match self {
            RuleLevel::Off => 0,
            RuleLevel::Warn => 1,
            RuleLevel::Error => 2,
        }
    }

    /// Accepts the numeric levels and their common string spellings.
    pub fn from_value(value: &Value) -> Option<RuleLevel> {
        match value {
            Value::String(text) => match text.as_str() {
                "off" | "0" => Some(RuleLevel::Off),
                "warn" | "warning" | "1" => Some(RuleLevel::Warn),
                "error" | "2" => Some(RuleLevel::Error),
                _ => None,
            },
            Value::Number(num) => match num.as_i64()? {
                0 => Some(RuleLevel::Off),
                1 => Some(RuleLevel::Warn),
                2 => Some(RuleLevel::Error),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Serialize for RuleLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.as_number())
    }
}

impl<'de> Deserialize<'de> for RuleLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RuleLevel::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid rule level: {value}")))
    }
}

/// A rule's configured level plus its opaque options tail.
///
/// Serialized as the bare level when there are no options, otherwise as
/// `[level, ...options]`. Options are replaced wholesale when a later
/// fragment reconfigures the rule, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    pub level: RuleLevel,
    pub options: Vec<Value>,
}

impl RuleSetting {
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::new(RuleLevel::Off)
    }

    pub fn warn() -> Self {
        Self::new(RuleLevel::Warn)
    }

    pub fn error() -> Self {
        Self::new(RuleLevel::Error)
    }

    pub fn with_options(level: RuleLevel, options: Vec<Value>) -> Self {
        Self { level, options }
    }

    pub fn from_value(value: &Value) -> Option<RuleSetting> {
        match value {
            Value::Array(items) => {
                let (level, options) = items.split_first()?;
                Some(RuleSetting {
                    level: RuleLevel::from_value(level)?,
                    options: options.to_vec(),
                })
            }
            other => RuleLevel::from_value(other).map(RuleSetting::new),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.options.is_empty() {
            self.level.serialize(serializer)
        } else {
            let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
            seq.serialize_element(&self.level)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RuleSetting::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid rule setting: {value}")))
    }
}

pub type RuleMap = BTreeMap<String, RuleSetting>;
