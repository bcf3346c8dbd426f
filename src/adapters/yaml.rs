// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration format adapter.
//!
//! This module provides the [`YamlFormat`] adapter, which normalizes YAML
//! documents into the canonical configuration tree and renders trees back
//! out as YAML text.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigFormat;

/// YAML format implementation.
///
/// A document must be a mapping at the top level; an empty document counts
/// as an empty mapping. Mapping keys may be strings, booleans, or numbers,
/// all of which are coerced to their string spelling, so `8080: x` and
/// `"8080": x` name the same entry. Nested mappings become nested maps and
/// scalars keep their parsed kind, which means a quoted `"42"` stays a
/// string while a bare `42` is an integer. Sequences, nulls, and tagged
/// values are rejected with an error naming their dotted path.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::YamlFormat;
/// use dotcfg::domain::ConfigValue;
/// use dotcfg::ports::ConfigFormat;
///
/// let format = YamlFormat::new();
/// let map = format.parse("database:\n  host: localhost\n").unwrap();
/// assert_eq!(
///     map.get("database.host"),
///     Some(&ConfigValue::String("localhost".to_string()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct YamlFormat;

impl YamlFormat {
    /// Creates a new YAML format adapter.
    pub fn new() -> Self {
        YamlFormat
    }

    fn child_path(prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    }

    /// Coerces a mapping key to its string spelling.
    fn key_string(key: &serde_yaml::Value, path: &str) -> Result<String> {
        match key {
            serde_yaml::Value::String(text) => Ok(text.clone()),
            serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
            serde_yaml::Value::Number(number) => Ok(number.to_string()),
            _ => Err(ConfigError::UnsupportedKey {
                path: path.to_string(),
            }),
        }
    }

    /// Normalizes a parsed YAML mapping into a configuration tree level.
    fn normalize_mapping(mapping: serde_yaml::Mapping, prefix: &str) -> Result<ConfigMap> {
        let mut map = ConfigMap::new();
        for (key, value) in mapping {
            let key = Self::key_string(&key, prefix)?;
            let path = Self::child_path(prefix, &key);
            map.insert(key, Self::normalize_value(value, &path)?);
        }
        Ok(map)
    }

    fn normalize_value(value: serde_yaml::Value, path: &str) -> Result<ConfigValue> {
        match value {
            serde_yaml::Value::Mapping(mapping) => {
                Ok(ConfigValue::Map(Self::normalize_mapping(mapping, path)?))
            }
            serde_yaml::Value::Number(number) => Self::normalize_number(&number, path),
            serde_yaml::Value::Bool(flag) => Ok(ConfigValue::Boolean(flag)),
            serde_yaml::Value::String(text) => Ok(ConfigValue::String(text)),
            serde_yaml::Value::Sequence(_) => Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "sequence",
            }),
            serde_yaml::Value::Null => Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "null",
            }),
            serde_yaml::Value::Tagged(_) => Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "tagged",
            }),
        }
    }

    /// Integers keep their kind when they fit in an `i64`; everything else
    /// representable becomes a float.
    fn normalize_number(number: &serde_yaml::Number, path: &str) -> Result<ConfigValue> {
        if let Some(integer) = number.as_i64() {
            Ok(ConfigValue::Integer(integer))
        } else if let Some(float) = number.as_f64() {
            Ok(ConfigValue::Float(float))
        } else {
            Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "number",
            })
        }
    }

    fn top_level_name(value: &serde_yaml::Value) -> &'static str {
        match value {
            serde_yaml::Value::Sequence(_) => "a sequence",
            serde_yaml::Value::Tagged(_) => "a tagged value",
            _ => "a scalar",
        }
    }
}

impl Default for YamlFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormat for YamlFormat {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn parse(&self, text: &str) -> Result<ConfigMap> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| ConfigError::parse(self.name(), e))?;
        match document {
            // An empty document parses as null; treat it as no keys at all.
            serde_yaml::Value::Null => Ok(ConfigMap::new()),
            serde_yaml::Value::Mapping(mapping) => Self::normalize_mapping(mapping, ""),
            other => Err(ConfigError::Parse {
                format: self.name(),
                source: format!(
                    "expected a mapping at the top level, found {}",
                    Self::top_level_name(&other)
                )
                .into(),
            }),
        }
    }

    fn serialize(&self, map: &ConfigMap) -> Result<String> {
        serde_yaml::to_string(map).map_err(|e| ConfigError::serialize(self.name(), e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
