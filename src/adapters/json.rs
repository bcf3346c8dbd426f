// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON configuration format adapter.
//!
//! This module provides the [`JsonFormat`] adapter, which normalizes JSON
//! documents into the canonical configuration tree and renders trees back
//! out as JSON text.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigFormat;

/// JSON format implementation.
///
/// A document must be a JSON object at the top level. Nested objects become
/// nested maps, numbers become integers when they fit in an `i64` and floats
/// otherwise, and strings and booleans carry over as themselves. Arrays and
/// nulls have no place in the tree and are rejected with an error naming
/// their dotted path.
///
/// # Examples
///
/// ```rust
/// use dotcfg::adapters::JsonFormat;
/// use dotcfg::domain::ConfigValue;
/// use dotcfg::ports::ConfigFormat;
///
/// let format = JsonFormat::new();
/// let map = format.parse(r#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(map.get("server.port"), Some(&ConfigValue::Integer(8080)));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFormat;

impl JsonFormat {
    /// Creates a new JSON format adapter.
    pub fn new() -> Self {
        JsonFormat
    }

    fn child_path(prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    }

    /// Normalizes a parsed JSON object into a configuration tree level.
    fn normalize_object(
        object: serde_json::Map<String, serde_json::Value>,
        prefix: &str,
    ) -> Result<ConfigMap> {
        let mut map = ConfigMap::new();
        for (key, value) in object {
            let path = Self::child_path(prefix, &key);
            map.insert(key, Self::normalize_value(value, &path)?);
        }
        Ok(map)
    }

    fn normalize_value(value: serde_json::Value, path: &str) -> Result<ConfigValue> {
        match value {
            serde_json::Value::Object(object) => {
                Ok(ConfigValue::Map(Self::normalize_object(object, path)?))
            }
            serde_json::Value::Number(number) => Self::normalize_number(&number, path),
            serde_json::Value::Bool(flag) => Ok(ConfigValue::Boolean(flag)),
            serde_json::Value::String(text) => Ok(ConfigValue::String(text)),
            serde_json::Value::Array(_) => Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "sequence",
            }),
            serde_json::Value::Null => Err(ConfigError::UnsupportedValue {
                key: path.to_string(),
                found: "null",
            }),
        }
    }

    /// Integers keep their kind when they fit in an `i64`; everything else
    /// representable becomes a float.
    fn normalize_number(number: &serde_json::Number, path: &str) -> Result<ConfigValue> {
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
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn parse(&self, text: &str) -> Result<ConfigMap> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(text).map_err(|e| ConfigError::parse(self.name(), e))?;
        Self::normalize_object(object, "")
    }

    fn serialize(&self, map: &ConfigMap) -> Result<String> {
        serde_json::to_string(map).map_err(|e| ConfigError::serialize(self.name(), e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_simple() {
        let format = JsonFormat::new();
        let map = format.parse(r#"{"key": "value"}"#).unwrap();
        assert_eq!(
            map.get("key"),
            Some(&ConfigValue::String("value".to_string()))
        );
    }

    #[test]
    fn test_json_format_nested() {
        let format = JsonFormat::new();
        let map = format
            .parse(r#"{"database": {"host": "localhost", "port": 5432}}"#)
            .unwrap();
        assert_eq!(
            map.get("database.host"),
            Some(&ConfigValue::String("localhost".to_string()))
        );
        assert_eq!(map.get("database.port"), Some(&ConfigValue::Integer(5432)));
    }

    #[test]
    fn test_json_format_scalar_kinds_preserved() {
        let format = JsonFormat::new();
        let map = format
            .parse(r#"{"num": 12345, "f": 1.2345, "str": "some string", "b": true}"#)
            .unwrap();
        assert_eq!(map.get("num"), Some(&ConfigValue::Integer(12345)));
        assert_eq!(map.get("f"), Some(&ConfigValue::Float(1.2345)));
        assert_eq!(
            map.get("str"),
            Some(&ConfigValue::String("some string".to_string()))
        );
        assert_eq!(map.get("b"), Some(&ConfigValue::Boolean(true)));
    }

    #[test]
    fn test_json_format_negative_and_zero() {
        let format = JsonFormat::new();
        let map = format.parse(r#"{"neg": -42, "zero": 0}"#).unwrap();
        assert_eq!(map.get("neg"), Some(&ConfigValue::Integer(-42)));
        assert_eq!(map.get("zero"), Some(&ConfigValue::Integer(0)));
    }

    #[test]
    fn test_json_format_large_integer_becomes_float() {
        let format = JsonFormat::new();
        // One past i64::MAX only fits the float representation.
        let map = format.parse(r#"{"big": 9223372036854775808}"#).unwrap();
        assert!(matches!(map.get("big"), Some(&ConfigValue::Float(_))));
    }

    #[test]
    fn test_json_format_invalid_text() {
        let format = JsonFormat::new();
        let result = format.parse("{not json");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_json_format_top_level_must_be_object() {
        let format = JsonFormat::new();
        assert!(format.parse("42").is_err());
        assert!(format.parse(r#"["a", "b"]"#).is_err());
        assert!(format.parse("").is_err());
    }

    #[test]
    fn test_json_format_rejects_arrays_with_path() {
        let format = JsonFormat::new();
        let err = format
            .parse(r#"{"log": {"targets": ["stdout"]}}"#)
            .unwrap_err();
        match err {
            ConfigError::UnsupportedValue { key, found } => {
                assert_eq!(key, "log.targets");
                assert_eq!(found, "sequence");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_format_rejects_null_with_path() {
        let format = JsonFormat::new();
        let err = format.parse(r#"{"log": {"file": null}}"#).unwrap_err();
        match err {
            ConfigError::UnsupportedValue { key, found } => {
                assert_eq!(key, "log.file");
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_format_empty_object() {
        let format = JsonFormat::new();
        let map = format.parse("{}").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_json_format_empty_string_key() {
        let format = JsonFormat::new();
        // An empty object key is valid JSON and lands in the tree as an
        // ordinary flat entry.
        let map = format.parse(r#"{"": 1}"#).unwrap();
        assert!(map.contains_key(""));
        assert_eq!(map.get(""), Some(&ConfigValue::Integer(1)));
    }

    #[test]
    fn test_json_format_serialize_round_trip() {
        let format = JsonFormat::new();
        let original = format
            .parse(r#"{"num": 12345, "nested": {"value": 1, "b": false}}"#)
            .unwrap();
        let text = format.serialize(&original).unwrap();
        let reparsed = format.parse(&text).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_json_format_float_precision_is_exact() {
        let format = JsonFormat::new();
        // Long fractions must parse to the nearest f64 and survive a
        // serialize/parse cycle bit-identical.
        let map = format
            .parse(r#"{"offset": -216710872.85159254, "tiny": 2.2250738585072014e-308}"#)
            .unwrap();
        assert_eq!(
            map.get("offset"),
            Some(&ConfigValue::Float(-216710872.85159254))
        );
        assert_eq!(map.get("tiny"), Some(&ConfigValue::Float(f64::MIN_POSITIVE)));
        let text = format.serialize(&map).unwrap();
        let reparsed = format.parse(&text).unwrap();
        assert_eq!(reparsed, map);
    }

    #[test]
    fn test_json_format_supported_extensions() {
        let format = JsonFormat::new();
        assert_eq!(format.supported_extensions(), &["json"]);
    }

    #[test]
    fn test_json_format_default() {
        let format = JsonFormat::default();
        assert_eq!(format.name(), "JSON");
    }
}
