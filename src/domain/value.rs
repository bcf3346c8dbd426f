// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with kind-safe projections.
//!
//! This module defines [`ConfigValue`], the tagged node type stored at every
//! position of the configuration tree, and [`ValueKind`], the label used to
//! report what a node actually holds.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::tree::ConfigMap;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// The runtime kind of a [`ConfigValue`].
///
/// Used in [`ConfigError::KindMismatch`] to report what a typed lookup asked
/// for versus what the tree actually stored.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::{ConfigValue, ValueKind};
///
/// let value = ConfigValue::Boolean(true);
/// assert_eq!(value.kind(), ValueKind::Boolean);
/// assert_eq!(value.kind().to_string(), "boolean");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// 64-bit signed integer leaf
    Integer,
    /// 64-bit floating-point leaf
    Float,
    /// Boolean leaf
    Boolean,
    /// UTF-8 string leaf
    String,
    /// Interior node holding a nested mapping
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Map => "map",
        };
        write!(f, "{}", name)
    }
}

/// A single node in the configuration tree.
///
/// A value is either a scalar leaf or a nested [`ConfigMap`] interior node.
/// Scalars keep the kind the source document's parser gave them: an integer
/// literal stays an integer, a float literal stays a float. Projections never
/// convert across kinds, so asking for an integer out of a float leaf is a
/// [`ConfigError::KindMismatch`] rather than a rounding.
///
/// The enum is exhaustive on purpose. Every consumer that matches on a value
/// is forced by the compiler to handle all five kinds.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::ConfigValue;
///
/// let port = ConfigValue::from(8080);
/// assert_eq!(port.as_i64("server.port").unwrap(), 8080);
/// assert!(port.as_bool("server.port").is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// 64-bit signed integer leaf.
    Integer(i64),
    /// 64-bit floating-point leaf.
    Float(f64),
    /// Boolean leaf.
    Boolean(bool),
    /// UTF-8 string leaf.
    String(String),
    /// Interior node holding nested configuration.
    Map(ConfigMap),
}

impl ConfigValue {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Integer(_) => ValueKind::Integer,
            ConfigValue::Float(_) => ValueKind::Float,
            ConfigValue::Boolean(_) => ValueKind::Boolean,
            ConfigValue::String(_) => ValueKind::String,
            ConfigValue::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` if this value is an interior node.
    pub fn is_map(&self) -> bool {
        matches!(self, ConfigValue::Map(_))
    }

    /// Borrows the nested mapping if this value is an interior node.
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Projects the value to an `i64`.
    ///
    /// The `key` parameter is only used to give the error context; it does
    /// not drive the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if the value is not an integer.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Integer(value) => Ok(*value),
            _ => Err(self.mismatch(key, ValueKind::Integer)),
        }
    }

    /// Projects the value to an `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if the value is not a float.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Float(value) => Ok(*value),
            _ => Err(self.mismatch(key, ValueKind::Float)),
        }
    }

    /// Projects the value to a `bool`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if the value is not a boolean.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Boolean(value) => Ok(*value),
            _ => Err(self.mismatch(key, ValueKind::Boolean)),
        }
    }

    /// Projects the value to a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if the value is not a string.
    pub fn as_str(&self, key: &str) -> Result<&str> {
        match self {
            ConfigValue::String(value) => Ok(value),
            _ => Err(self.mismatch(key, ValueKind::String)),
        }
    }

    /// Consumes the value and returns the owned string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`] if the value is not a string.
    pub fn into_string(self, key: &str) -> Result<String> {
        match self {
            ConfigValue::String(value) => Ok(value),
            other => Err(other.mismatch(key, ValueKind::String)),
        }
    }

    fn mismatch(&self, key: &str, expected: ValueKind) -> ConfigError {
        ConfigError::KindMismatch {
            key: key.to_string(),
            expected,
            actual: self.kind(),
        }
    }
}

impl From<i8> for ConfigValue {
    fn from(value: i8) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<i16> for ConfigValue {
    fn from(value: i16) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<u8> for ConfigValue {
    fn from(value: u8) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        ConfigValue::Float(f64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        ConfigValue::Map(value)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Integer(value) => serializer.serialize_i64(*value),
            ConfigValue::Float(value) => serializer.serialize_f64(*value),
            ConfigValue::Boolean(value) => serializer.serialize_bool(*value),
            ConfigValue::String(value) => serializer.serialize_str(value),
            ConfigValue::Map(map) => map.serialize(serializer),
        }
    }
}
