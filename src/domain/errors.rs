// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading, saving,
//! or accessing configuration data. All errors use `thiserror` for proper
//! error handling and conversion.

use crate::domain::value::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when parsing,
/// serializing, or accessing configuration data. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// A missing key is never reported through this type: untyped and typed
/// lookups fall back to the caller-supplied default instead (see
/// [`ConfigAccessor`](crate::domain::ConfigAccessor)).
///
/// # Examples
///
/// ```
/// use dotcfg::domain::errors::ConfigError;
///
/// fn load_config() -> Result<(), ConfigError> {
///     Err(ConfigError::NoDefaultFile {
///         app_name: "myapp".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document text was rejected by the format parser.
    ///
    /// The store is left untouched when this occurs: a load either replaces
    /// the whole tree or replaces nothing.
    #[error("Failed to parse {format} configuration: {source}")]
    Parse {
        /// The format that rejected the document
        format: &'static str,
        /// The underlying parser error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration tree could not be rendered as document text.
    #[error("Failed to serialize {format} configuration: {source}")]
    Serialize {
        /// The format that rejected the tree
        format: &'static str,
        /// The underlying serializer error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A typed accessor resolved a value of a different kind than requested.
    ///
    /// Only present keys can produce this error; absent keys substitute the
    /// default instead.
    #[error("Configuration key '{key}' holds a {actual} value, not a {expected}")]
    KindMismatch {
        /// The key whose value had the wrong kind
        key: String,
        /// The kind the accessor asked for
        expected: ValueKind,
        /// The kind actually stored at the key
        actual: ValueKind,
    },

    /// A parsed document contained a value the configuration tree cannot hold.
    #[error("Unsupported {found} value at configuration key '{key}'")]
    UnsupportedValue {
        /// Dotted path of the offending value
        key: String,
        /// The unrepresentable kind, e.g. "sequence" or "null"
        found: &'static str,
    },

    /// A YAML mapping used a key that is not a string-representable scalar.
    #[error("Mapping key under '{path}' is not a string-representable scalar")]
    UnsupportedKey {
        /// Dotted path of the mapping holding the key; empty for the root
        path: String,
    },

    /// An I/O error occurred while reading or writing a configuration file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file that could not be read or written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// No configuration file was found in the default OS location.
    #[error("No configuration file found in the default location for '{app_name}'")]
    NoDefaultFile {
        /// The application name used to derive the location
        app_name: String,
    },
}

impl ConfigError {
    /// Creates a [`ConfigError::Parse`] for the named format.
    pub fn parse(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::Parse {
            format,
            source: Box::new(source),
        }
    }

    /// Creates a [`ConfigError::Serialize`] for the named format.
    pub fn serialize(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::Serialize {
            format,
            source: Box::new(source),
        }
    }

    /// Creates a [`ConfigError::Io`] carrying the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_display() {
        let error = ConfigError::KindMismatch {
            key: "server.port".to_string(),
            expected: ValueKind::Integer,
            actual: ValueKind::String,
        };
        assert_eq!(
            error.to_string(),
            "Configuration key 'server.port' holds a string value, not a integer"
        );
    }

    #[test]
    fn test_unsupported_value_display() {
        let error = ConfigError::UnsupportedValue {
            key: "servers".to_string(),
            found: "sequence",
        };
        assert_eq!(
            error.to_string(),
            "Unsupported sequence value at configuration key 'servers'"
        );
    }

    #[test]
    fn test_unsupported_key_display() {
        let error = ConfigError::UnsupportedKey {
            path: "database".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Mapping key under 'database' is not a string-representable scalar"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::io("/etc/myapp/config.yaml", source);
        assert!(error.to_string().contains("/etc/myapp/config.yaml"));
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn test_no_default_file_display() {
        let error = ConfigError::NoDefaultFile {
            app_name: "myapp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No configuration file found in the default location for 'myapp'"
        );
    }

    #[test]
    fn test_parse_helper_wraps_source() {
        let source = "not a number".parse::<i64>().unwrap_err();
        let error = ConfigError::parse("JSON", source);
        assert!(error.to_string().starts_with("Failed to parse JSON"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_serialize_helper_wraps_source() {
        let source = "not a float".parse::<f64>().unwrap_err();
        let error = ConfigError::serialize("YAML", source);
        assert!(error.to_string().starts_with("Failed to serialize YAML"));
    }
}
