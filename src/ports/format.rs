// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration format trait definition.
//!
//! This module defines the `ConfigFormat` trait, which provides an interface
//! for turning configuration document text into the canonical tree and back.
//! Each supported document format (JSON, YAML, etc.) implements this trait
//! once and every store shape works with it unchanged.

use crate::domain::{ConfigMap, Result};

/// A trait for configuration document formats.
///
/// This trait defines the interface for implementing formats that can read
/// a whole configuration document into a [`ConfigMap`] and render a
/// [`ConfigMap`] back out as document text.
///
/// # Document Shape
///
/// A document must be a mapping at the top level. Formats normalize nested
/// mappings into nested [`ConfigMap`] values, so a YAML document like:
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// parses into a tree where `database` is an interior node and
/// `database.host` resolves through it. Scalars keep their parsed kind;
/// values the tree cannot represent (sequences, nulls) are rejected with an
/// error naming the offending dotted path.
///
/// # Examples
///
/// ```rust
/// use dotcfg::ports::ConfigFormat;
/// use dotcfg::domain::{ConfigMap, Result};
///
/// struct KeyValueFormat;
///
/// impl ConfigFormat for KeyValueFormat {
///     fn name(&self) -> &'static str {
///         "key=value"
///     }
///
///     fn parse(&self, text: &str) -> Result<ConfigMap> {
///         let mut map = ConfigMap::new();
///         for line in text.lines() {
///             if let Some((key, value)) = line.split_once('=') {
///                 map.insert(key, value);
///             }
///         }
///         Ok(map)
///     }
///
///     fn serialize(&self, map: &ConfigMap) -> Result<String> {
///         let mut text = String::new();
///         for (key, value) in map.iter() {
///             if let Ok(v) = value.as_str(key) {
///                 text.push_str(&format!("{key}={v}\n"));
///             }
///         }
///         Ok(text)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
/// ```
pub trait ConfigFormat {
    /// Returns the display name of this format, used in error messages.
    fn name(&self) -> &'static str;

    /// Parses document text into a configuration tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid in this format, if the top
    /// level is not a mapping, or if the document contains a value the tree
    /// cannot hold. On error the caller's store must be left untouched.
    fn parse(&self, text: &str) -> Result<ConfigMap>;

    /// Renders a configuration tree as document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be represented in this format.
    fn serialize(&self, map: &ConfigMap) -> Result<String>;

    /// Returns the file extensions associated with this format.
    ///
    /// Extensions are given without the leading dot and are used to look
    /// for configuration files in the default OS location.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigValue;

    // Minimal line-oriented format for exercising the trait surface.
    struct TestFormat;

    impl ConfigFormat for TestFormat {
        fn name(&self) -> &'static str {
            "test"
        }

        fn parse(&self, text: &str) -> Result<ConfigMap> {
            let mut map = ConfigMap::new();
            for line in text.lines() {
                if let Some((key, value)) = line.split_once('=') {
                    map.insert(key, value);
                }
            }
            Ok(map)
        }

        fn serialize(&self, map: &ConfigMap) -> Result<String> {
            let mut lines: Vec<String> = map
                .iter()
                .filter_map(|(key, value)| {
                    value.as_str(key).ok().map(|v| format!("{key}={v}"))
                })
                .collect();
            lines.sort_unstable();
            Ok(lines.join("\n"))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_format_parse() {
        let format = TestFormat;
        let map = format.parse("host=localhost\nname=MyApp").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("host"),
            Some(&ConfigValue::String("localhost".to_string()))
        );
    }

    #[test]
    fn test_format_serialize() {
        let format = TestFormat;
        let map = format.parse("b=two\na=one").unwrap();
        assert_eq!(format.serialize(&map).unwrap(), "a=one\nb=two");
    }

    #[test]
    fn test_format_supported_extensions() {
        let format = TestFormat;
        assert_eq!(format.supported_extensions(), &["test", "tst"]);
    }

    #[test]
    fn test_format_name() {
        assert_eq!(TestFormat.name(), "test");
    }
}
