// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instance-mode configuration store.
//!
//! This module provides [`Configuration`], an owned store bound to one
//! document format. Each instance is independent: loading one has no effect
//! on any other, and nothing here touches the process-wide store.

use crate::domain::{ConfigAccessor, ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigFormat;
use directories::ProjectDirs;
use std::fs;
use std::path::Path;

/// An owned configuration store bound to one document format.
///
/// The format is fixed at the type level, so a `Configuration<YamlFormat>`
/// only ever parses and renders YAML. The [`JsonConfiguration`] and
/// [`YamlConfiguration`] aliases cover the built-in formats.
///
/// # Thread Safety
///
/// There is no locking here. All mutation takes `&mut self`, so the borrow
/// checker already guarantees that no reads run concurrently with a load or
/// a set. A `Configuration` can be moved to another thread or shared behind
/// a lock of the caller's choosing; for a process-wide store with interior
/// locking, use [`SharedStore`](crate::store::SharedStore) instead.
///
/// # Key Semantics
///
/// Lookups through [`ConfigAccessor`] split keys on dots and descend the
/// tree. [`set`](Configuration::set) and [`remove`](Configuration::remove)
/// do not: they address literal top-level entries only, so overriding a
/// nested key at runtime is not possible. A value set under a dotted name
/// is stored but unreachable through `get`.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
///
/// let mut config = YamlConfiguration::new();
/// config.load("server:\n  host: localhost\n  port: 8080\n")?;
///
/// assert_eq!(config.get_string("server.host", ""), "localhost");
/// assert_eq!(config.get_i64("server.port", 0), 8080);
/// # Ok::<(), dotcfg::domain::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Configuration<F: ConfigFormat> {
    /// The format used for all document text this store touches
    format: F,
    /// The configuration tree
    values: ConfigMap,
}

impl<F: ConfigFormat + Default> Configuration<F> {
    /// Creates an empty configuration store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::prelude::*;
    ///
    /// let config = YamlConfiguration::new();
    /// assert!(!config.has("anything"));
    /// ```
    pub fn new() -> Self {
        Self {
            format: F::default(),
            values: ConfigMap::new(),
        }
    }

    /// Creates a configuration store populated from a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse in
    /// this store's format.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dotcfg::prelude::*;
    ///
    /// let config = YamlConfiguration::from_file("/etc/myapp/config.yaml")?;
    /// # Ok::<(), dotcfg::domain::ConfigError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::new();
        config.load_file(path)?;
        Ok(config)
    }

    /// Creates a configuration store from the default OS-appropriate
    /// location.
    ///
    /// This method uses the `directories` crate to determine the
    /// configuration directory for the current operating system, then
    /// tries `config.<ext>` with each extension the format supports, in
    /// order.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDefaultFile`] if no candidate file exists,
    /// or a parse/read error if one exists but cannot be loaded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dotcfg::prelude::*;
    ///
    /// let config = YamlConfiguration::from_default_location("myapp", "com.example")?;
    /// # Ok::<(), dotcfg::domain::ConfigError>(())
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let format = F::default();
        let dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::NoDefaultFile {
                app_name: app_name.to_string(),
            }
        })?;
        let config_dir = dirs.config_dir();

        let mut found = None;
        for extension in format.supported_extensions() {
            let candidate = config_dir.join(format!("config.{}", extension));
            tracing::debug!("Probing {} for configuration", candidate.display());
            if candidate.is_file() {
                found = Some(candidate);
                break;
            }
        }

        let path = found.ok_or_else(|| ConfigError::NoDefaultFile {
            app_name: app_name.to_string(),
        })?;
        let mut config = Self {
            format,
            values: ConfigMap::new(),
        };
        config.load_file(path)?;
        Ok(config)
    }
}

impl<F: ConfigFormat> Configuration<F> {
    /// Creates an empty configuration store around an explicit format value.
    ///
    /// Useful for formats that carry options and therefore have no
    /// meaningful `Default`.
    pub fn with_format(format: F) -> Self {
        Self {
            format,
            values: ConfigMap::new(),
        }
    }

    /// Replaces the whole tree with the contents of a document.
    ///
    /// Replacement is all or nothing: if the text does not parse, the
    /// previously loaded values stay exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid in this store's format or
    /// contains values the tree cannot hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::prelude::*;
    ///
    /// let mut config = YamlConfiguration::new();
    /// config.load("num: 12345\n")?;
    /// assert!(config.load("{{{ not yaml").is_err());
    /// // The failed load changed nothing.
    /// assert_eq!(config.get_i64("num", 0), 12345);
    /// # Ok::<(), dotcfg::domain::ConfigError>(())
    /// ```
    pub fn load(&mut self, text: &str) -> Result<()> {
        let values = self.format.parse(text)?;
        tracing::debug!(
            "Loaded {} top-level keys from {} document",
            values.len(),
            self.format.name()
        );
        self.values = values;
        Ok(())
    }

    /// Renders the current tree as document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be represented in this store's
    /// format.
    pub fn save(&self) -> Result<String> {
        self.format.serialize(&self.values)
    }

    /// Replaces the whole tree with the contents of a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or a parse
    /// error if its contents are invalid. The previously loaded values
    /// survive either failure.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(
            "Loading {} configuration from {}",
            self.format.name(),
            path.display()
        );
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        self.load(&text)
    }

    /// Writes the current tree to a file in this store's format.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be serialized or the file cannot
    /// be written.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.save()?;
        tracing::debug!(
            "Saving {} configuration to {}",
            self.format.name(),
            path.display()
        );
        fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }

    /// Sets a value under a literal top-level key.
    ///
    /// The key is not split on dots; see the type-level docs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::prelude::*;
    ///
    /// let mut config = YamlConfiguration::new();
    /// config.set("debug", true);
    /// assert!(config.get_bool("debug", false));
    ///
    /// // A dotted name becomes a literal entry that dotted lookup skips.
    /// config.set("a.b", 1);
    /// assert!(config.get("a.b").is_none());
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key, value);
    }

    /// Removes the entry under a literal top-level key.
    ///
    /// Returns the removed value; removing a missing key is a quiet no-op.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    /// Borrows the underlying tree.
    pub fn values(&self) -> &ConfigMap {
        &self.values
    }
}

impl<F: ConfigFormat + Default> Default for Configuration<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ConfigFormat> ConfigAccessor for Configuration<F> {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.get(key).cloned()
    }
}

/// A [`Configuration`] that reads and writes JSON documents.
#[cfg(feature = "json")]
pub type JsonConfiguration = Configuration<crate::adapters::JsonFormat>;

/// A [`Configuration`] that reads and writes YAML documents.
#[cfg(feature = "yaml")]
pub type YamlConfiguration = Configuration<crate::adapters::YamlFormat>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Minimal line-oriented format so these tests do not depend on any
    // feature flag. Lines are `key=string`; anything else fails to parse.
    #[derive(Debug, Clone, Default)]
    struct LineFormat;

    impl ConfigFormat for LineFormat {
        fn name(&self) -> &'static str {
            "lines"
        }

        fn parse(&self, text: &str) -> Result<ConfigMap> {
            let mut map = ConfigMap::new();
            for line in text.lines() {
                match line.split_once('=') {
                    Some((key, value)) => map.insert(key, value),
                    None => {
                        return Err(ConfigError::Parse {
                            format: "lines",
                            source: format!("bad line: {line}").into(),
                        })
                    }
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
            &["lines"]
        }
    }

    #[test]
    fn test_new_is_empty() {
        let config = Configuration::<LineFormat>::new();
        assert!(config.values().is_empty());
        assert!(!config.has("key"));
    }

    #[test]
    fn test_load_replaces_previous_tree() {
        let mut config = Configuration::<LineFormat>::new();
        config.load("a=1\nb=2").unwrap();
        config.load("c=3").unwrap();
        assert!(!config.has("a"));
        assert!(config.has("c"));
        assert_eq!(config.values().len(), 1);
    }

    #[test]
    fn test_failed_load_changes_nothing() {
        let mut config = Configuration::<LineFormat>::new();
        config.load("a=1").unwrap();
        let err = config.load("not a line").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(config.get_string("a", ""), "1");
    }

    #[test]
    fn test_set_and_remove_are_flat() {
        let mut config = Configuration::<LineFormat>::new();
        config.set("answer", 42i64);
        assert_eq!(config.get_i64("answer", 0), 42);
        assert_eq!(config.remove("answer"), Some(ConfigValue::Integer(42)));
        assert_eq!(config.remove("answer"), None);
        config.set("x.y", 1i64);
        assert!(config.get("x.y").is_none());
    }

    #[test]
    fn test_save_round_trip() {
        let mut config = Configuration::<LineFormat>::new();
        config.load("host=localhost\nname=MyApp").unwrap();
        let text = config.save().unwrap();
        let mut reloaded = Configuration::<LineFormat>::new();
        reloaded.load(&text).unwrap();
        assert_eq!(reloaded.values(), config.values());
    }

    #[test]
    fn test_file_round_trip() {
        let mut config = Configuration::<LineFormat>::new();
        config.set("host", "localhost");
        let temp_file = NamedTempFile::new().unwrap();
        config.save_file(temp_file.path()).unwrap();

        let loaded = Configuration::<LineFormat>::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.get_string("host", ""), "localhost");
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let mut config = Configuration::<LineFormat>::new();
        let err = config
            .load_file("/nonexistent/path/to/config.lines")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_on_tempfile() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key=value").unwrap();
        temp_file.flush().unwrap();

        let config = Configuration::<LineFormat>::from_file(temp_file.path()).unwrap();
        assert_eq!(config.get_string("key", ""), "value");
    }

    #[test]
    fn test_with_format() {
        let config = Configuration::with_format(LineFormat);
        assert!(config.values().is_empty());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_alias_parses_yaml() {
        let mut config = YamlConfiguration::new();
        config.load("nested:\n  value: 1\n").unwrap();
        assert_eq!(config.get_i64("nested.value", 0), 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_alias_parses_json() {
        let mut config = JsonConfiguration::new();
        config.load(r#"{"nested": {"value": 1}}"#).unwrap();
        assert_eq!(config.get_i64("nested.value", 0), 1);
    }
}
