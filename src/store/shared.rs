// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared configuration store with interior locking.
//!
//! This module provides [`SharedStore`], the concurrency-safe counterpart to
//! [`Configuration`](crate::store::Configuration), and the process-wide
//! instance behind [`SharedStore::global`].

#[cfg(feature = "json")]
use crate::adapters::JsonFormat;
#[cfg(feature = "yaml")]
use crate::adapters::YamlFormat;
use crate::domain::{ConfigAccessor, ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigFormat;
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The process-wide store returned by [`SharedStore::global`].
static GLOBAL: Lazy<SharedStore> = Lazy::new(SharedStore::new);

/// A configuration store that can be read and written from any thread.
///
/// Unlike [`Configuration`](crate::store::Configuration), a `SharedStore`
/// is not bound to one format: each load or save names the format it wants,
/// and the suffixed helpers (`load_yaml`, `save_json`, ...) cover the
/// built-in ones. All operations take `&self`.
///
/// # Thread Safety
///
/// The tree sits behind a `Mutex`. Parsing and serialization happen outside
/// the critical section, which is held only long enough to swap, mutate, or
/// clone the tree, so a slow document never blocks readers for its full
/// parse. Each operation is individually atomic; there is no transaction
/// spanning several calls. Two threads racing `set` against `load` end up
/// with one of the two orderings, never a torn tree.
///
/// # Examples
///
/// ```rust
/// use dotcfg::prelude::*;
///
/// let store = SharedStore::new();
/// store.load_yaml("workers: 4\n")?;
/// store.set("debug", true);
///
/// assert_eq!(store.get_i64("workers", 1), 4);
/// assert!(store.get_bool("debug", false));
/// # Ok::<(), dotcfg::domain::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct SharedStore {
    vars: Mutex<ConfigMap>,
}

impl SharedStore {
    /// Creates an empty shared store.
    pub fn new() -> Self {
        Self {
            vars: Mutex::new(ConfigMap::new()),
        }
    }

    /// Returns the process-wide shared store.
    ///
    /// Every caller in the process sees the same tree, so a load in one
    /// module is visible to reads everywhere else. The store starts empty
    /// and is created on first use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotcfg::prelude::*;
    ///
    /// SharedStore::global().set("global_example_marker", 1i64);
    /// assert!(SharedStore::global().has("global_example_marker"));
    /// ```
    pub fn global() -> &'static SharedStore {
        &GLOBAL
    }

    // Lock poisoning cannot leave the tree half-updated: every critical
    // section is a single insert, remove, clone, or swap. Recover the map
    // instead of propagating the poison.
    fn lock(&self) -> MutexGuard<'_, ConfigMap> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the whole tree with the contents of a document.
    ///
    /// The text is parsed before the lock is taken. Replacement is all or
    /// nothing: if parsing fails, the stored tree stays exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid in the given format or
    /// contains values the tree cannot hold.
    pub fn load<F: ConfigFormat>(&self, format: &F, text: &str) -> Result<()> {
        let values = format.parse(text)?;
        tracing::debug!(
            "Loaded {} top-level keys from {} document into shared store",
            values.len(),
            format.name()
        );
        *self.lock() = values;
        Ok(())
    }

    /// Renders a point-in-time copy of the tree as document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be represented in the given
    /// format.
    pub fn save<F: ConfigFormat>(&self, format: &F) -> Result<String> {
        let snapshot = self.snapshot();
        format.serialize(&snapshot)
    }

    /// Replaces the whole tree with the contents of a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or a parse
    /// error if its contents are invalid. The stored tree survives either
    /// failure.
    pub fn load_file<F: ConfigFormat>(&self, format: &F, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(
            "Loading {} configuration from {} into shared store",
            format.name(),
            path.display()
        );
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        self.load(format, &text)
    }

    /// Writes a point-in-time copy of the tree to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be serialized or the file cannot
    /// be written.
    pub fn save_file<F: ConfigFormat>(&self, format: &F, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.save(format)?;
        tracing::debug!(
            "Saving {} configuration from shared store to {}",
            format.name(),
            path.display()
        );
        fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }

    /// Sets a value under a literal top-level key.
    ///
    /// The key is not split on dots, so only single-segment keys are
    /// reachable through `get` afterwards.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.lock().insert(key, value);
    }

    /// Removes the entry under a literal top-level key.
    ///
    /// Returns the removed value; removing a missing key is a quiet no-op.
    pub fn remove(&self, key: &str) -> Option<ConfigValue> {
        self.lock().remove(key)
    }

    /// Returns a consistent point-in-time copy of the whole tree.
    pub fn snapshot(&self) -> ConfigMap {
        self.lock().clone()
    }
}

#[cfg(feature = "json")]
impl SharedStore {
    /// Replaces the tree with the contents of a JSON document.
    ///
    /// # Errors
    ///
    /// See [`load`](SharedStore::load).
    pub fn load_json(&self, text: &str) -> Result<()> {
        self.load(&JsonFormat::new(), text)
    }

    /// Renders the tree as JSON text.
    ///
    /// # Errors
    ///
    /// See [`save`](SharedStore::save).
    pub fn save_json(&self) -> Result<String> {
        self.save(&JsonFormat::new())
    }

    /// Replaces the tree with the contents of a JSON file.
    ///
    /// # Errors
    ///
    /// See [`load_file`](SharedStore::load_file).
    pub fn load_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.load_file(&JsonFormat::new(), path)
    }

    /// Writes the tree to a JSON file.
    ///
    /// # Errors
    ///
    /// See [`save_file`](SharedStore::save_file).
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_file(&JsonFormat::new(), path)
    }
}

#[cfg(feature = "yaml")]
impl SharedStore {
    /// Replaces the tree with the contents of a YAML document.
    ///
    /// # Errors
    ///
    /// See [`load`](SharedStore::load).
    pub fn load_yaml(&self, text: &str) -> Result<()> {
        self.load(&YamlFormat::new(), text)
    }

    /// Renders the tree as YAML text.
    ///
    /// # Errors
    ///
    /// See [`save`](SharedStore::save).
    pub fn save_yaml(&self) -> Result<String> {
        self.save(&YamlFormat::new())
    }

    /// Replaces the tree with the contents of a YAML file.
    ///
    /// # Errors
    ///
    /// See [`load_file`](SharedStore::load_file).
    pub fn load_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.load_file(&YamlFormat::new(), path)
    }

    /// Writes the tree to a YAML file.
    ///
    /// # Errors
    ///
    /// See [`save_file`](SharedStore::save_file).
    pub fn save_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_file(&YamlFormat::new(), path)
    }
}

impl ConfigAccessor for SharedStore {
    // The guard drops before any typed coercion runs, so accessor panics
    // never happen while the lock is held.
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.lock().get(key).cloned()
    }
}
