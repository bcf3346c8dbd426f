// SPDX-License-Identifier: MIT OR Apache-2.0

//! The canonical configuration tree.
//!
//! Parsed documents of every supported format normalize into the same shape:
//! a [`ConfigMap`] of string keys to [`ConfigValue`] nodes, nested maps
//! forming the interior of the tree. All lookups and mutations in the crate
//! bottom out here.

use crate::domain::value::ConfigValue;
use serde::Serialize;
use std::collections::HashMap;

/// An interior node of the configuration tree, mapping string keys to nested
/// [`ConfigValue`] nodes.
///
/// Lookup and mutation deliberately disagree about what a key means:
///
/// - [`get`](ConfigMap::get) treats `.` as a path separator and descends
///   through nested maps, so `"database.host"` resolves two levels deep.
/// - [`insert`](ConfigMap::insert) and [`remove`](ConfigMap::remove) treat
///   the key as a literal string at this level only. Inserting under
///   `"database.host"` creates a top-level entry whose name contains a dot,
///   and that entry can never be reached through `get` again because `get`
///   splits it into path segments first.
///
/// Runtime overrides are therefore only reliable for single-segment keys.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::{ConfigMap, ConfigValue};
///
/// let mut map = ConfigMap::new();
/// map.insert("server", ConfigMap::from_iter([("port", 8080i64)]));
///
/// assert_eq!(map.get("server.port"), Some(&ConfigValue::Integer(8080)));
/// assert!(map.get("server.missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigMap {
    entries: HashMap<String, ConfigValue>,
}

impl ConfigMap {
    /// Creates an empty configuration tree.
    pub fn new() -> Self {
        ConfigMap {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of entries at this level of the tree.
    ///
    /// Nested maps count as one entry regardless of their own size.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this level of the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a literal key is present at this level.
    ///
    /// Unlike [`get`](ConfigMap::get), no dot splitting happens: this answers
    /// for exactly one level of the tree.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Resolves a dotted key against the tree.
    ///
    /// The key is split on the first `.`: the head names an entry at this
    /// level and the rest is resolved recursively inside that entry, which
    /// must be a nested map. A key without dots is a plain lookup at this
    /// level.
    ///
    /// Every failure mode answers `None` rather than distinguishing itself:
    /// a missing head and a path that dead-ends in a scalar leaf look the
    /// same to the caller. Splitting is purely mechanical, so the empty
    /// segment left by a leading, trailing, or doubled dot is looked up
    /// like any other name. It misses unless an entry literally named by
    /// the empty string exists at that level, which a parsed document can
    /// legitimately contain (`{"": 1}` is valid JSON).
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match key.split_once('.') {
            None => self.entries.get(key),
            Some((head, rest)) => match self.entries.get(head) {
                Some(ConfigValue::Map(nested)) => nested.get(rest),
                _ => None,
            },
        }
    }

    /// Inserts a value under a literal key at this level.
    ///
    /// No path splitting happens here; see the type-level docs for how this
    /// interacts with dotted keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes the entry under a literal key at this level.
    ///
    /// Returns the removed value, or `None` if the key was not present.
    /// Removing a missing key is not an error.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    /// Iterates over the keys at this level in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the entries at this level in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ConfigMap {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ConfigMap {
        let mut nested = ConfigMap::new();
        nested.insert("value", 1i64);
        let mut map = ConfigMap::new();
        map.insert("num", 12345i64);
        map.insert("str", "some string");
        map.insert("nested", nested);
        map
    }

    #[test]
    fn test_flat_lookup() {
        let map = sample_tree();
        assert_eq!(map.get("num"), Some(&ConfigValue::Integer(12345)));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_dotted_lookup_descends() {
        let map = sample_tree();
        assert_eq!(map.get("nested.value"), Some(&ConfigValue::Integer(1)));
    }

    #[test]
    fn test_path_through_leaf_is_none() {
        let map = sample_tree();
        assert!(map.get("str.anything").is_none());
        assert!(map.get("num.deeper.still").is_none());
    }

    #[test]
    fn test_partial_path_misses() {
        let map = sample_tree();
        assert!(map.get("nested.other").is_none());
        assert!(map.get("other.value").is_none());
    }

    #[test]
    fn test_empty_segments_are_misses() {
        // Nothing here is stored under the empty string, so every empty
        // segment misses.
        let map = sample_tree();
        assert!(map.get("").is_none());
        assert!(map.get(".num").is_none());
        assert!(map.get("nested.").is_none());
        assert!(map.get("nested..value").is_none());
    }

    #[test]
    fn test_empty_string_key_is_an_ordinary_entry() {
        let mut level = ConfigMap::new();
        level.insert("", 7i64);
        assert!(level.contains_key(""));
        assert_eq!(level.get(""), Some(&ConfigValue::Integer(7)));

        // A trailing dot leaves an empty final segment, which resolves
        // through the empty-named entry like any other name.
        let mut root = ConfigMap::new();
        root.insert("outer", level);
        assert_eq!(root.get("outer."), Some(&ConfigValue::Integer(7)));
    }

    #[test]
    fn test_insert_is_literal() {
        let mut map = ConfigMap::new();
        map.insert("a.b", 1i64);
        // Stored under the literal name "a.b", which dotted lookup splits
        // into segments and never finds.
        assert!(map.get("a.b").is_none());
        assert!(map.contains_key("a.b"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_contains_key_is_flat() {
        let map = sample_tree();
        assert!(map.contains_key("num"));
        assert!(map.contains_key("nested"));
        assert!(!map.contains_key("nested.value"));
        assert!(!map.contains_key("missing"));
    }

    #[test]
    fn test_insert_then_flat_get() {
        let mut map = ConfigMap::new();
        map.insert("flag", true);
        assert_eq!(map.get("flag"), Some(&ConfigValue::Boolean(true)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = ConfigMap::new();
        map.insert("key", 1i64);
        map.insert("key", "now a string");
        assert_eq!(
            map.get("key"),
            Some(&ConfigValue::String("now a string".to_string()))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_is_flat_and_idempotent() {
        let mut map = sample_tree();
        assert!(map.remove("num").is_some());
        assert!(map.remove("num").is_none());
        assert!(map.get("num").is_none());
        // A dotted key names no literal entry here, so this is a no-op.
        assert!(map.remove("nested.value").is_none());
        assert_eq!(map.get("nested.value"), Some(&ConfigValue::Integer(1)));
    }

    #[test]
    fn test_from_iter_builds_flat_entries() {
        let map = ConfigMap::from_iter([("a", 1i64), ("b", 2i64)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(&ConfigValue::Integer(2)));
    }

    #[test]
    fn test_iter_and_keys_cover_all_entries() {
        let map = sample_tree();
        let mut keys: Vec<&str> = map.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["nested", "num", "str"]);
        assert_eq!(map.iter().count(), 3);
    }
}
