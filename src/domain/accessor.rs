// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed accessor layer shared by both store shapes.
//!
//! [`Configuration`](crate::store::Configuration) and
//! [`SharedStore`](crate::store::SharedStore) differ in ownership and
//! locking but answer lookups identically. That shared read surface lives
//! here as a trait with provided methods, so each store only supplies the
//! raw [`get`](ConfigAccessor::get).

use crate::domain::errors::Result;
use crate::domain::value::ConfigValue;

/// Collapses a fallible lookup into a plain value for the panicking getters.
///
/// Found values win, missing keys take the default, and a kind mismatch is a
/// caller bug that panics with the full mismatch report.
fn resolve<T>(lookup: Result<Option<T>>, default: T) -> T {
    match lookup {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => panic!("{err}"),
    }
}

/// Read access to a configuration store through dotted keys.
///
/// Lookups distinguish three outcomes. The key can resolve to a value of the
/// requested kind, the key can be absent, or the key can resolve to a value
/// of some other kind. The `try_get_*` methods surface all three as
/// `Ok(Some(v))`, `Ok(None)`, and `Err(..)`. The plain `get_*` methods fold
/// the first two into one return value by substituting the caller's default
/// on a miss, and treat the third as a programming error that panics. A
/// wrong-kind value under a known key means the configuration contract
/// between the program and its config file is broken, which no default can
/// paper over.
///
/// Integers are stored canonically as `i64` and floats as `f64`. The
/// narrower getters resolve at the canonical width and then truncate with
/// `as`, bits beyond the target width simply fall away: a stored `12345`
/// read through [`get_i8`](ConfigAccessor::get_i8) comes back as `57`.
/// Defaults are widened losslessly before the lookup and survive the round
/// trip unchanged.
///
/// # Examples
///
/// ```
/// use dotcfg::prelude::*;
///
/// let store = SharedStore::new();
/// store.set("retries", 3i64);
///
/// assert_eq!(store.get_i64("retries", 0), 3);
/// assert_eq!(store.get_i64("absent", 7), 7);
/// assert!(store.try_get_bool("retries").is_err());
/// ```
pub trait ConfigAccessor {
    /// Resolves a dotted key and clones the value out of the store.
    ///
    /// Returns `None` for a missing key or a path that runs through a
    /// scalar leaf.
    fn get(&self, key: &str) -> Option<ConfigValue>;

    /// Resolves a dotted key, substituting `default` if it is missing.
    fn get_or(&self, key: &str, default: ConfigValue) -> ConfigValue {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the dotted key resolves to a value of any kind.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Resolves a dotted key to an integer without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`](crate::domain::ConfigError) if
    /// the key is present but does not hold an integer.
    fn try_get_i64(&self, key: &str) -> Result<Option<i64>> {
        self.get(key).map(|value| value.as_i64(key)).transpose()
    }

    /// Resolves a dotted key to a float without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`](crate::domain::ConfigError) if
    /// the key is present but does not hold a float.
    fn try_get_f64(&self, key: &str) -> Result<Option<f64>> {
        self.get(key).map(|value| value.as_f64(key)).transpose()
    }

    /// Resolves a dotted key to a boolean without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`](crate::domain::ConfigError) if
    /// the key is present but does not hold a boolean.
    fn try_get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key).map(|value| value.as_bool(key)).transpose()
    }

    /// Resolves a dotted key to a string without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KindMismatch`](crate::domain::ConfigError) if
    /// the key is present but does not hold a string.
    fn try_get_string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
            .map(|value| value.into_string(key))
            .transpose()
    }

    /// Returns the integer stored under `key`, or `default` if the key is
    /// missing.
    ///
    /// # Panics
    ///
    /// Panics if the key resolves to a value that is not an integer. The
    /// panic message names the key and both kinds.
    fn get_i64(&self, key: &str, default: i64) -> i64 {
        resolve(self.try_get_i64(key), default)
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), truncated to `i8`.
    fn get_i8(&self, key: &str, default: i8) -> i8 {
        self.get_i64(key, i64::from(default)) as i8
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), truncated to `i16`.
    fn get_i16(&self, key: &str, default: i16) -> i16 {
        self.get_i64(key, i64::from(default)) as i16
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), truncated to `i32`.
    fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.get_i64(key, i64::from(default)) as i32
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), truncated to `isize`.
    fn get_isize(&self, key: &str, default: isize) -> isize {
        self.get_i64(key, default as i64) as isize
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), reinterpreted as `u8`.
    fn get_u8(&self, key: &str, default: u8) -> u8 {
        self.get_i64(key, i64::from(default)) as u8
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), reinterpreted as `u16`.
    fn get_u16(&self, key: &str, default: u16) -> u16 {
        self.get_i64(key, i64::from(default)) as u16
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), reinterpreted as `u32`.
    fn get_u32(&self, key: &str, default: u32) -> u32 {
        self.get_i64(key, i64::from(default)) as u32
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), reinterpreted as `u64`.
    ///
    /// The default round-trips through the canonical signed width by
    /// two's-complement reinterpretation, so any `u64` default survives
    /// unchanged.
    fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.get_i64(key, default as i64) as u64
    }

    /// Like [`get_i64`](ConfigAccessor::get_i64), reinterpreted as `usize`.
    fn get_usize(&self, key: &str, default: usize) -> usize {
        self.get_i64(key, default as i64) as usize
    }

    /// Returns the float stored under `key`, or `default` if the key is
    /// missing.
    ///
    /// # Panics
    ///
    /// Panics if the key resolves to a value that is not a float. An integer
    /// literal in the source document is not a float; it panics here too.
    fn get_f64(&self, key: &str, default: f64) -> f64 {
        resolve(self.try_get_f64(key), default)
    }

    /// Like [`get_f64`](ConfigAccessor::get_f64), narrowed to `f32`.
    fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.get_f64(key, f64::from(default)) as f32
    }

    /// Returns the boolean stored under `key`, or `default` if the key is
    /// missing.
    ///
    /// # Panics
    ///
    /// Panics if the key resolves to a value that is not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        resolve(self.try_get_bool(key), default)
    }

    /// Returns the string stored under `key`, or `default` if the key is
    /// missing.
    ///
    /// # Panics
    ///
    /// Panics if the key resolves to a value that is not a string.
    fn get_string(&self, key: &str, default: &str) -> String {
        resolve(self.try_get_string(key), default.to_string())
    }
}
