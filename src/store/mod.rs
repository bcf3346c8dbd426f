// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store layer containing the two deployment shapes.
//!
//! This module contains the concrete stores a program holds configuration
//! in: [`Configuration`] for an owned, format-bound instance, and
//! [`SharedStore`] for a lock-guarded tree shared between threads or across
//! the whole process.

pub mod configuration;
pub mod shared;

// Re-export commonly used types
pub use configuration::Configuration;
#[cfg(feature = "json")]
pub use configuration::JsonConfiguration;
#[cfg(feature = "yaml")]
pub use configuration::YamlConfiguration;
pub use shared::SharedStore;
