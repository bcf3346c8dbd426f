// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types and logic for the configuration
//! crate. It is independent of any external concerns and defines the
//! fundamental concepts used throughout the library: the configuration tree,
//! the values it stores, and the typed read surface over it.

pub mod accessor;
pub mod errors;
pub mod tree;
pub mod value;

// Re-export commonly used types
pub use accessor::ConfigAccessor;
pub use errors::{ConfigError, Result};
pub use tree::ConfigMap;
pub use value::{ConfigValue, ValueKind};
