// SPDX-License-Identifier: MIT OR Apache-2.0

//! A dotted-key configuration store with JSON and YAML support.
//!
//! This crate keeps an application's configuration as a tree of typed
//! values, populated from JSON or YAML documents and read back through
//! dotted keys: `"database.host"` descends from `database` into `host`.
//! Values keep the kind their document gave them, and the typed getters
//! either hand back exactly that kind, substitute a caller-supplied default
//! when the key is absent, or panic when the stored kind contradicts the
//! one asked for.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`ConfigMap`,
//!   `ConfigValue`, the `ConfigAccessor` read surface, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigFormat`)
//! - **Adapters**: Implementations for specific document formats (JSON, YAML)
//! - **Store**: The two deployment shapes, `Configuration` and `SharedStore`
//!
//! # Features
//!
//! - **Dotted Lookup**: Nested documents are read through dot-separated paths
//! - **Kind Safety**: Stored values never silently convert between kinds
//! - **Two Shapes**: Owned per-instance stores, or a lock-guarded shared one
//! - **Round Trips**: Trees serialize back to the format they came from
//! - **Extensible**: New document formats plug in via trait implementation
//!
//! # Feature Flags
//!
//! - `json`: Enable JSON document support (default)
//! - `yaml`: Enable YAML document support (default)
//! - `full`: Enable all formats
//!
//! # Quick Start
//!
//! ```rust
//! use dotcfg::prelude::*;
//!
//! # fn main() -> dotcfg::domain::Result<()> {
//! let mut config = YamlConfiguration::new();
//! config.load("database:\n  host: localhost\n  port: 5432\nverbose: true\n")?;
//!
//! assert_eq!(config.get_string("database.host", "127.0.0.1"), "localhost");
//! assert_eq!(config.get_i64("database.port", 0), 5432);
//! assert!(config.get_bool("verbose", false));
//!
//! // Absent keys quietly take the default.
//! assert_eq!(config.get_i64("database.pool_size", 8), 8);
//! # Ok(())
//! # }
//! ```
//!
//! For configuration shared between threads, or for one process-wide store,
//! use [`SharedStore`](store::SharedStore):
//!
//! ```rust
//! use dotcfg::prelude::*;
//!
//! SharedStore::global().set("app_name", "demo");
//! assert_eq!(SharedStore::global().get_string("app_name", ""), "demo");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod store;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigAccessor, ConfigError, ConfigMap, ConfigValue, Result, ValueKind,
    };
    pub use crate::ports::ConfigFormat;
    pub use crate::store::{Configuration, SharedStore};

    // Re-export adapters based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonFormat;
    #[cfg(feature = "json")]
    pub use crate::store::JsonConfiguration;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFormat;
    #[cfg(feature = "yaml")]
    pub use crate::store::YamlConfiguration;
}
