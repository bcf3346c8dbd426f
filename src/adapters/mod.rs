// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration format implementations.
//!
//! This module contains concrete implementations of the format trait defined
//! in the ports layer. Each adapter implements `ConfigFormat` for one
//! document format and is gated behind the feature flag of the same name.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "json")]
pub use json::JsonFormat;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormat;
