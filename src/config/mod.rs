//! Configuration loading and layering.
//!
//! Handles `.keyresolve.toml` loading, environment variable overrides,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{Config, ConfigError, PlaceholderConfig};
