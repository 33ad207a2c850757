//! Shared types describing the application module being built.
//!
//! Other modules import from here rather than reaching into each other's
//! internals.

pub mod module;

pub use module::{JvmTarget, ModuleError, ModuleSettings};
