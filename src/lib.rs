//! keyresolve — build-time secret resolution for mobile app modules
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod dotenv;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod placeholders;
pub mod resolver;
