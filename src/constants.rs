//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "keyresolve";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.keyresolve.toml` in the module directory).
pub const CONFIG_FILENAME: &str = ".keyresolve.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "keyresolve";

/// Dotfile searched upward from the module directory.
pub const ENV_FILENAME: &str = ".env";

/// Placeholder resolved when nothing else is configured.
pub const MAPS_API_KEY: &str = "MAPS_API_KEY";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_KEYS: &str = "KEYRESOLVE_KEYS";
pub const ENV_APPLICATION_ID: &str = "KEYRESOLVE_APPLICATION_ID";
pub const ENV_LOG: &str = "KEYRESOLVE_LOG";

/// Target triple the binary was compiled for.
pub const TARGET: &str = env!("TARGET");
