//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.keyresolve.toml` in the module directory
//! 4. `~/.config/keyresolve/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{self, MAPS_API_KEY};
use crate::env::Env;
use crate::models::ModuleSettings;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub placeholders: PlaceholderConfig,
    pub module: ModuleSettings,
}

/// Which secrets become manifest placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub keys: Vec<String>,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            keys: vec![MAPS_API_KEY.to_string()],
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, module-local config, then applies
    /// environment variable overrides. CLI flags are applied by the caller
    /// through [`Config::override_keys`].
    pub fn load(module_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: module-local config
        if let Some(dir) = module_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Replace the placeholder keys when the CLI names any.
    pub fn override_keys(&mut self, keys: &[String]) {
        if !keys.is_empty() {
            self.placeholders.keys = keys.to_vec();
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        if other.placeholders != PlaceholderConfig::default() {
            self.placeholders = other.placeholders;
        }

        let default_module = ModuleSettings::default();
        let module = other.module;
        if module.namespace != default_module.namespace {
            self.module.namespace = module.namespace;
        }
        if module.application_id != default_module.application_id {
            self.module.application_id = module.application_id;
        }
        if module.compile_sdk != default_module.compile_sdk {
            self.module.compile_sdk = module.compile_sdk;
        }
        if module.min_sdk != default_module.min_sdk {
            self.module.min_sdk = module.min_sdk;
        }
        if module.target_sdk != default_module.target_sdk {
            self.module.target_sdk = module.target_sdk;
        }
        if module.ndk_version.is_some() {
            self.module.ndk_version = module.ndk_version;
        }
        if module.version_code != default_module.version_code {
            self.module.version_code = module.version_code;
        }
        if module.version_name != default_module.version_name {
            self.module.version_name = module.version_name;
        }
        if module.jvm_target != default_module.jvm_target {
            self.module.jvm_target = module.jvm_target;
        }
        if module.flutter_source != default_module.flutter_source {
            self.module.flutter_source = module.flutter_source;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_KEYS) {
            let keys: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();
            if keys.is_empty() {
                tracing::warn!("ignoring empty {} value", constants::ENV_KEYS);
            } else {
                self.placeholders.keys = keys;
            }
        }
        if let Some(val) = env.get(constants::ENV_APPLICATION_ID) {
            self.module.application_id = val;
        }
    }
}
