//! Android application module settings.
//!
//! Mirrors the `android { ... }` block of a Flutter app module: identifiers,
//! SDK levels, versioning and the JVM target used for Java and Kotlin
//! compilation. Values are checked by [`ModuleSettings::validate`] before
//! they are reported to the build.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default namespace and application id of a freshly generated module.
pub const DEFAULT_APPLICATION_ID: &str = "com.example.saferoute_frontend";

/// A single settings violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    #[error("{field} `{value}` is not a valid package name (expected e.g. com.example.app)")]
    InvalidPackageName { field: &'static str, value: String },

    #[error("SDK levels out of order: min_sdk {min} <= target_sdk {target} <= compile_sdk {compile} must hold")]
    SdkOrder { min: u32, target: u32, compile: u32 },

    #[error("version_code must be at least 1")]
    VersionCode,

    #[error("version_name must not be empty")]
    VersionName,
}

/// JVM bytecode level for `compileOptions` and the Kotlin compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum JvmTarget {
    Jvm8,
    Jvm11,
    #[default]
    Jvm17,
    Jvm21,
}

impl TryFrom<u32> for JvmTarget {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(JvmTarget::Jvm8),
            11 => Ok(JvmTarget::Jvm11),
            17 => Ok(JvmTarget::Jvm17),
            21 => Ok(JvmTarget::Jvm21),
            other => Err(format!("unsupported jvm_target {other}; expected 8, 11, 17 or 21")),
        }
    }
}

impl From<JvmTarget> for u32 {
    fn from(target: JvmTarget) -> Self {
        match target {
            JvmTarget::Jvm8 => 8,
            JvmTarget::Jvm11 => 11,
            JvmTarget::Jvm17 => 17,
            JvmTarget::Jvm21 => 21,
        }
    }
}

impl fmt::Display for JvmTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JvmTarget::Jvm8 => write!(f, "1.8"),
            other => write!(f, "{}", u32::from(*other)),
        }
    }
}

/// Build settings for one application module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    pub namespace: String,
    pub application_id: String,
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,
    pub version_code: u32,
    pub version_name: String,
    pub jvm_target: JvmTarget,
    /// Path from the module to the Flutter project root.
    pub flutter_source: String,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_APPLICATION_ID.to_string(),
            application_id: DEFAULT_APPLICATION_ID.to_string(),
            compile_sdk: 35,
            min_sdk: 21,
            target_sdk: 35,
            ndk_version: None,
            version_code: 1,
            version_name: "1.0.0".to_string(),
            jvm_target: JvmTarget::default(),
            flutter_source: "../..".to_string(),
        }
    }
}

impl ModuleSettings {
    /// Check the settings, returning every violation found.
    pub fn validate(&self) -> Result<(), Vec<ModuleError>> {
        let mut errors = Vec::new();

        if !is_package_name(&self.namespace) {
            errors.push(ModuleError::InvalidPackageName {
                field: "namespace",
                value: self.namespace.clone(),
            });
        }
        if !is_package_name(&self.application_id) {
            errors.push(ModuleError::InvalidPackageName {
                field: "application_id",
                value: self.application_id.clone(),
            });
        }
        if !(self.min_sdk <= self.target_sdk && self.target_sdk <= self.compile_sdk) {
            errors.push(ModuleError::SdkOrder {
                min: self.min_sdk,
                target: self.target_sdk,
                compile: self.compile_sdk,
            });
        }
        if self.version_code == 0 {
            errors.push(ModuleError::VersionCode);
        }
        if self.version_name.trim().is_empty() {
            errors.push(ModuleError::VersionName);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Dot-separated Java identifiers, at least two segments.
fn is_package_name(value: &str) -> bool {
    let segments: Vec<&str> = value.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|seg| {
            let mut chars = seg.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
