//! Manifest placeholders: the named values handed to the platform build.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::env::Env;
use crate::resolver::{self, ResolveError, ResolvedKey};

/// Ordered placeholder name → value map.
///
/// Iteration follows the order keys were requested in. `Debug` never
/// prints values.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManifestPlaceholders {
    values: IndexMap<String, String>,
}

impl ManifestPlaceholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a placeholder, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ManifestPlaceholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(k, v)| (k, format!("[REDACTED; {} chars]", v.chars().count()))))
            .finish()
    }
}

/// Resolve every key in `keys` into placeholders.
///
/// Keys are resolved in order and duplicates only once. The first blank
/// key aborts with [`ResolveError::MissingSecret`].
pub fn resolve_placeholders(
    keys: &[String],
    start_dir: &Path,
    env: &Env,
) -> Result<(ManifestPlaceholders, Vec<ResolvedKey>), ResolveError> {
    let mut placeholders = ManifestPlaceholders::new();
    let mut resolved = Vec::with_capacity(keys.len());

    for name in keys {
        if placeholders.get(name).is_some() {
            continue;
        }
        let key = resolver::resolve_key(name, start_dir, env)?;
        placeholders.insert(key.name.clone(), key.value.clone());
        resolved.push(key);
    }

    Ok((placeholders, resolved))
}
