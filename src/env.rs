//! Injected environment lookup.
//!
//! Secrets and config overrides are read through an [`Env`] handed in by
//! the caller, never straight from `std::env`. The binary passes
//! [`Env::real()`]; tests pass a fixed map and leave the process
//! environment untouched.

use std::collections::HashMap;

/// Source of environment variables.
#[derive(Clone, Debug)]
pub enum Env {
    /// The process environment.
    Process,
    /// A fixed set of variables; anything else reads as unset.
    Fixed(HashMap<String, String>),
}

impl Env {
    pub fn real() -> Self {
        Env::Process
    }

    /// Fixed variables from `(name, value)` pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Env::Fixed(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// No variables set.
    pub fn empty() -> Self {
        Env::Fixed(HashMap::new())
    }

    /// Value of `name`, or `None` when unset.
    ///
    /// A variable set to the empty string is `Some("")`. Non-UTF-8 process
    /// values read as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        match self {
            Env::Process => std::env::var(name).ok(),
            Env::Fixed(vars) => vars.get(name).cloned(),
        }
    }
}
