//! Output renderers: properties, JSON, shell exports, terminal summary.

pub mod json;
pub mod properties;
pub mod shell;
pub mod terminal;

use crate::placeholders::ManifestPlaceholders;

/// Trait for rendering resolved placeholders to an output format.
pub trait PlaceholderRenderer {
    /// Render placeholders to a string.
    fn render(&self, placeholders: &ManifestPlaceholders) -> String;
}
