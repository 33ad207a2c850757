//! JSON output renderer.
//!
//! Outputs `{"placeholders": {...}}` format.

use crate::output::PlaceholderRenderer;
use crate::placeholders::ManifestPlaceholders;

/// JSON output renderer.
pub struct JsonRenderer;

impl PlaceholderRenderer for JsonRenderer {
    fn render(&self, placeholders: &ManifestPlaceholders) -> String {
        let output = serde_json::json!({
            "placeholders": placeholders,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
