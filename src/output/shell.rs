//! POSIX shell `export` statements, for `eval "$(keyresolve resolve --format shell)"`.

use crate::output::PlaceholderRenderer;
use crate::placeholders::ManifestPlaceholders;

/// Shell export renderer.
pub struct ShellRenderer;

impl PlaceholderRenderer for ShellRenderer {
    fn render(&self, placeholders: &ManifestPlaceholders) -> String {
        placeholders
            .iter()
            .map(|(name, value)| format!("export {name}={}\n", quote(value)))
            .collect()
    }
}

/// Single-quote `value`, closing and reopening around embedded quotes.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
