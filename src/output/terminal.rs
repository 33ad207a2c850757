//! Terminal renderer: one line per placeholder, lengths only.
//!
//! Values are never printed so the output is safe to paste into CI logs.

use colored::Colorize;

use crate::output::PlaceholderRenderer;
use crate::placeholders::ManifestPlaceholders;

/// Redacted terminal summary renderer.
pub struct TerminalRenderer;

impl PlaceholderRenderer for TerminalRenderer {
    fn render(&self, placeholders: &ManifestPlaceholders) -> String {
        if placeholders.is_empty() {
            return format!("{}", "  ℹ No placeholders configured.\n".dimmed());
        }

        let width = placeholders.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut output = String::new();
        for (name, value) in placeholders.iter() {
            output.push_str(&format!(
                "  {} {}  {}\n",
                "✔".green().bold(),
                format!("{name:width$}").bold(),
                format!("length={}", value.chars().count()).dimmed(),
            ));
        }
        output
    }
}
