//! `NAME=value` lines, readable by Gradle as a properties file.

use crate::output::PlaceholderRenderer;
use crate::placeholders::ManifestPlaceholders;

/// Java properties renderer.
pub struct PropertiesRenderer;

impl PlaceholderRenderer for PropertiesRenderer {
    fn render(&self, placeholders: &ManifestPlaceholders) -> String {
        let mut output = String::new();
        for (name, value) in placeholders.iter() {
            output.push_str(name);
            output.push('=');
            output.push_str(&escape(value));
            output.push('\n');
        }
        output
    }
}

/// Escape characters with meaning in `.properties` values.
///
/// Non-ASCII characters become `\uXXXX` UTF-16 escapes because readers
/// decode the file as ISO-8859-1.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // Leading whitespace would be dropped by the reader.
            ' ' if i == 0 => escaped.push_str("\\ "),
            c if c.is_ascii() => escaped.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    escaped.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lines_in_order() {
        let mut placeholders = ManifestPlaceholders::new();
        placeholders.insert("MAPS_API_KEY", "AIzaKey");
        placeholders.insert("OTHER", "x");
        assert_eq!(
            PropertiesRenderer.render(&placeholders),
            "MAPS_API_KEY=AIzaKey\nOTHER=x\n"
        );
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape(" lead"), r"\ lead");
        assert_eq!(escape("a b"), "a b");
    }

    #[test]
    fn escapes_non_ascii_as_utf16_units() {
        assert_eq!(escape("café"), r"caf\u00E9");
        assert_eq!(escape("ключ"), r"\u043A\u043B\u044E\u0447");
        assert_eq!(escape("🗺"), r"\uD83D\uDDFA");
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(PropertiesRenderer.render(&ManifestPlaceholders::new()), "");
    }
}
