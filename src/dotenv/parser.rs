//! Line matcher for `NAME=value` entries.

/// Find the value of `key` in dotfile `contents`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The first line whose trimmed
/// text starts with `KEY=` is authoritative.
/// Its value is everything after the first `=`, trimmed of whitespace and
/// then of one pair of surrounding double quotes. Returns `None` when no
/// line matches.
pub fn lookup(contents: &str, key: &str) -> Option<String> {
    let prefix = format!("{key}=");
    contents
        .split(['\r', '\n'])
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split_once('='))
        .map(|(_, value)| strip_quotes(value.trim()).to_string())
}

/// Remove one pair of surrounding double quotes.
///
/// Quotes are only stripped when both ends carry one, so `"abc` is kept
/// as-is.
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
