//! Configuration file parsing utilities.
//!
//! Helpers for `key = value` files with comment skipping.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is lower-cased with `.`, `-` and spaces folded to `_`
/// - Value has a trailing ` #` comment removed and is trimmed
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_value) = trimmed.split_once('=')?;
    let key = raw_key
        .trim()
        .to_lowercase()
        .replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_value).to_string()))
}

/// What: Strip a trailing inline comment introduced by whitespace followed by `#`.
///
/// Details:
/// - A `#` not preceded by whitespace is kept, so values like `a#b` survive.
fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .find(|&(i, c)| c == '#' && i > 0 && s[..i].ends_with(char::is_whitespace))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        for line in ["", "   ", "# c", "// c", "; c"] {
            assert!(skip_comment_or_empty(line), "{line:?}");
        }
        assert!(!skip_comment_or_empty("debounce_ms = 300"));
    }

    #[test]
    fn parses_and_normalizes_pairs() {
        assert_eq!(
            parse_key_value("  Debounce-MS = 250  # quicker"),
            Some(("debounce_ms".into(), "250".into()))
        );
        assert_eq!(
            parse_key_value("storage.dir=/srv/a#b"),
            Some(("storage_dir".into(), "/srv/a#b".into()))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = value"), None);
        assert_eq!(
            parse_key_value("wishlist_key ="),
            Some(("wishlist_key".into(), String::new()))
        );
    }
}
