//! Help-text normalization utilities.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Rewrites `\r\n` line endings to `\n`. A lone `\r` is line content.
pub fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if !raw.contains("\r\n") {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", "\n"))
}

/// Removes ANSI escape sequences and backspace overstrikes left by help
/// dumps captured from a terminal.
pub fn strip_terminal_escapes(raw: &str) -> String {
    // SAFETY: These regexes are compile-time constants and are validated by tests.
    static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("static regex must compile")
    });
    static OVERSTRIKE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r".\x08").expect("static regex must compile"));

    let mut cleaned = ANSI_RE.replace_all(raw, "").into_owned();
    while OVERSTRIKE_RE.is_match(&cleaned) {
        cleaned = OVERSTRIKE_RE.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings_borrow_when_clean() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_line_endings_rewrite_crlf_only() {
        assert_eq!(normalize_line_endings("a\r\nb\rc"), "a\nb\rc");
        assert!(matches!(normalize_line_endings("a\rb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_ansi_colors() {
        assert_eq!(
            strip_terminal_escapes("\x1b[1mGlobal Options\x1b[0m"),
            "Global Options"
        );
    }

    #[test]
    fn test_strip_overstrike_bold() {
        assert_eq!(strip_terminal_escapes("-\x08--\x08-verbose"), "--verbose");
    }
}
