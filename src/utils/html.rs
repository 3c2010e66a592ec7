//! Markup helpers for feed text fields.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Remove angle-bracket-delimited tags, keeping only the enclosed text.
///
/// This is a plain tag-removal pass, not a markup parser: entities are not
/// decoded and an unterminated `<` survives untouched. Stripping twice
/// yields the same result as stripping once.
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
    RE_TAG.replace_all(s, "")
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_plain() {
        assert_eq!(strip_tags("hello world"), "hello world");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_strip_tags_removes_markup() {
        assert_eq!(strip_tags("<p>World</p>"), "World");
        assert_eq!(
            strip_tags(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
        assert_eq!(strip_tags("a<br/>b"), "ab");
    }

    #[test]
    fn test_strip_tags_keeps_entities() {
        // No entity decoding, only tag removal
        assert_eq!(strip_tags("<p>a &amp; b</p>"), "a &amp; b");
    }

    #[test]
    fn test_strip_tags_unterminated() {
        assert_eq!(strip_tags("before <unclosed"), "before <unclosed");
        assert_eq!(strip_tags("dangling > bracket"), "dangling > bracket");
    }

    #[test]
    fn test_strip_tags_idempotent() {
        for input in [
            "<p>World</p>",
            "plain",
            "a <b>bold</b> move",
            "x < y > z",
            "before <unclosed",
            "<<p>>",
        ] {
            let once = strip_tags(input).into_owned();
            let twice = strip_tags(&once).into_owned();
            assert_eq!(once, twice, "stripping `{input}` twice changed result");
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_xml_combined() {
        assert_eq!(
            escape_xml("<a href=\"test\">link & 'text'</a>"),
            "&lt;a href=&quot;test&quot;&gt;link &amp; &apos;text&apos;&lt;/a&gt;"
        );
    }
}
