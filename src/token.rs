//! Tokens of a grin statement and the string quoting rules for values.

use std::fmt::Write;

use crate::colors::Colors;

/// Kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// Bare identifier: `ini`, `section`, `key`
    Bare,
    /// `.`
    Dot,
    /// ` = `
    Equals,
    /// `;`
    Semi,
    /// Quoted and escaped value: `"value"`
    Str,
    /// `{}`
    EmptyObject,
    /// Artifacts of line filters, such as the `--` separator of `grep -C`
    Noise,
    /// Offending input reported by the lexer
    Error,
}

/// A token with its kind and its exact rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Bare, name)
    }

    pub fn dot() -> Self {
        Self::new(TokenKind::Dot, ".")
    }

    pub fn equals() -> Self {
        Self::new(TokenKind::Equals, " = ")
    }

    pub fn semi() -> Self {
        Self::new(TokenKind::Semi, ";")
    }

    /// A string value token; `raw` is quoted and escaped.
    pub fn string(raw: &str) -> Self {
        Self::new(TokenKind::Str, quote(raw))
    }

    pub fn empty_object() -> Self {
        Self::new(TokenKind::EmptyObject, "{}")
    }

    pub fn format(&self) -> &str {
        &self.text
    }

    pub fn format_color(&self, colors: &Colors) -> String {
        match colors.style(self.kind) {
            Some(style) => format!("{style}{}{}", self.text, colors.reset()),
            None => self.text.clone(),
        }
    }
}

/// Quote a raw value as a double-quoted, escaped string.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                // Writing to a String cannot fail
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Remove the surrounding quotes of `s` and decode its escapes.
///
/// Strings that are not wrapped in a pair of double quotes come back
/// unchanged. Unknown escapes keep their backslash.
pub fn unquote(s: &str) -> String {
    let inner = match s
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return s.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut rest = inner;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let escape = &rest[idx + 1..];
        let mut chars = escape.chars();
        let decoded = match chars.next() {
            Some('"') => Some(('"', 1)),
            Some('\\') => Some(('\\', 1)),
            Some('n') => Some(('\n', 1)),
            Some('r') => Some(('\r', 1)),
            Some('t') => Some(('\t', 1)),
            Some('u') => decode_unicode_escape(&escape[1..]).map(|c| (c, 5)),
            _ => None,
        };
        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &escape[consumed..];
            }
            None => {
                out.push('\\');
                rest = escape;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_unicode_escape(s: &str) -> Option<char> {
    let hex = s.get(..4)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Quoting
    // ===========================================

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("hello"), "\"hello\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\path"), r#""C:\\path""#);
        assert_eq!(quote("a\nb\rc\td"), r#""a\nb\rc\td""#);
    }

    #[test]
    fn test_quote_control_characters() {
        assert_eq!(quote("\u{1}"), r#""\u0001""#);
        assert_eq!(quote("bell\u{7}"), r#""bell\u0007""#);
        assert_eq!(quote("\u{1f}"), r#""\u001f""#);
    }

    #[test]
    fn test_quote_passes_non_ascii() {
        assert_eq!(quote("héllo 世界"), "\"héllo 世界\"");
        assert_eq!(quote("\u{7f}"), "\"\u{7f}\"");
    }

    // ===========================================
    // Unquoting
    // ===========================================

    #[test]
    fn test_unquote_plain() {
        assert_eq!(unquote("\"hello\""), "hello");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""say \"hi\"""#), "say \"hi\"");
        assert_eq!(unquote(r#""C:\\path""#), r"C:\path");
        assert_eq!(unquote(r#""a\nb\rc\td""#), "a\nb\rc\td");
        assert_eq!(unquote(r#""\u0001x""#), "\u{1}x");
        assert_eq!(unquote(r#""\u00e9""#), "é");
    }

    #[test]
    fn test_unquote_not_quoted_is_unchanged() {
        assert_eq!(unquote("hello"), "hello");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"open"), "\"open");
        assert_eq!(unquote("close\""), "close\"");
        assert_eq!(unquote(""), "");
    }

    #[test]
    fn test_unquote_unknown_escape_keeps_backslash() {
        assert_eq!(unquote(r#""\x41""#), r"\x41");
        assert_eq!(unquote(r#""\u12""#), r"\u12");
        assert_eq!(unquote(r#""\uzzzz""#), r"\uzzzz");
        assert_eq!(unquote(r#""\ud800""#), r"\ud800");
        assert_eq!(unquote(r#""end\""#), r"end\");
        assert_eq!(unquote(r#""\é""#), r"\é");
    }

    #[test]
    fn test_quote_unquote_inverse() {
        for s in [
            "",
            "plain",
            "with \"quotes\"",
            r"back\slash",
            r"\u0041 literal",
            "new\nline",
            "\u{0}\u{1b}[31m",
            "emoji 🎉",
        ] {
            assert_eq!(unquote(&quote(s)), s, "round trip of {s:?}");
        }
    }

    // ===========================================
    // Formatting
    // ===========================================

    #[test]
    fn test_format_color_wraps_styled_kinds() {
        let colors = Colors::new(true);
        let token = Token::bare("ini");
        assert_eq!(
            token.format_color(&colors),
            format!("{}ini{}", colors.bare, colors.reset())
        );
    }

    #[test]
    fn test_format_color_plain_for_noise() {
        let colors = Colors::new(true);
        let token = Token::new(TokenKind::Noise, "--");
        assert_eq!(token.format_color(&colors), "--");
    }
}
