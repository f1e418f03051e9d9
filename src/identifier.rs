//! The alphabet of bare path segments.
//!
//! Shared by the INI reader (section names and keys) and the grin lexer
//! (statement paths), so both directions accept exactly the same words.
//! Letters are the Unicode `L*` categories and digits are `Nd` only.

use unicode_general_category::{get_general_category, GeneralCategory};

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Can `c` start an identifier?
pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Can `c` appear after the first character of an identifier?
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_' || c == '-'
}

/// Check whether `s` is a valid bare identifier.
///
/// Valid identifiers start with a letter (any script) or underscore and
/// continue with letters, digits, underscores or hyphens.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifiers() {
        assert!(is_identifier("ini"));
        assert!(is_identifier("section"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("my-key"));
        assert!(is_identifier("key_2"));
        assert!(is_identifier("a"));
    }

    #[test]
    fn test_unicode_identifiers() {
        assert!(is_identifier("café"));
        assert!(is_identifier("ключ"));
        assert!(is_identifier("設定"));
        assert!(is_identifier("x١٢")); // Arabic-Indic digits continue
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_rejects_leading_digit_or_hyphen() {
        assert!(!is_identifier("123"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("-key"));
    }

    #[test]
    fn test_rejects_punctuation_and_whitespace() {
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier("key="));
        assert!(!is_identifier("a$b"));
        assert!(!is_identifier("tab\there"));
    }

    #[test]
    fn test_rejects_non_letter_alphabetics_and_non_decimal_numbers() {
        assert!(!is_identifier("a½")); // No
        assert!(!is_identifier("x²")); // No
        assert!(!is_identifier("Ⅻ")); // Nl
        assert!(!is_identifier("kⅠ")); // Nl
        assert!(!is_identifier("\u{93e}x")); // Mc, Other_Alphabetic
    }

    #[test]
    fn test_letter_categories() {
        assert!(is_identifier("ǅx")); // Lt
        assert!(is_identifier("ʰa")); // Lm
        assert!(is_identifier("x٣")); // Nd
    }
}
