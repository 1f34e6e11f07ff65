//! Character classes of the Spanish lexical grammar.
//!
//! The same three classes drive tokenization, dictionary normalization and
//! classification:
//!
//! - letters: `a`-`z` plus `á é í ó ú ü ñ` (lowercase only)
//! - punctuation: `. , ; : ? ! ¡ ¿`
//! - digits: ASCII `0`-`9`

/// Accented and extra letters of the Spanish alphabet.
pub const SPANISH_EXTRA_LETTERS: [char; 7] = ['á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ'];

/// Punctuation marks recognized as lexemes.
pub const PUNCTUATION_MARKS: [char; 8] = ['.', ',', ';', ':', '?', '!', '¡', '¿'];

/// Regex pattern for a maximal run of Spanish letters.
pub const WORD_PATTERN: &str = "[a-záéíóúüñ]+";

/// Regex pattern for a single punctuation mark.
pub const PUNCTUATION_PATTERN: &str = r"[.,;:?!¡¿]";

/// Regex pattern for a maximal run of ASCII digits.
pub const DIGIT_PATTERN: &str = "[0-9]+";

/// Check whether `c` is a lowercase Spanish letter.
pub fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_lowercase() || SPANISH_EXTRA_LETTERS.contains(&c)
}

/// Check whether `c` is one of the recognized punctuation marks.
pub fn is_punctuation_mark(c: char) -> bool {
    PUNCTUATION_MARKS.contains(&c)
}

/// Check whether `s` is a non-empty run of lowercase Spanish letters.
pub fn is_spanish_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_spanish_letter)
}

/// Check whether `s` is a non-empty run of ASCII digits.
pub fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether `s` is exactly one punctuation mark.
pub fn is_single_punctuation(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_punctuation_mark(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_letters() {
        for c in "abcdefghijklmnopqrstuvwxyzáéíóúüñ".chars() {
            assert!(is_spanish_letter(c), "{c} should be a letter");
        }
        for c in ['A', 'Ñ', 'à', 'ç', 'ö', '1', ' ', '-'] {
            assert!(!is_spanish_letter(c), "{c} should not be a letter");
        }
    }

    #[test]
    fn test_word_shape() {
        assert!(is_spanish_word("pingüino"));
        assert!(is_spanish_word("año"));
        assert!(!is_spanish_word(""));
        assert!(!is_spanish_word("123abc"));
        assert!(!is_spanish_word("buenos días"));
        assert!(!is_spanish_word("français"));
        assert!(!is_spanish_word("Hola"));
    }

    #[test]
    fn test_digit_run() {
        assert!(is_digit_run("0"));
        assert!(is_digit_run("2024"));
        assert!(!is_digit_run(""));
        assert!(!is_digit_run("12a"));
        // Non-ASCII digits are not digit runs
        assert!(!is_digit_run("١٢"));
    }

    #[test]
    fn test_single_punctuation() {
        for mark in PUNCTUATION_MARKS {
            assert!(is_single_punctuation(&mark.to_string()));
        }
        assert!(!is_single_punctuation(""));
        assert!(!is_single_punctuation(".."));
        assert!(!is_single_punctuation("@"));
        assert!(!is_single_punctuation("-"));
    }
}
