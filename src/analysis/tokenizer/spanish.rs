//! Tokenizer for Spanish text.
//!
//! The whole input is lowercased, then scanned left to right. At each position
//! the longest prefix of one of three alternatives is taken, tried in order:
//!
//! 1. a run of Spanish letters (`a-z`, `á é í ó ú ü ñ`)
//! 2. one punctuation mark (`. , ; : ? ! ¡ ¿`)
//! 3. a run of ASCII digits
//!
//! Anything else (whitespace, symbols, letters outside the alphabet) is
//! dropped without ending the scan.

use super::Tokenizer;
use super::regex::RegexTokenizer;
use crate::analysis::charset::{
    DIGIT_PATTERN, PUNCTUATION_PATTERN, WORD_PATTERN, is_punctuation_mark,
};
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// Tokenizer producing Spanish lexemes tagged with their [`TokenType`].
///
/// # Examples
///
/// ```
/// use lexico::analysis::token::TokenType;
/// use lexico::analysis::tokenizer::spanish::SpanishTokenizer;
///
/// let tokenizer = SpanishTokenizer::new().unwrap();
/// let tokens = tokenizer.lexemes("Año 2024: ¿qué @pasó?");
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["año", "2024", ":", "¿", "qué", "pasó", "?"]);
/// assert_eq!(tokens[1].token_type, Some(TokenType::Digit));
/// ```
#[derive(Clone, Debug)]
pub struct SpanishTokenizer {
    inner: RegexTokenizer,
}

impl SpanishTokenizer {
    /// Create a new Spanish tokenizer.
    pub fn new() -> Result<Self> {
        let pattern = format!("{WORD_PATTERN}|{PUNCTUATION_PATTERN}|{DIGIT_PATTERN}");
        Ok(SpanishTokenizer {
            inner: RegexTokenizer::with_pattern(&pattern)?,
        })
    }

    /// Get the combined regex pattern.
    pub fn pattern(&self) -> &str {
        self.inner.pattern()
    }

    /// Lowercase `text` and extract its lexemes in document order.
    ///
    /// Offsets refer to the lowercased text.
    pub fn lexemes(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        self.inner
            .tokens(&lowered)
            .into_iter()
            .map(|token| {
                let token_type = lexeme_type(&token.text);
                token.with_token_type(token_type)
            })
            .collect()
    }
}

/// Tell which alternative produced a lexeme from its first character.
fn lexeme_type(lexeme: &str) -> TokenType {
    match lexeme.chars().next() {
        Some(c) if c.is_ascii_digit() => TokenType::Digit,
        Some(c) if is_punctuation_mark(c) => TokenType::Punctuation,
        _ => TokenType::Word,
    }
}

impl Tokenizer for SpanishTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.lexemes(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "spanish"
    }
}
