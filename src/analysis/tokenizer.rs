//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into lexemes, the first step of the lexical
//! pipeline.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//! - [`spanish::SpanishTokenizer`] - Lowercases and extracts Spanish words,
//!   punctuation marks and digit runs
//!
//! # Examples
//!
//! ```
//! use lexico::analysis::tokenizer::Tokenizer;
//! use lexico::analysis::tokenizer::spanish::SpanishTokenizer;
//!
//! let tokenizer = SpanishTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("¡Hola, mundo!").unwrap().collect();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[1].text, "hola");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared between
/// analyzers running on different threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexico::analysis::token::{Token, TokenStream};
/// use lexico::analysis::tokenizer::Tokenizer;
/// use lexico::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod spanish;

pub use self::regex::RegexTokenizer;
pub use self::spanish::SpanishTokenizer;
