//! Token types produced by the tokenizers.
//!
//! # Core Types
//!
//! - [`Token`] - A single lexeme with its position and byte offsets
//! - [`TokenType`] - Shape of the lexeme (word, punctuation mark, digit run)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use lexico::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("hola", 0, 0, 4).with_token_type(TokenType::Word);
//! assert_eq!(token.text, "hola");
//! assert_eq!(token.end_offset, 4);
//! assert_eq!(token.token_type, Some(TokenType::Word));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single lexeme after tokenization.
///
/// Offsets are byte offsets into the text the tokenizer actually scanned. For
/// the Spanish tokenizer that is the lowercased text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the scanned text
    pub start_offset: usize,

    /// The byte offset where this token ends in the scanned text
    pub end_offset: usize,

    /// Which pattern class produced the token, if the tokenizer knows it
    pub token_type: Option<TokenType>,
}

/// Shape of a lexeme, one per tokenizer alternative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// A run of Spanish alphabetic characters
    Word,
    /// A single punctuation mark
    Punctuation,
    /// A run of ASCII digits
    Digit,
}

impl TokenType {
    /// Short lowercase label used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "word",
            TokenType::Punctuation => "punctuation",
            TokenType::Digit => "digit",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
