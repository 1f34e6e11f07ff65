//! Text analysis: character classes, tokens and tokenizers.

pub mod charset;
pub mod token;
pub mod tokenizer;

pub use token::*;
pub use tokenizer::*;
