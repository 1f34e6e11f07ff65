//! # Lexico
//!
//! A lexical classifier for Spanish text.
//!
//! Text is lowercased and split into lexemes (letter runs, punctuation marks,
//! digit runs). Each lexeme is then classified against a reference dictionary
//! loaded from a CSV file:
//!
//! - `DIGITO` for digit runs
//! - `PALABRA_VALIDA_ESPANOL` for dictionary words
//! - `PUNTUACION` for punctuation marks
//! - `ERROR_ORTOGRAFICO` for everything else
//!
//! ```
//! use lexico::prelude::*;
//!
//! let dictionary = DictionaryLoader::new()
//!     .parse("word,count\nhola,5\nmundo,3\n")
//!     .unwrap();
//! let analyzer = LexicalAnalyzer::new(dictionary).unwrap();
//!
//! let tokens = analyzer.analyze("¡Hola, mundo!");
//! let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     vec![
//!         Category::Punctuation,
//!         Category::ValidSpanishWord,
//!         Category::Punctuation,
//!         Category::ValidSpanishWord,
//!         Category::Punctuation,
//!     ]
//! );
//! ```

pub mod analysis;
pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod sequence;
pub mod sink;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::tokenizer::{SpanishTokenizer, Tokenizer};
    pub use crate::analyzer::LexicalAnalyzer;
    pub use crate::classifier::{Category, ClassifiedToken, Classifier};
    pub use crate::config::AnalyzerConfig;
    pub use crate::dictionary::{Dictionary, DictionaryLoader};
    pub use crate::error::{LexicoError, Result};
    pub use crate::sequence::TokenSequence;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
