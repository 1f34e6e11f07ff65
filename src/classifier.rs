//! Lexical classification of lexemes.
//!
//! Each lexeme gets exactly one [`Category`]. Rules are evaluated in a fixed
//! order and the first one that matches wins:
//!
//! 1. only ASCII digits: [`Category::Digit`]
//! 2. present in the dictionary: [`Category::ValidSpanishWord`]
//! 3. exactly one punctuation mark: [`Category::Punctuation`]
//! 4. anything else: [`Category::SpellingError`]
//!
//! A digit run is therefore never looked up in the dictionary.
//!
//! # Examples
//!
//! ```
//! use lexico::classifier::{Category, Classifier};
//! use lexico::dictionary::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["hola"]);
//! let classifier = Classifier::new(&dictionary);
//!
//! assert_eq!(classifier.category_of("hola"), Category::ValidSpanishWord);
//! assert_eq!(classifier.category_of("42"), Category::Digit);
//! assert_eq!(classifier.category_of("¿"), Category::Punctuation);
//! assert_eq!(classifier.category_of("xyzzy"), Category::SpellingError);
//! ```

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::charset::{is_digit_run, is_single_punctuation};
use crate::analysis::token::{Token, TokenStream};
use crate::dictionary::Dictionary;
use crate::error::{LexicoError, Result};
use crate::sequence::TokenSequence;

/// Lexical category of a lexeme.
///
/// Serialized with the Spanish names used in token output files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// A run of ASCII digits
    #[serde(rename = "DIGITO", alias = "DIGIT")]
    Digit,
    /// A word found in the dictionary
    #[serde(rename = "PALABRA_VALIDA_ESPANOL", alias = "VALID_SPANISH_WORD")]
    ValidSpanishWord,
    /// A single punctuation mark
    #[serde(rename = "PUNTUACION", alias = "PUNCTUATION")]
    Punctuation,
    /// Anything not recognized as one of the above
    #[serde(rename = "ERROR_ORTOGRAFICO", alias = "SPELLING_ERROR")]
    SpellingError,
}

impl Category {
    /// All categories in rule priority order.
    pub const ALL: [Category; 4] = [
        Category::Digit,
        Category::ValidSpanishWord,
        Category::Punctuation,
        Category::SpellingError,
    ];

    /// Name written to token output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Digit => "DIGITO",
            Category::ValidSpanishWord => "PALABRA_VALIDA_ESPANOL",
            Category::Punctuation => "PUNTUACION",
            Category::SpellingError => "ERROR_ORTOGRAFICO",
        }
    }

    /// Locale-neutral name.
    pub fn english_name(&self) -> &'static str {
        match self {
            Category::Digit => "DIGIT",
            Category::ValidSpanishWord => "VALID_SPANISH_WORD",
            Category::Punctuation => "PUNCTUATION",
            Category::SpellingError => "SPELLING_ERROR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LexicoError;

    /// Accepts both the Spanish and the locale-neutral names.
    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s || category.english_name() == s)
            .ok_or_else(|| LexicoError::analysis(format!("Unknown category: {s}")))
    }
}

/// A lexeme together with its category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedToken {
    pub category: Category,
    pub lexeme: String,
}

impl ClassifiedToken {
    /// Create a new classified token.
    pub fn new<S: Into<String>>(category: Category, lexeme: S) -> Self {
        ClassifiedToken {
            category,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.category, self.lexeme)
    }
}

/// Assigns categories to lexemes using a borrowed dictionary.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Classifier<'a> {
    /// Create a classifier over `dictionary`.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Classifier { dictionary }
    }

    /// Category of a single lexeme. Never fails.
    pub fn category_of(&self, lexeme: &str) -> Category {
        match lexeme {
            l if is_digit_run(l) => Category::Digit,
            l if self.dictionary.contains(l) => Category::ValidSpanishWord,
            l if is_single_punctuation(l) => Category::Punctuation,
            _ => Category::SpellingError,
        }
    }

    /// Classify a single lexeme.
    pub fn classify(&self, lexeme: &str) -> ClassifiedToken {
        ClassifiedToken::new(self.category_of(lexeme), lexeme)
    }

    /// Classify a token stream in order.
    pub fn classify_stream(&self, tokens: TokenStream) -> TokenSequence {
        tokens
            .map(|token| ClassifiedToken::new(self.category_of(&token.text), token.text))
            .collect()
    }

    /// Classify tokens on the rayon thread pool; output keeps input order.
    pub fn classify_parallel(&self, tokens: &[Token]) -> TokenSequence {
        let classified: Vec<ClassifiedToken> = tokens
            .par_iter()
            .map(|token| self.classify(&token.text))
            .collect();
        TokenSequence::from(classified)
    }
}
