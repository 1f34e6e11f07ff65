//! The lexical analysis pipeline.
//!
//! ```text
//! dictionary CSV ──► Dictionary ─┐
//!                                ├─► Classifier ──► TokenSequence
//! input text ──► SpanishTokenizer┘
//! ```
//!
//! Resources are read all-or-nothing: a missing or undecodable file aborts the
//! run before anything is classified. Once both are loaded the pipeline
//! cannot fail.
//!
//! # Examples
//!
//! ```
//! use lexico::analyzer::LexicalAnalyzer;
//! use lexico::classifier::Category;
//! use lexico::dictionary::Dictionary;
//!
//! let analyzer = LexicalAnalyzer::new(Dictionary::from_words(["hola", "mundo"])).unwrap();
//! let tokens = analyzer.analyze("Hola, mundo! 123 xyzzy.");
//!
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[0].category, Category::ValidSpanishWord);
//! assert_eq!(tokens[4].category, Category::Digit);
//! assert_eq!(tokens[5].category, Category::SpellingError);
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::analysis::token::IntoTokenStream;
use crate::analysis::tokenizer::spanish::SpanishTokenizer;
use crate::classifier::Classifier;
use crate::config::AnalyzerConfig;
use crate::dictionary::{Dictionary, DictionaryLoader};
use crate::error::{LexicoError, Result};
use crate::sequence::TokenSequence;

/// Tokenizes text and classifies every lexeme against a dictionary.
#[derive(Clone, Debug)]
pub struct LexicalAnalyzer {
    dictionary: Dictionary,
    tokenizer: SpanishTokenizer,
    parallel: bool,
}

impl LexicalAnalyzer {
    /// Create an analyzer that owns `dictionary`.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        Ok(LexicalAnalyzer {
            dictionary,
            tokenizer: SpanishTokenizer::new()?,
            parallel: false,
        })
    }

    /// Create an analyzer, loading the dictionary named in `config`.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = DictionaryLoader::new()
            .with_delimiter(config.delimiter_byte()?)
            .load(&config.dictionary_path)?;

        Ok(Self::new(dictionary)?.with_parallel(config.parallel))
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether classification runs on the rayon thread pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Get the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }


    /// Classify every lexeme of `text`, in document order.
    pub fn analyze(&self, text: &str) -> TokenSequence {
        let lexemes = self.tokenizer.lexemes(text);
        debug!("Tokenized {} bytes into {} lexemes", text.len(), lexemes.len());

        let classifier = Classifier::new(&self.dictionary);
        if self.parallel {
            classifier.classify_parallel(&lexemes)
        } else {
            classifier.classify_stream(lexemes.into_token_stream())
        }
    }

    /// Read `path` in full and analyze its contents.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<TokenSequence> {
        let text = read_input(path.as_ref())?;
        let tokens = self.analyze(&text);
        info!(
            "Classified {} tokens from {}",
            tokens.len(),
            path.as_ref().display()
        );
        Ok(tokens)
    }
}

/// Read a UTF-8 text resource in full.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| LexicoError::resource(path, e))?;
    String::from_utf8(bytes).map_err(|e| LexicoError::encoding(path, e))
}

/// Analyze `text` against `dictionary` in one call.
///
/// Compiles a fresh tokenizer each time; keep a [`LexicalAnalyzer`] around
/// for repeated calls.
pub fn analyze_text(dictionary: &Dictionary, text: &str) -> Result<TokenSequence> {
    let tokenizer = SpanishTokenizer::new()?;
    let classifier = Classifier::new(dictionary);
    Ok(classifier.classify_stream(tokenizer.lexemes(text).into_token_stream()))
}
