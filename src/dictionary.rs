//! Reference dictionary of valid Spanish words.
//!
//! The dictionary is read from a CSV resource whose first row is a header.
//! Every other cell is a candidate entry: it is trimmed and lowercased, and
//! kept only if it is a non-empty run of Spanish letters. Numeric cells
//! (frequency or rank columns) and anything else are skipped silently.
//!
//! ```csv
//! Número,Frecuencia,Palabra
//! 1,9999518,de
//! 2,6277560,la
//! ```
//!
//! # Examples
//!
//! ```
//! use lexico::dictionary::DictionaryLoader;
//!
//! let dictionary = DictionaryLoader::new()
//!     .parse("word,count\nhola,5\nmundo,3\n")
//!     .unwrap();
//!
//! assert_eq!(dictionary.len(), 2);
//! assert!(dictionary.contains("hola"));
//! assert!(dictionary.contains("MUNDO"));
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use csv::ReaderBuilder;
use log::{debug, info};

use crate::analysis::charset::{is_digit_run, is_spanish_word};
use crate::error::{LexicoError, Result};

/// A set of normalized Spanish words.
///
/// Built once per analysis run and only read afterwards, so it can be shared
/// between threads by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: AHashSet::new(),
        }
    }

    /// Load a dictionary from a comma-separated file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DictionaryLoader::new().load(path)
    }

    /// Build a dictionary from candidate words, applying the same filter as
    /// the file loader.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Normalize a candidate cell and add it if it has the shape of a word.
    ///
    /// Returns `true` if the normalized word was newly inserted.
    pub fn add_word(&mut self, cell: &str) -> bool {
        match normalize_entry(cell) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    /// Insert an entry exactly as given, without normalization.
    ///
    /// Lookups lowercase their argument, so an entry holding uppercase
    /// characters is never matched.
    pub fn insert_raw<S: Into<String>>(&mut self, entry: S) -> bool {
        self.words.insert(entry.into())
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let lowered = word.to_lowercase();
        lowered != word && self.words.contains(&lowered)
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the words sorted alphabetically (by code point).
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

/// Trim and lowercase a cell; keep it only if it is a Spanish word.
pub fn normalize_entry(cell: &str) -> Option<String> {
    let word = cell.trim().to_lowercase();
    if word.is_empty() || is_digit_run(&word) {
        return None;
    }
    is_spanish_word(&word).then_some(word)
}

/// Reads dictionary resources in CSV form.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryLoader {
    /// Create a new loader with comma delimiter.
    pub fn new() -> Self {
        DictionaryLoader { delimiter: b',' }
    }

    /// Set a custom delimiter byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Get the delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Read and parse the dictionary file at `path`.
    ///
    /// Fails if the file cannot be read or is not valid UTF-8. Rows that the
    /// CSV reader cannot parse are skipped.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Dictionary> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LexicoError::resource(path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| LexicoError::encoding(path, e))?;

        let dictionary = self.parse(&content)?;
        info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse dictionary content. The first line is treated as a header.
    ///
    /// A blank first line counts as the header, so the row after it is kept.
    pub fn parse(&self, content: &str) -> Result<Dictionary> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut dictionary = Dictionary::new();
        let mut skipped_cells = 0usize;

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    debug!("Skipping malformed dictionary row: {e}");
                    continue;
                }
            };
            if record.position().is_some_and(|p| p.line() == 1) {
                continue;
            }

            for cell in record.iter() {
                match normalize_entry(cell) {
                    Some(word) => {
                        dictionary.words.insert(word);
                    }
                    None if !cell.trim().is_empty() => skipped_cells += 1,
                    None => {}
                }
            }
        }

        debug!(
            "Dictionary parsed: {} words, {} non-word cells skipped",
            dictionary.len(),
            skipped_cells
        );
        Ok(dictionary)
    }
}
