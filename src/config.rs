//! Configuration for analysis runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexicoError, Result};

/// Default dictionary resource name.
pub const DEFAULT_DICTIONARY_PATH: &str = "las-mil-palabras-mas-frecuentes.csv";

/// Default input text resource name.
pub const DEFAULT_INPUT_PATH: &str = "texto_entrada.txt";

/// Default token output resource name.
pub const DEFAULT_OUTPUT_PATH: &str = "tokens_salida.txt";

/// Configuration for a lexical analysis run.
///
/// Every field has a default, so a JSON configuration file only needs the
/// fields it overrides:
///
/// ```json
/// { "dictionary_path": "diccionario.csv", "parallel": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// CSV file with the reference dictionary.
    pub dictionary_path: PathBuf,

    /// Text file to analyze.
    pub input_path: PathBuf,

    /// File the token table is written to.
    pub output_path: PathBuf,

    /// Cell delimiter of the dictionary file.
    pub delimiter: char,

    /// Classify lexemes on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: ',',
            parallel: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LexicoError::resource(path, e))?;
        let config: AnalyzerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values.
    pub fn validate(&self) -> Result<()> {
        self.validate_delimiter()?;
        for (name, path) in [
            ("dictionary_path", &self.dictionary_path),
            ("input_path", &self.input_path),
            ("output_path", &self.output_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(LexicoError::config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        self.validate_delimiter()?;
        Ok(self.delimiter as u8)
    }

    fn validate_delimiter(&self) -> Result<()> {
        if self.delimiter.is_ascii() {
            Ok(())
        } else {
            Err(LexicoError::config(format!(
                "delimiter must be an ASCII character, got {:?}",
                self.delimiter
            )))
        }
    }

    /// Set the dictionary path.
    pub fn with_dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Set the input path.
    pub fn with_input_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output path.
    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the dictionary delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
