//! Command line argument parsing for the Lexico CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexico - A lexical classifier for Spanish text
#[derive(Parser, Debug, Clone)]
#[command(name = "lexico")]
#[command(about = "Classify Spanish text into words, digits, punctuation and spelling errors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexicoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexicoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify every token of a text file and save the token table
    Analyze(AnalyzeArgs),

    /// Show the lexemes of a text without classifying them
    Tokenize(TokenizeArgs),

    /// Show dictionary statistics
    Dictionary(DictionaryArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Dictionary CSV file
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Text file to analyze
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// File to write the token table to
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Don't write the token table to a file
    #[arg(long, conflicts_with = "output")]
    pub no_save: bool,

    /// Classify tokens in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Cell delimiter of the dictionary file
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl AnalyzeArgs {
    /// Check if the token table should be saved
    pub fn should_save(&self) -> bool {
        !self.no_save
    }
}

/// Arguments for tokenizing a text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text file to tokenize
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Dictionary CSV file
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Cell delimiter of the dictionary file
    #[arg(long)]
    pub delimiter: Option<char>,

    /// List every word, sorted
    #[arg(short, long)]
    pub list: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON output
    Json,
    /// Tab-separated lines, as in the token output file
    Tsv,
}
