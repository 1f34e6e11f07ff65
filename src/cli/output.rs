//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::classifier::Category;
use crate::cli::args::{LexicoArgs, OutputFormat};
use crate::error::Result;
use crate::sequence::{CategoryCounts, TokenSequence};
use crate::sink;

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub tokens: TokenSequence,
    pub summary: CategoryCounts,
    pub output_path: Option<String>,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub lexemes: Vec<Token>,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
    pub words: Option<Vec<String>>,
}

/// Width of the category column in human tables.
const CATEGORY_WIDTH: usize = 22;

/// Output an analysis result in the format selected on the command line.
pub fn output_analysis(result: &AnalysisResult, args: &LexicoArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_analysis_human(&mut stdout, result),
        OutputFormat::Json => write_json(&mut stdout, result, args.pretty),
        OutputFormat::Tsv => sink::write_tokens(&mut stdout, &result.tokens),
    }
}

/// Output tokenizer lexemes.
pub fn output_tokenize(result: &TokenizeResult, args: &LexicoArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_lexemes_human(&mut stdout, result),
        OutputFormat::Json => write_json(&mut stdout, result, args.pretty),
        OutputFormat::Tsv => {
            for lexeme in &result.lexemes {
                let kind = lexeme.token_type.map(|t| t.as_str()).unwrap_or("unknown");
                writeln!(stdout, "{kind}\t{}", lexeme.text)?;
            }
            Ok(())
        }
    }
}

/// Output dictionary statistics.
pub fn output_dictionary(stats: &DictionaryStats, args: &LexicoArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => write_dictionary_human(&mut stdout, stats),
        OutputFormat::Json => write_json(&mut stdout, stats, args.pretty),
        OutputFormat::Tsv => {
            writeln!(stdout, "path\t{}", stats.path)?;
            writeln!(stdout, "word_count\t{}", stats.word_count)?;
            for word in stats.words.iter().flatten() {
                writeln!(stdout, "word\t{word}")?;
            }
            Ok(())
        }
    }
}

/// Write any serializable result as JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the token table, the per-category summary and the total count.
pub fn write_analysis_human<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    writeln!(out, "{:<CATEGORY_WIDTH$}  Lexeme", "Category")?;
    writeln!(out, "{}  {}", "─".repeat(CATEGORY_WIDTH), "─".repeat(6))?;

    for token in &result.tokens {
        writeln!(out, "{:<CATEGORY_WIDTH$}  {}", token.category.as_str(), token.lexeme)?;
    }

    writeln!(out)?;
    for category in Category::ALL {
        writeln!(
            out,
            "{:<CATEGORY_WIDTH$}  {}",
            category.as_str(),
            result.summary.get(category)
        )?;
    }
    writeln!(out, "Total tokens: {}", result.summary.total)?;

    if let Some(path) = &result.output_path {
        writeln!(out, "Saved to: {path}")?;
    }
    Ok(())
}

/// Write lexemes with their kind, one per line.
fn write_lexemes_human<W: Write>(out: &mut W, result: &TokenizeResult) -> Result<()> {
    for lexeme in &result.lexemes {
        let kind = lexeme.token_type.map(|t| t.as_str()).unwrap_or("unknown");
        writeln!(
            out,
            "{:>5}  {:<12} {}  [{}..{}]",
            lexeme.position, kind, lexeme.text, lexeme.start_offset, lexeme.end_offset
        )?;
    }
    writeln!(out, "Total lexemes: {}", result.lexemes.len())?;
    Ok(())
}

/// Write dictionary statistics in human format.
fn write_dictionary_human<W: Write>(out: &mut W, stats: &DictionaryStats) -> Result<()> {
    writeln!(out, "Dictionary: {}", stats.path)?;
    writeln!(out, "Words: {}", stats.word_count)?;

    if let Some(words) = &stats.words {
        writeln!(out)?;
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}
