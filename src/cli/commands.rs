//! Command implementations for the Lexico CLI.

use std::time::Instant;

use log::{debug, info};

use crate::analysis::tokenizer::SpanishTokenizer;
use crate::analyzer::{LexicalAnalyzer, read_input};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::dictionary::DictionaryLoader;
use crate::error::Result;
use crate::sink;

/// Execute a CLI command.
pub fn execute_command(args: LexicoArgs) -> Result<()> {
    let config = base_config(&args)?;
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, config, &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, config, &args),
        Command::Dictionary(dictionary_args) => dictionary_stats(dictionary_args, config, &args),
    }
}

/// Configuration from `--config`, or the defaults.
fn base_config(args: &LexicoArgs) -> Result<AnalyzerConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            AnalyzerConfig::load_from_file(path)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Apply analyze flags on top of the base configuration.
pub fn resolve_analyze_config(args: &AnalyzeArgs, base: AnalyzerConfig) -> Result<AnalyzerConfig> {
    let mut config = base;
    if let Some(path) = &args.dictionary {
        config.dictionary_path = path.clone();
    }
    if let Some(path) = &args.input {
        config.input_path = path.clone();
    }
    if let Some(path) = &args.output {
        config.output_path = path.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if args.parallel {
        config.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

/// Load the dictionary, classify the input and save the token table.
fn analyze(args: &AnalyzeArgs, base: AnalyzerConfig, cli_args: &LexicoArgs) -> Result<()> {
    let config = resolve_analyze_config(args, base)?;
    let start_time = Instant::now();

    let analyzer = LexicalAnalyzer::from_config(&config)?;
    debug!(
        "Analyzer ready: {} dictionary words, parallel={}",
        analyzer.dictionary().len(),
        analyzer.is_parallel()
    );
    let tokens = analyzer.analyze_file(&config.input_path)?;

    let output_path = if args.should_save() {
        sink::save_tokens(&config.output_path, &tokens)?;
        Some(config.output_path.to_string_lossy().to_string())
    } else {
        None
    };

    info!("Analysis finished in {}ms", start_time.elapsed().as_millis());

    let result = AnalysisResult {
        summary: tokens.counts(),
        tokens,
        output_path,
    };
    output_analysis(&result, cli_args)
}

/// Print the lexemes of a file or of inline text.
fn tokenize(args: &TokenizeArgs, base: AnalyzerConfig, cli_args: &LexicoArgs) -> Result<()> {
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => read_input(&base.input_path)?,
    };

    let tokenizer = SpanishTokenizer::new()?;
    let result = TokenizeResult {
        lexemes: tokenizer.lexemes(&text),
    };
    output_tokenize(&result, cli_args)
}

/// Print dictionary statistics.
fn dictionary_stats(
    args: &DictionaryArgs,
    base: AnalyzerConfig,
    cli_args: &LexicoArgs,
) -> Result<()> {
    let mut config = base;
    if let Some(path) = &args.dictionary {
        config.dictionary_path = path.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }

    let dictionary = DictionaryLoader::new()
        .with_delimiter(config.delimiter_byte()?)
        .load(&config.dictionary_path)?;

    let stats = DictionaryStats {
        path: config.dictionary_path.to_string_lossy().to_string(),
        word_count: dictionary.len(),
        words: args.list.then(|| {
            dictionary
                .sorted_words()
                .into_iter()
                .map(str::to_string)
                .collect()
        }),
    };
    output_dictionary(&stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexicoError;
    use clap::Parser;
    use std::path::PathBuf;

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let mut full = vec!["lexico", "analyze"];
        full.extend_from_slice(argv);
        match LexicoArgs::try_parse_from(full).unwrap().command {
            Command::Analyze(args) => args,
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = AnalyzerConfig::default().with_input_path("from_config.txt");
        let args = analyze_args(&["-d", "d.csv", "--delimiter", ";", "--parallel"]);

        let config = resolve_analyze_config(&args, base).unwrap();

        assert_eq!(config.dictionary_path, PathBuf::from("d.csv"));
        assert_eq!(config.input_path, PathBuf::from("from_config.txt"));
        assert_eq!(config.delimiter, ';');
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_delimiter_flag() {
        let args = analyze_args(&["--delimiter", "ñ"]);
        let err = resolve_analyze_config(&args, AnalyzerConfig::default()).unwrap_err();

        assert!(matches!(err, LexicoError::Config(_)));
    }

    #[test]
    fn test_missing_dictionary_is_resource_error() {
        let args = LexicoArgs::try_parse_from([
            "lexico",
            "-q",
            "analyze",
            "-d",
            "/nonexistent/palabras.csv",
            "--no-save",
        ])
        .unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(err.is_resource_error());
    }
}
