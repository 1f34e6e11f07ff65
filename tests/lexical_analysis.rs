//! End-to-end tests: dictionary file + input file -> token output file.

use std::ffi::OsStr;
use std::fs;

use clap::Parser;
use lexico::analyzer::read_input;
use lexico::cli::args::LexicoArgs;
use lexico::cli::commands::execute_command;
use lexico::prelude::*;
use lexico::sink::{load_tokens, save_tokens};
use tempfile::TempDir;

const DICTIONARY_CSV: &str = "word,count\nhola,5\nmundo,3\n";

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_dictionary_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "dict.csv", DICTIONARY_CSV.as_bytes());

    let dictionary = Dictionary::load_from_file(&path)?;

    assert_eq!(dictionary.sorted_words(), vec!["hola", "mundo"]);
    Ok(())
}

#[test]
fn test_frequency_list_layout() -> Result<()> {
    // Rank, word and frequency columns, as in common frequency lists
    let temp_dir = TempDir::new().unwrap();
    let csv = "Número,Palabra,Frecuencia\n1,de,9999518\n2,La,6277560\n3,que,4681839\n\
               4,123abc,10\n5,el,4569652\n6,en,4234281\n7,qué,100\n";
    let path = write_file(&temp_dir, "frecuentes.csv", csv.as_bytes());

    let dictionary = Dictionary::load_from_file(&path)?;

    assert_eq!(
        dictionary.sorted_words(),
        vec!["de", "el", "en", "la", "que", "qué"]
    );
    Ok(())
}

#[test]
fn test_full_pipeline() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let dictionary_path = write_file(&temp_dir, "dict.csv", DICTIONARY_CSV.as_bytes());
    let input_path = write_file(&temp_dir, "input.txt", "Hola, mundo! 123 xyzzy.".as_bytes());
    let output_path = temp_dir.path().join("tokens.txt");

    let config = AnalyzerConfig::default()
        .with_dictionary_path(&dictionary_path)
        .with_input_path(&input_path)
        .with_output_path(&output_path);
    let analyzer = LexicalAnalyzer::from_config(&config)?;
    let tokens = analyzer.analyze_file(&config.input_path)?;
    save_tokens(&config.output_path, &tokens)?;

    let expected = vec![
        ClassifiedToken::new(Category::ValidSpanishWord, "hola"),
        ClassifiedToken::new(Category::Punctuation, ","),
        ClassifiedToken::new(Category::ValidSpanishWord, "mundo"),
        ClassifiedToken::new(Category::Punctuation, "!"),
        ClassifiedToken::new(Category::Digit, "123"),
        ClassifiedToken::new(Category::SpellingError, "xyzzy"),
        ClassifiedToken::new(Category::Punctuation, "."),
    ];
    assert_eq!(tokens.tokens(), expected.as_slice());

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "PALABRA_VALIDA_ESPANOL\thola\n\
         PUNTUACION\t,\n\
         PALABRA_VALIDA_ESPANOL\tmundo\n\
         PUNTUACION\t!\n\
         DIGITO\t123\n\
         ERROR_ORTOGRAFICO\txyzzy\n\
         PUNTUACION\t.\n"
    );

    // Reading the file back gives the same sequence
    assert_eq!(load_tokens(&output_path)?, tokens);
    Ok(())
}

#[test]
fn test_empty_input_gives_empty_output() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_file(&temp_dir, "empty.txt", b"");
    let output_path = temp_dir.path().join("tokens.txt");

    let analyzer = LexicalAnalyzer::new(Dictionary::from_words(["hola"]))?;
    let tokens = analyzer.analyze_file(&input_path)?;
    save_tokens(&output_path, &tokens)?;

    assert!(tokens.is_empty());
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
    assert!(load_tokens(&output_path)?.is_empty());
    Ok(())
}

#[test]
fn test_unsupported_characters_are_ignored() -> Result<()> {
    let analyzer = LexicalAnalyzer::new(Dictionary::from_words(["correo"]))?;
    let tokens = analyzer.analyze("correo @ ejemplo");

    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["correo", "ejemplo"]);
    assert_eq!(tokens[1].category, Category::SpellingError);
    Ok(())
}

#[test]
fn test_missing_resources() {
    let temp_dir = TempDir::new().unwrap();

    let err = Dictionary::load_from_file(temp_dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LexicoError::Resource { .. }));

    let err = read_input(temp_dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, LexicoError::Resource { .. }));
}

#[test]
fn test_non_utf8_resources() {
    let temp_dir = TempDir::new().unwrap();
    // "año" in Latin-1
    let latin1 = [b'a', 0xF1, b'o', b'\n'];
    let dictionary_csv = [b"w\n".as_slice(), latin1.as_slice()].concat();
    let dictionary_path = write_file(&temp_dir, "latin1.csv", &dictionary_csv);
    let input_path = write_file(&temp_dir, "latin1.txt", &latin1);

    let err = Dictionary::load_from_file(&dictionary_path).unwrap_err();
    assert!(matches!(err, LexicoError::Encoding { .. }));

    let analyzer = LexicalAnalyzer::new(Dictionary::new()).unwrap();
    let err = analyzer.analyze_file(&input_path).unwrap_err();
    assert!(matches!(err, LexicoError::Encoding { .. }));
}

#[test]
fn test_digit_priority_over_dictionary() -> Result<()> {
    let mut dictionary = Dictionary::from_words(["uno"]);
    dictionary.insert_raw("1");
    let analyzer = LexicalAnalyzer::new(dictionary)?;

    let tokens = analyzer.analyze("uno 1");

    assert_eq!(tokens[0].category, Category::ValidSpanishWord);
    assert_eq!(tokens[1].category, Category::Digit);
    Ok(())
}

#[test]
fn test_cli_analyze_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let dictionary_path = write_file(&temp_dir, "dict.csv", DICTIONARY_CSV.as_bytes());
    let input_path = write_file(&temp_dir, "input.txt", "¿Hola mundo?".as_bytes());
    let output_path = temp_dir.path().join("out.txt");

    let args = LexicoArgs::try_parse_from([
        OsStr::new("lexico"),
        OsStr::new("-q"),
        OsStr::new("-f"),
        OsStr::new("json"),
        OsStr::new("analyze"),
        OsStr::new("-d"),
        dictionary_path.as_os_str(),
        OsStr::new("-i"),
        input_path.as_os_str(),
        OsStr::new("-o"),
        output_path.as_os_str(),
    ])
    .unwrap();

    execute_command(args).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "PUNTUACION\t¿\nPALABRA_VALIDA_ESPANOL\thola\nPALABRA_VALIDA_ESPANOL\tmundo\nPUNTUACION\t?\n"
    );
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let dictionary_path = write_file(&temp_dir, "dict.csv", b"n;w\n1;hola\n");
    let input_path = write_file(&temp_dir, "input.txt", b"hola adios");
    let output_path = temp_dir.path().join("out.txt");

    let config = AnalyzerConfig::default()
        .with_dictionary_path(&dictionary_path)
        .with_input_path(&input_path)
        .with_output_path(&output_path)
        .with_delimiter(';')
        .with_parallel(true);
    let config_path = write_file(
        &temp_dir,
        "config.json",
        serde_json::to_string(&config).unwrap().as_bytes(),
    );

    let args = LexicoArgs::try_parse_from([
        OsStr::new("lexico"),
        OsStr::new("-q"),
        OsStr::new("-f"),
        OsStr::new("tsv"),
        OsStr::new("-c"),
        config_path.as_os_str(),
        OsStr::new("analyze"),
    ])
    .unwrap();

    execute_command(args).unwrap();

    let tokens = load_tokens(&output_path).unwrap();
    assert_eq!(tokens[0], ClassifiedToken::new(Category::ValidSpanishWord, "hola"));
    assert_eq!(tokens[1], ClassifiedToken::new(Category::SpellingError, "adios"));
}
