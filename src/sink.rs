//! Token output files.
//!
//! One line per classified token, in document order:
//!
//! ```text
//! PALABRA_VALIDA_ESPANOL	hola
//! PUNTUACION	,
//! DIGITO	123
//! ```
//!
//! The category and the lexeme are separated by a single tab. Files written
//! here can be read back into the same [`TokenSequence`].

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::info;

use crate::classifier::{Category, ClassifiedToken};
use crate::error::{LexicoError, Result};
use crate::sequence::TokenSequence;

/// Write `tokens` as tab-separated lines.
pub fn write_tokens<W: Write>(writer: W, tokens: &TokenSequence) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for token in tokens {
        writer.write_record([token.category.as_str(), token.lexeme.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `tokens` to the file at `path`, replacing it.
pub fn save_tokens<P: AsRef<Path>>(path: P, tokens: &TokenSequence) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LexicoError::resource(path, e))?;
    write_tokens(BufWriter::new(file), tokens)?;
    info!("Wrote {} tokens to {}", tokens.len(), path.display());
    Ok(())
}

/// Parse tab-separated token lines back into a sequence.
///
/// Category names may be Spanish or locale-neutral. A line without exactly
/// two fields or with an unknown category is an error.
pub fn read_tokens<R: Read>(reader: R) -> Result<TokenSequence> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut tokens = TokenSequence::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        if record.len() != 2 {
            return Err(LexicoError::output_format(
                line,
                format!("expected 2 tab-separated fields, found {}", record.len()),
            ));
        }

        let category: Category = record[0].parse().map_err(|_| {
            LexicoError::output_format(line, format!("unknown category '{}'", &record[0]))
        })?;
        tokens.push(ClassifiedToken::new(category, &record[1]));
    }

    Ok(tokens)
}

/// Read a token file written by [`save_tokens`].
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<TokenSequence> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LexicoError::resource(path, e))?;
    read_tokens(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenSequence {
        vec![
            ClassifiedToken::new(Category::ValidSpanishWord, "hola"),
            ClassifiedToken::new(Category::Punctuation, "¿"),
            ClassifiedToken::new(Category::Digit, "123"),
            ClassifiedToken::new(Category::SpellingError, "xyzzy"),
        ]
        .into()
    }

    #[test]
    fn test_write_format() {
        let mut buffer = Vec::new();
        write_tokens(&mut buffer, &sample()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "PALABRA_VALIDA_ESPANOL\thola\nPUNTUACION\t¿\nDIGITO\t123\nERROR_ORTOGRAFICO\txyzzy\n"
        );
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        let mut buffer = Vec::new();
        write_tokens(&mut buffer, &TokenSequence::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_read_back() {
        let mut buffer = Vec::new();
        write_tokens(&mut buffer, &sample()).unwrap();

        let tokens = read_tokens(buffer.as_slice()).unwrap();
        assert_eq!(tokens, sample());
    }

    #[test]
    fn test_read_accepts_neutral_names() {
        let tokens = read_tokens("DIGIT\t7\nPUNCTUATION\t.\n".as_bytes()).unwrap();

        assert_eq!(tokens[0].category, Category::Digit);
        assert_eq!(tokens[1].category, Category::Punctuation);
    }

    #[test]
    fn test_read_rejects_missing_tab() {
        let err = read_tokens("DIGITO\t7\nDIGITO 8\n".as_bytes()).unwrap_err();
        match err {
            LexicoError::OutputFormat { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_rejects_unknown_category() {
        let err = read_tokens("VERBO\tcorrer\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LexicoError::OutputFormat { line: 1, .. }));
    }

    #[test]
    fn test_lexeme_with_quote_is_not_quoted() {
        let tokens: TokenSequence =
            vec![ClassifiedToken::new(Category::SpellingError, "a\"b")].into();
        let mut buffer = Vec::new();
        write_tokens(&mut buffer, &tokens).unwrap();

        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "ERROR_ORTOGRAFICO\ta\"b\n");
        assert_eq!(read_tokens(buffer.as_slice()).unwrap(), tokens);
    }
}
