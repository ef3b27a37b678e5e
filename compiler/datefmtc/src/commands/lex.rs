//! `lex`: show how a pattern splits into tokens.

use std::io::Write;

use super::{pattern_label, pattern_reader, positional, CommandError};
use crate::parse_translate_options;

/// Tokenize a pattern and display the token stream.
pub fn lex_command(args: &[String], out: &mut impl Write) -> Result<(), CommandError> {
    let pattern = positional(args).ok_or_else(|| {
        CommandError::Usage("Usage: datefmt lex <pattern|-> [--strict]".to_string())
    })?;
    let options = parse_translate_options(args);
    let tokens = options.tokenizer(pattern_reader(pattern)).read_all()?;

    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        pattern_label(pattern),
        tokens.len()
    )?;
    for token in &tokens {
        writeln!(out, "  {:?} ({})", token.to_string(), token.len())?;
    }
    Ok(())
}
