//! Token-to-layout translation.
//!
//! Drains a [`Tokenizer`], maps each token through a [`Dictionary`]
//! (pass-through on miss), concatenates the results and trims surrounding
//! whitespace. A read failure during tokenization aborts the whole
//! translation; no partial output is returned.

use std::io::BufRead;

use datefmt_dict::Dictionary;
use datefmt_lexer_core::{ReadFailure, Token, Tokenizer};
use thiserror::Error;
use tracing::debug;

use crate::TranslateOptions;

/// Translation failed before any output was produced.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The pattern could not be tokenized because its source failed.
    #[error("bad format: pattern could not be tokenized")]
    BadFormat(#[source] ReadFailure),
}

/// Tokenize everything `tokenizer` yields and translate it with `dictionary`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn translate<R: BufRead>(
    mut tokenizer: Tokenizer<R>,
    dictionary: &Dictionary,
) -> Result<String, TranslateError> {
    let tokens = tokenizer.read_all().map_err(TranslateError::BadFormat)?;
    Ok(render(&tokens, dictionary))
}

/// Translate an in-memory pattern with the default token boundaries.
pub fn translate_pattern(
    pattern: &str,
    dictionary: &Dictionary,
) -> Result<String, TranslateError> {
    translate(Tokenizer::for_pattern(pattern), dictionary)
}

/// Translate an in-memory pattern as configured by `options`.
pub fn translate_with(
    pattern: &str,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    let dictionary = options.build_dictionary();
    translate(options.tokenizer(pattern.as_bytes()), &dictionary)
}

/// Map already-scanned tokens through `dictionary`.
///
/// Hits are replaced, misses are copied verbatim, and the result is trimmed.
/// Bytes that do not form valid UTF-8 are replaced with U+FFFD.
pub fn render(tokens: &[Token], dictionary: &Dictionary) -> String {
    let mut out = Vec::with_capacity(tokens.iter().map(Token::len).sum());
    let mut hits = 0usize;

    for token in tokens {
        if let Some(replacement) = dictionary.lookup_bytes(token.as_bytes()) {
            hits += 1;
            out.extend_from_slice(replacement.as_bytes());
        } else {
            out.extend_from_slice(token.as_bytes());
        }
    }

    debug!(tokens = tokens.len(), hits, "tokens rendered");
    String::from_utf8_lossy(&out).trim().to_owned()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
