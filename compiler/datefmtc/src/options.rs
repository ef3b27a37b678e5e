//! Translation options and their command-line spelling.

use std::borrow::Cow;
use std::io::BufRead;

use datefmt_dict::{Dictionary, DictionaryKind};
use datefmt_lexer_core::{Boundaries, Tokenizer};

/// How a pattern is tokenized and which dictionary maps the tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Built-in dictionary to start from.
    pub dictionary: DictionaryKind,
    /// Token boundary rules.
    pub boundaries: Boundaries,
    /// Extra `(token, replacement)` entries applied on top of `dictionary`.
    pub overrides: Vec<(String, String)>,
}

impl TranslateOptions {
    /// The dictionary these options select.
    ///
    /// Borrows the shared built-in instance unless overrides are present.
    pub fn build_dictionary(&self) -> Cow<'static, Dictionary> {
        let base = self.dictionary.dictionary();
        if self.overrides.is_empty() {
            return Cow::Borrowed(base);
        }
        let mut dict = base.clone();
        dict.extend(self.overrides.iter().cloned());
        Cow::Owned(dict)
    }

    /// A tokenizer over `reader` using these options' boundaries.
    pub fn tokenizer<R: BufRead>(&self, reader: R) -> Tokenizer<R> {
        Tokenizer::new(reader).with_predicate(self.boundaries)
    }
}

/// Parse translation flags, warning about anything unrecognized.
///
/// Positional arguments are ignored here; callers pick them out separately.
///
/// - `--dict=standard|strict`
/// - `--strict` (strict token boundaries)
/// - `--map=TOKEN=REPLACEMENT` (repeatable)
pub fn parse_translate_options(args: &[String]) -> TranslateOptions {
    let mut options = TranslateOptions::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--dict=") {
            if let Some(kind) = DictionaryKind::from_name(name) {
                options.dictionary = kind;
            } else {
                eprintln!("warning: unknown dictionary '{name}', options: standard, strict");
            }
        } else if arg == "--strict" {
            options.boundaries = Boundaries::Strict;
        } else if let Some(entry) = arg.strip_prefix("--map=") {
            match entry.split_once('=') {
                Some((token, replacement)) if !token.is_empty() => {
                    options
                        .overrides
                        .push((token.to_string(), replacement.to_string()));
                }
                _ => eprintln!(
                    "warning: ignoring malformed mapping '{entry}', expected TOKEN=REPLACEMENT"
                ),
            }
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
