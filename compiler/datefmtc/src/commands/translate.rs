//! `translate`: print the reference-time layout for a pattern.

use std::io::Write;

use tracing::debug;

use super::{pattern_label, pattern_reader, positional, CommandError};
use crate::{parse_translate_options, translate};

/// `datefmt translate <pattern|-> [--dict=standard|strict] [--strict] [--map=TOKEN=REPLACEMENT]...`
pub fn translate_command(args: &[String], out: &mut impl Write) -> Result<(), CommandError> {
    let pattern = positional(args).ok_or_else(|| {
        CommandError::Usage("Usage: datefmt translate <pattern|-> [options]".to_string())
    })?;
    let options = parse_translate_options(args);
    debug!(
        pattern = pattern_label(pattern),
        dictionary = options.dictionary.name(),
        boundaries = options.boundaries.name(),
        overrides = options.overrides.len(),
        "translate"
    );

    let dictionary = options.build_dictionary();
    let layout = translate(options.tokenizer(pattern_reader(pattern)), &dictionary)?;
    writeln!(out, "{layout}")?;
    Ok(())
}
