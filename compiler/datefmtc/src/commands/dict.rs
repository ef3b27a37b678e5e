//! `dict`: list a built-in dictionary.

use std::io::Write;

use super::{positional, CommandError};
use crate::DictionaryKind;

pub fn dict_command(args: &[String], out: &mut impl Write) -> Result<(), CommandError> {
    let kind = match positional(args) {
        None => DictionaryKind::default(),
        Some(name) => DictionaryKind::from_name(name).ok_or_else(|| {
            CommandError::Usage(format!(
                "unknown dictionary '{name}', options: standard, strict"
            ))
        })?,
    };

    let dict = kind.dictionary();
    writeln!(out, "{} dictionary ({} entries):", kind.name(), dict.len())?;
    for (token, replacement) in dict.sorted() {
        writeln!(out, "  {token:<10} {replacement}")?;
    }
    Ok(())
}
