//! Command handlers for the `datefmt` CLI.
//!
//! Each submodule implements one subcommand. Handlers take the arguments
//! that follow the subcommand name and write their report to `out`, so the
//! binary stays a thin dispatcher and the handlers can be driven from tests.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::{ReadFailure, TranslateError};

mod dict;
mod lex;
mod translate;

pub use dict::dict_command;
pub use lex::lex_command;
pub use translate::translate_command;

/// Why a command could not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Missing or invalid arguments; the message is the usage line.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error("failed to tokenize pattern")]
    Read(#[from] ReadFailure),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// First positional argument: anything not starting with `--`.
///
/// A lone `-` counts as positional (it names stdin).
fn positional(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| !arg.starts_with("--"))
}

/// Reader for a pattern argument: stdin for `-`, the text itself otherwise.
fn pattern_reader(pattern: &str) -> Box<dyn BufRead + '_> {
    if pattern == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(pattern.as_bytes())
    }
}

/// How a pattern argument is shown in reports.
fn pattern_label(pattern: &str) -> &str {
    if pattern == "-" {
        "<stdin>"
    } else {
        pattern
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
