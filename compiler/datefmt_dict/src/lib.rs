//! Token dictionaries for datefmt.
//!
//! A [`Dictionary`] maps the text of one pattern token (`YYYY`, `MMM`,
//! `ffffff`) to its replacement in reference-time syntax (`2006`, `Jan`,
//! `999999`). Two built-in tables ship with the crate:
//!
//! - [`STRICT_TOKENS`]: the common spellings only, case-sensitive.
//! - [`STANDARD_TOKENS`]: adds case variants, `F`-style fractional seconds,
//!   zone names and the `Day` weekday token.
//!
//! Callers may build their own dictionaries with [`Dictionary::from_pairs`],
//! `collect()`, or by extending a built-in one with
//! [`Dictionary::insert`].

use std::sync::LazyLock;

mod dictionary;
mod tables;

pub use dictionary::{Dictionary, DictionaryKind};
pub use tables::{STANDARD_TOKENS, STRICT_TOKENS};

/// Shared [`STRICT_TOKENS`] dictionary.
pub static STRICT: LazyLock<Dictionary> = LazyLock::new(Dictionary::strict);

/// Shared [`STANDARD_TOKENS`] dictionary.
pub static STANDARD: LazyLock<Dictionary> = LazyLock::new(Dictionary::standard);
