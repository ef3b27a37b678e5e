//! datefmt driver.
//!
//! Ties the tokenizer ([`datefmt_lexer_core`]) to the dictionaries
//! ([`datefmt_dict`]) and exposes the result as a library plus the
//! `datefmt` command-line tool.
//!
//! ```text
//! pattern ─► Tokenizer ─► Vec<Token> ─► render(Dictionary) ─► layout
//! ```

pub mod commands;
mod options;
mod translate;

use std::sync::Once;

pub use datefmt_dict::{Dictionary, DictionaryKind, STANDARD, STRICT};
pub use datefmt_lexer_core::{Boundaries, ReadFailure, Token, Tokenizer};
pub use options::{parse_translate_options, TranslateOptions};
pub use translate::{render, translate, translate_pattern, translate_with, TranslateError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=datefmtc=debug` or `RUST_LOG=datefmt_lexer_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
