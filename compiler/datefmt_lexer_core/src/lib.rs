//! Low-level tokenizer for datefmt patterns.
//!
//! Groups a raw pattern such as `YYYY-MM-dd` into maximal runs of bytes that
//! belong to the same logical token (`YYYY`, `-`, `MM`, `-`, `dd`). Where one
//! token ends and the next begins is decided by a pluggable
//! [`AdjacencyPredicate`] looking at exactly two bytes: the one just consumed
//! and the one peeked ahead of it.
//!
//! # Architecture
//!
//! ```text
//! impl BufRead ─► ByteSource (read_byte / peek) ─► Tokenizer ─► Vec<Token>
//!                                                     ▲
//!                                          AdjacencyPredicate
//! ```
//!
//! The crate has no knowledge of what tokens *mean*. Mapping token text to a
//! target syntax is the job of the dictionary and driver crates.

mod adjacency;
mod byte_source;
mod error;
mod token;
mod tokenizer;

pub use adjacency::{
    AdjacencyPredicate, Boundaries, DefaultAdjacency, StrictAdjacency, CONTINUATION_PAIRS,
};
pub use byte_source::ByteSource;
pub use error::ReadFailure;
pub use token::Token;
pub use tokenizer::{Scan, ScanState, Tokenizer, SENTINEL};
