//! Read errors raised while pulling bytes out of a pattern source.

use std::io;

use thiserror::Error;

/// The underlying source failed with something other than end of input.
///
/// End of input is never an error: the tokenizer reports it through
/// [`Scan`](crate::Scan). A `ReadFailure` means the reader itself broke,
/// and scanning stops at that point without a partial result.
#[derive(Debug, Error)]
#[error("failed to read pattern byte at offset {offset}")]
pub struct ReadFailure {
    offset: u64,
    #[source]
    source: io::Error,
}

impl ReadFailure {
    pub(crate) fn new(offset: u64, source: io::Error) -> Self {
        Self { offset, source }
    }

    /// Byte offset at which the read or peek was attempted.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
