//! Byte-at-a-time reader with one byte of lookahead.
//!
//! Wraps any [`BufRead`] and exposes the two primitives the tokenizer needs:
//! consume one byte, and look at the next byte without consuming it. The
//! lookahead comes straight from the reader's own buffer (`fill_buf`), so
//! no extra copy of the input is kept.
//!
//! Exhaustion is reported as `Ok(None)`. Interrupted reads are retried;
//! every other I/O error becomes a [`ReadFailure`] tagged with the offset
//! at which it happened.

use std::io::{BufRead, ErrorKind};

use crate::ReadFailure;

/// One-byte-lookahead reader over a buffered source.
#[derive(Debug)]
pub struct ByteSource<R> {
    reader: R,
    /// Number of bytes consumed so far.
    offset: u64,
}

impl<R: BufRead> ByteSource<R> {
    /// Wrap a buffered reader. Nothing is read until the first call.
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0 }
    }

    /// Consume and return the next byte, or `None` once the source is exhausted.
    pub fn read_byte(&mut self) -> Result<Option<u8>, ReadFailure> {
        let byte = self.fill()?;
        if byte.is_some() {
            self.reader.consume(1);
            self.offset += 1;
        }
        Ok(byte)
    }

    /// Return the next byte without consuming it, or `None` at end of input.
    ///
    /// Repeated peeks without an intervening [`read_byte`](Self::read_byte)
    /// return the same byte.
    pub fn peek(&mut self) -> Result<Option<u8>, ReadFailure> {
        self.fill()
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    fn fill(&mut self) -> Result<Option<u8>, ReadFailure> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(ReadFailure::new(self.offset, err)),
            }
        }
    }
}
