//! Single-pass tokenizer with one byte of lookahead.
//!
//! Each call to [`Tokenizer::next_token`] consumes bytes until the
//! adjacency predicate says the peeked byte starts a new token, then returns
//! the bytes consumed so far as one [`Token`].
//!
//! # Scan loop
//!
//! 1. Consume one byte into `current` (the old `current` becomes `previous`).
//! 2. Unless end of input was already seen, peek the next byte. A failed
//!    peek sets `at_end` and leaves `peeked` empty; from then on the
//!    predicate sees [`SENTINEL`] as the next byte.
//! 3. Append `current` to the token text.
//! 4. Ask the predicate about `(current, peeked)`. Continue, or close the
//!    token. A token closed at end of input is returned as [`Scan::Final`].
//! 5. If step 1 finds the source exhausted, the pending token (if any) is
//!    force-closed as [`Scan::Final`].
//!
//! End of input is detected one byte early, by the peek, so the last token
//! carries the end-of-input signal itself instead of requiring an extra
//! empty call.
//!
//! # Sentinel
//!
//! The sentinel is only ever passed to the predicate. It is never written
//! into token text, so a real `0x00` at the end of the input survives.

use std::io::{BufRead, BufReader, Read};

use tracing::trace;

use crate::{AdjacencyPredicate, ByteSource, DefaultAdjacency, ReadFailure, Token};

/// Byte the predicate sees as "next" once the input is exhausted.
pub const SENTINEL: u8 = 0;

/// Outcome of one [`Tokenizer::next_token`] call.
///
/// The last token of a stream and the end-of-input signal arrive together
/// as [`Scan::Final`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scan {
    /// A token; more input follows.
    Token(Token),
    /// The last token; the input is exhausted.
    Final(Token),
    /// End of input with no token (empty input, or called after `Final`).
    Exhausted,
}

impl Scan {
    /// Whether this call observed end of input.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Scan::Final(_) | Scan::Exhausted)
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Scan::Token(token) | Scan::Final(token) => Some(token),
            Scan::Exhausted => None,
        }
    }

    pub fn into_token(self) -> Option<Token> {
        match self {
            Scan::Token(token) | Scan::Final(token) => Some(token),
            Scan::Exhausted => None,
        }
    }
}

/// Scan bookkeeping carried across the whole input.
///
/// Owned by exactly one [`Tokenizer`]; not reset between tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    previous: u8,
    current: u8,
    peeked: Option<u8>,
    at_end: bool,
    /// Offset of `current` in the input.
    index: u64,
}

impl ScanState {
    /// Byte consumed before [`current`](Self::current); `0` before the second byte.
    pub fn previous(&self) -> u8 {
        self.previous
    }

    /// Most recently consumed byte; `0` before the first byte.
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Byte after `current`, or `None` once end of input has been seen.
    pub fn peeked(&self) -> Option<u8> {
        self.peeked
    }

    /// Whether the peek has found the end of input.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    /// Offset of `current` in the input.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The peeked byte, or [`SENTINEL`] at end of input.
    #[inline]
    fn next_or_sentinel(&self) -> u8 {
        self.peeked.unwrap_or(SENTINEL)
    }
}

/// Splits a byte stream into [`Token`]s.
///
/// One tokenizer processes one input start to finish. The predicate can be
/// swapped at any point with [`set_predicate`](Self::set_predicate); it
/// applies from the next byte on.
pub struct Tokenizer<R> {
    source: ByteSource<R>,
    state: ScanState,
    predicate: Box<dyn AdjacencyPredicate>,
    /// Set once `Final`/`Exhausted` has been returned or a read failed.
    finished: bool,
}

impl<'a> Tokenizer<&'a [u8]> {
    /// Tokenize an in-memory pattern.
    pub fn for_pattern(pattern: &'a str) -> Self {
        Self::new(pattern.as_bytes())
    }

    /// Tokenize in-memory bytes, which need not be UTF-8.
    pub fn for_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R: Read> Tokenizer<BufReader<R>> {
    /// Tokenize an unbuffered reader (file, stdin, socket).
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> Tokenizer<R> {
    /// Create a tokenizer using [`DefaultAdjacency`].
    pub fn new(reader: R) -> Self {
        Self {
            source: ByteSource::new(reader),
            state: ScanState::default(),
            predicate: Box::new(DefaultAdjacency),
            finished: false,
        }
    }

    /// Replace the predicate at construction time.
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl AdjacencyPredicate + 'static) -> Self {
        self.set_predicate(predicate);
        self
    }

    /// Replace the predicate. Tokens already returned are unaffected.
    pub fn set_predicate(&mut self, predicate: impl AdjacencyPredicate + 'static) {
        self.predicate = Box::new(predicate);
    }

    /// Current scan bookkeeping.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Produce the next token.
    ///
    /// Returns [`Scan::Final`] for the last token and [`Scan::Exhausted`]
    /// for empty input or any call after that. A read failure is returned
    /// immediately; the tokenizer then behaves as exhausted.
    pub fn next_token(&mut self) -> Result<Scan, ReadFailure> {
        if self.finished {
            return Ok(Scan::Exhausted);
        }
        let scan = self.scan();
        if !matches!(scan, Ok(Scan::Token(_))) {
            self.finished = true;
        }
        scan
    }

    /// Drain every remaining token, in order.
    pub fn read_all(&mut self) -> Result<Vec<Token>, ReadFailure> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Scan::Token(token) => tokens.push(token),
                Scan::Final(token) => {
                    tokens.push(token);
                    break;
                }
                Scan::Exhausted => break,
            }
        }
        trace!(count = tokens.len(), "pattern drained");
        Ok(tokens)
    }

    fn scan(&mut self) -> Result<Scan, ReadFailure> {
        let mut text = Vec::new();
        loop {
            if !self.advance()? {
                // True EOF on read: close whatever is pending.
                return Ok(if text.is_empty() {
                    Scan::Exhausted
                } else {
                    Scan::Final(self.close(text))
                });
            }

            let current = self.state.current;
            text.push(current);

            if self
                .predicate
                .continues(current, self.state.next_or_sentinel())
            {
                continue;
            }

            let token = self.close(text);
            return Ok(if self.state.at_end {
                Scan::Final(token)
            } else {
                Scan::Token(token)
            });
        }
    }

    /// Consume one byte and refresh the lookahead.
    ///
    /// Returns `false` when the source had nothing left to consume.
    fn advance(&mut self) -> Result<bool, ReadFailure> {
        let Some(byte) = self.source.read_byte()? else {
            return Ok(false);
        };
        self.state.previous = self.state.current;
        self.state.current = byte;
        self.state.index = self.source.offset() - 1;

        if !self.state.at_end {
            self.state.peeked = self.source.peek()?;
            self.state.at_end = self.state.peeked.is_none();
        }
        Ok(true)
    }

    fn close(&self, text: Vec<u8>) -> Token {
        let token = Token::new(text);
        trace!(
            token = %token,
            len = token.len(),
            end = self.state.index,
            at_end = self.state.at_end,
            "token closed"
        );
        token
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token, ReadFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(scan) => scan.into_token().map(Ok),
            Err(err) => Some(Err(err)),
        }
    }
}

impl<R> std::fmt::Debug for Tokenizer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("state", &self.state)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
