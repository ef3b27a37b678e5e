//! Finished tokens.

use std::fmt;

/// A maximal run of pattern bytes that form one logical unit.
///
/// The text is kept exactly as read: not normalized, not validated as UTF-8.
/// Scan bookkeeping (previous/peeked bytes, end flag) lives in
/// [`ScanState`](crate::ScanState), never here.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
    text: Vec<u8>,
}

impl Token {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self { text: text.into() }
    }

    /// Raw bytes of the token.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Token text as `&str`, or `None` if the bytes are not valid UTF-8.
    ///
    /// Multi-byte characters usually split across several tokens (their
    /// bytes differ), so individual tokens of non-ASCII input often
    /// return `None`.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// Number of bytes in the token.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.text
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?})", String::from_utf8_lossy(&self.text))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.text))
    }
}
