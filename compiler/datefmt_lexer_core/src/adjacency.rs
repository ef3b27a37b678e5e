//! Adjacency predicates: does the next byte continue the current token?
//!
//! A predicate sees exactly two bytes, the one just consumed and the one
//! peeked ahead of it, and answers whether they belong to the same token.
//! All token boundaries come from this single local decision; the tokenizer
//! never backtracks.
//!
//! Two built-in predicates ship with the crate:
//!
//! - [`DefaultAdjacency`]: identical bytes continue, plus the mixed-case
//!   pairs in [`CONTINUATION_PAIRS`] (so `Yyyy`, `Mmm`, `Dd` and `Day` each
//!   scan as one token).
//! - [`StrictAdjacency`]: only identical bytes continue (`Dd` is two tokens).
//!
//! Any `Fn(u8, u8) -> bool` closure is also a predicate.

/// Byte pairs that continue a token even though the bytes differ.
///
/// Each pair is `(current, next)`. Order matters: `(Y, y)` continues but
/// `(y, Y)` does not. The last two pairs chain so that `Day` is one token.
pub const CONTINUATION_PAIRS: [(u8, u8); 9] = [
    (b'Y', b'y'),
    (b'M', b'm'),
    (b'D', b'd'),
    (b'H', b'h'),
    (b'S', b's'),
    (b'F', b'f'),
    (b'Z', b'z'),
    (b'D', b'a'),
    (b'a', b'y'),
];

/// Decides whether `next` continues the token that `current` belongs to.
///
/// Implementations must be pure: the same pair always gets the same answer.
/// At end of input the tokenizer passes [`SENTINEL`](crate::SENTINEL) as
/// `next`.
pub trait AdjacencyPredicate: Send + Sync {
    fn continues(&self, current: u8, next: u8) -> bool;
}

impl<F> AdjacencyPredicate for F
where
    F: Fn(u8, u8) -> bool + Send + Sync,
{
    #[inline]
    fn continues(&self, current: u8, next: u8) -> bool {
        self(current, next)
    }
}

/// Identical bytes, or one of the [`CONTINUATION_PAIRS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultAdjacency;

impl AdjacencyPredicate for DefaultAdjacency {
    #[inline]
    fn continues(&self, current: u8, next: u8) -> bool {
        current == next
            || matches!(
                (current, next),
                (b'Y', b'y')
                    | (b'M', b'm')
                    | (b'D', b'd' | b'a')
                    | (b'H', b'h')
                    | (b'S', b's')
                    | (b'F', b'f')
                    | (b'Z', b'z')
                    | (b'a', b'y')
            )
    }
}

/// Identical bytes only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StrictAdjacency;

impl AdjacencyPredicate for StrictAdjacency {
    #[inline]
    fn continues(&self, current: u8, next: u8) -> bool {
        current == next
    }
}

/// Names the built-in predicates, for configuration surfaces that pick one
/// by value rather than by type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundaries {
    /// [`DefaultAdjacency`].
    #[default]
    Default,
    /// [`StrictAdjacency`].
    Strict,
}

impl Boundaries {
    pub fn name(self) -> &'static str {
        match self {
            Boundaries::Default => "default",
            Boundaries::Strict => "strict",
        }
    }
}

impl AdjacencyPredicate for Boundaries {
    #[inline]
    fn continues(&self, current: u8, next: u8) -> bool {
        match self {
            Boundaries::Default => DefaultAdjacency.continues(current, next),
            Boundaries::Strict => StrictAdjacency.continues(current, next),
        }
    }
}

#[cfg(test)]
mod tests;
