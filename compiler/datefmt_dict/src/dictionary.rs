//! Exact-match token dictionary.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::tables::{STANDARD_TOKENS, STRICT_TOKENS};

/// Maps token text to its replacement.
///
/// Lookup is by exact, case-sensitive string match only. A miss is not an
/// error: callers pass unmatched tokens through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dictionary {
    entries: FxHashMap<String, String>,
}

impl Dictionary {
    /// Empty dictionary. Every token passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a static table. Later duplicates win.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Owned copy of [`STRICT_TOKENS`].
    pub fn strict() -> Self {
        Self::from_pairs(STRICT_TOKENS)
    }

    /// Owned copy of [`STANDARD_TOKENS`].
    pub fn standard() -> Self {
        Self::from_pairs(STANDARD_TOKENS)
    }

    #[inline]
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Look up raw token bytes. Non-UTF-8 bytes never match.
    #[inline]
    pub fn lookup_bytes(&self, token: &[u8]) -> Option<&str> {
        std::str::from_utf8(token)
            .ok()
            .and_then(|text| self.lookup(text))
    }

    /// Add or replace an entry, returning the previous replacement.
    pub fn insert(
        &mut self,
        token: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(token.into(), replacement.into())
    }

    pub fn remove(&mut self, token: &str) -> Option<String> {
        self.entries.remove(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries ordered by token, for stable listings.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Names the built-in dictionaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    /// [`STANDARD_TOKENS`].
    #[default]
    Standard,
    /// [`STRICT_TOKENS`].
    Strict,
}

impl DictionaryKind {
    /// Shared, lazily-built instance of this dictionary.
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            DictionaryKind::Standard => LazyLock::force(&crate::STANDARD),
            DictionaryKind::Strict => LazyLock::force(&crate::STRICT),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DictionaryKind::Standard => "standard",
            DictionaryKind::Strict => "strict",
        }
    }

    /// Parse a dictionary name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(DictionaryKind::Standard),
            "strict" => Some(DictionaryKind::Strict),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
