//! Defines how trie keys are decomposed into sequences of symbols.
use std::borrow::Cow;
use std::hash::Hash;

/// A type that can be viewed as a finite sequence of symbols of type `S`.
///
/// A string and the explicit sequence of its characters describe the same key:
/// `"abc"` and `['a', 'b', 'c']` address the same position in a `Trie<char, _>`.
pub trait TrieKey<S: Clone + Hash + Eq> {
    /// Returns the symbols making up this key.
    /// `Cow` allows borrowing when the key already is a slice of symbols,
    /// or owning when the symbols have to be decoded first.
    fn symbols(&self) -> Cow<'_, [S]>;
}

impl TrieKey<char> for str {
    fn symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl TrieKey<char> for String {
    fn symbols(&self) -> Cow<'_, [char]> {
        self.as_str().symbols()
    }
}

impl<S: Clone + Hash + Eq> TrieKey<S> for [S] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self)
    }
}

impl<S: Clone + Hash + Eq> TrieKey<S> for Vec<S> {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<S: Clone + Hash + Eq, const N: usize> TrieKey<S> for [S; N] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(&self[..])
    }
}

impl<'k, S: Clone + Hash + Eq, K: TrieKey<S> + ?Sized> TrieKey<S> for &'k K {
    fn symbols(&self) -> Cow<'_, [S]> {
        (**self).symbols()
    }
}
