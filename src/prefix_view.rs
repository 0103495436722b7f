//! Prefix views into a trie.
//!
//! This module provides the `PrefixView` type, the sub-trie returned by
//! `find` and `find_prefix`. Keys inside a view are relative to the point
//! the view was taken from.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::iter::{Iter, Keys, Values};
use crate::key::TrieKey;
use crate::node::{Descent, TrieNode};
use crate::trie::{Trie, TrieConfig};

/// A view of the sub-trie below a key or prefix.
///
/// A view either borrows a node of the source trie or owns a node built for
/// the lookup, for instance when a prefix ends in the middle of a compressed
/// chain. Both behave the same.
///
/// `find` and `find_prefix` consume the view and keep its lifetime, so
/// lookups can be chained.
///
/// # Examples
///
/// ```
/// use multitrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("they", 2).insert("they", 3).insert("they're", 5).insert("their", 4);
///
/// let view = trie.find_prefix("th").find_prefix("ey");
/// assert_eq!(view.len(), 3);
///
/// let mut values: Vec<_> = view.values().copied().collect();
/// values.sort();
/// assert_eq!(values, vec![2, 3, 5]);
/// ```
#[derive(Clone)]
pub struct PrefixView<'a, S, V>
where
    S: Clone,
    V: Clone,
{
    node: Cow<'a, TrieNode<S, V>>,
}

impl<'a, S, V> PrefixView<'a, S, V>
where
    S: Clone,
    V: Clone,
{
    pub(crate) fn borrowed(node: &'a TrieNode<S, V>) -> Self {
        PrefixView {
            node: Cow::Borrowed(node),
        }
    }

    pub(crate) fn owned(node: TrieNode<S, V>) -> Self {
        PrefixView {
            node: Cow::Owned(node),
        }
    }

    /// A view with nothing in it.
    pub fn empty() -> Self {
        Self::owned(TrieNode::new())
    }

    /// Returns whether this view borrows a node of the source trie.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.node, Cow::Borrowed(_))
    }

    /// Returns the number of (key, value) pairs in this view.
    pub fn len(&self) -> usize {
        self.node.subtree_size()
    }

    /// Returns whether this view contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes backing this view.
    pub fn num_nodes(&self) -> usize {
        self.node.num_nodes()
    }

    /// Returns an iterator over the (key, value) pairs in this view.
    pub fn iter(&self) -> Iter<'_, S, V> {
        Iter::new(&self.node)
    }

    /// Returns an iterator over the keys in this view.
    pub fn keys(&self) -> Keys<'_, S, V> {
        Keys::new(&self.node)
    }

    /// Returns an iterator over the values in this view.
    pub fn values(&self) -> Values<'_, S, V> {
        Values::new(&self.node)
    }

    /// Detaches the view from its source so it can be mutated on its own.
    pub fn into_trie(self) -> Trie<S, V> {
        Trie::from_root(self.node.into_owned(), TrieConfig::default())
    }

    /// Turns the view into one that owns its node.
    fn into_owned<'b>(self) -> PrefixView<'b, S, V> {
        PrefixView::owned(self.node.into_owned())
    }
}

impl<'a, S, V> PrefixView<'a, S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Narrows the view to the values stored exactly at `key`.
    pub fn find<K>(self, key: &K) -> PrefixView<'a, S, V>
    where
        K: TrieKey<S> + ?Sized,
    {
        let values = self
            .node
            .get(&key.symbols())
            .cloned()
            .unwrap_or_else(IndexSet::new);
        PrefixView::owned(TrieNode::with_values(values))
    }

    /// Narrows the view to everything stored under `prefix`.
    ///
    /// An empty prefix returns the view unchanged.
    pub fn find_prefix<K>(self, prefix: &K) -> PrefixView<'a, S, V>
    where
        K: TrieKey<S> + ?Sized,
    {
        let symbols = prefix.symbols();
        if symbols.is_empty() {
            return self;
        }
        match self.node {
            Cow::Borrowed(node) => Self::from_descent(node.descend(&symbols)),
            Cow::Owned(node) => Self::from_descent(node.descend(&symbols)).into_owned(),
        }
    }

    /// Returns `true` if at least one value is stored exactly at `key`,
    /// relative to this view.
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: TrieKey<S> + ?Sized,
    {
        self.node
            .get(&key.symbols())
            .map_or(false, |values| !values.is_empty())
    }

    /// Returns `true` if `value` is stored anywhere in this view.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|stored| stored == value)
    }

    fn from_descent<'n>(descent: Option<Descent<'n, S, V>>) -> PrefixView<'n, S, V> {
        match descent {
            Some(Descent::Node(node)) => PrefixView::borrowed(node),
            Some(Descent::Rebased(node)) => PrefixView::owned(node),
            None => PrefixView::empty(),
        }
    }
}

impl<'a, S, V> fmt::Debug for PrefixView<'a, S, V>
where
    S: fmt::Debug + Clone,
    V: fmt::Debug + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Views compare by content, so a borrowed view equals an equivalent owned one
impl<'a, 'b, S, V> PartialEq<PrefixView<'b, S, V>> for PrefixView<'a, S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn eq(&self, other: &PrefixView<'b, S, V>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: HashSet<_> = self.iter().collect();
        other.iter().all(|pair| mine.contains(&pair))
    }
}

impl<'a, S, V> Eq for PrefixView<'a, S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
}

impl<'v, 'a, S: Clone, V: Clone> IntoIterator for &'v PrefixView<'a, S, V> {
    type Item = (Vec<S>, &'v V);
    type IntoIter = Iter<'v, S, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
