//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the path-compressed trie, and `TrieConfig`, which controls how it stores keys.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::iter::{Iter, Keys, Values};
use crate::key::TrieKey;
use crate::node::TrieNode;
use crate::prefix_view::PrefixView;
use crate::Error;

/// Settings applied to every insertion into a [`Trie`].
///
/// # Examples
///
/// ```
/// use multitrie::{Trie, TrieConfig};
///
/// let mut trie = Trie::with_config(TrieConfig::new().path_compression(false));
/// trie.insert("abc", 1);
///
/// // Without compression every symbol gets its own node
/// assert_eq!(trie.num_nodes(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieConfig {
    path_compression: bool,
}

impl TrieConfig {
    /// Creates the default configuration: path compression enabled.
    pub fn new() -> Self {
        TrieConfig {
            path_compression: true,
        }
    }

    /// Enables or disables collapsing sparse single-child chains.
    pub fn path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Returns whether path compression is enabled.
    pub fn compresses(&self) -> bool {
        self.path_compression
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A path-compressed trie mapping symbol sequences to sets of values.
///
/// Every key is decomposed into symbols through [`TrieKey`], so `"they"` and
/// `['t', 'h', 'e', 'y']` address the same entry. A key may hold several
/// distinct values; inserting the same pair twice stores it once.
///
/// Sparse single-child chains are collapsed into one node. Compression never
/// changes which values are reachable from which keys.
#[derive(Clone)]
pub struct Trie<S, V> {
    /// The root node of the trie
    pub(crate) root: TrieNode<S, V>,

    config: TrieConfig,
}

impl<S, V> Trie<S, V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use multitrie::Trie;
    ///
    /// let trie = Trie::<char, i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            root: TrieNode::new(),
            config,
        }
    }

    pub(crate) fn from_root(root: TrieNode<S, V>, config: TrieConfig) -> Self {
        Trie { root, config }
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> TrieConfig {
        self.config
    }

    /// Returns the number of (key, value) pairs stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use multitrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("they", 2).insert("they", 3);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.root.subtree_size()
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes backing the trie, the root included.
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }

    /// Removes everything from the trie.
    pub fn clear(&mut self) -> &mut Self {
        self.root.clear();
        self
    }

    /// Checks the structural invariants of the trie.
    ///
    /// Every public operation leaves a valid trie behind, so an error here
    /// points to a bug in this crate.
    pub fn validate(&self) -> Result<(), Error> {
        self.root.validate(0)
    }

    /// Borrows the whole trie as a view.
    pub fn as_view(&self) -> PrefixView<'_, S, V>
    where
        S: Clone,
        V: Clone,
    {
        PrefixView::borrowed(&self.root)
    }

    /// Returns an iterator over every (key, value) pair.
    ///
    /// Values at a node come first, then values at the end of its
    /// compressed chain, then its children in insertion order.
    pub fn iter(&self) -> Iter<'_, S, V>
    where
        S: Clone,
    {
        Iter::new(&self.root)
    }

    /// Returns an iterator over the stored keys. Each key is yielded once.
    pub fn keys(&self) -> Keys<'_, S, V>
    where
        S: Clone,
    {
        Keys::new(&self.root)
    }

    /// Returns an iterator over every stored value.
    pub fn values(&self) -> Values<'_, S, V>
    where
        S: Clone,
    {
        Values::new(&self.root)
    }
}

impl<S, V> Trie<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Associates `value` with `key`.
    ///
    /// Values already stored under `key` are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use multitrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("the", 1).insert("they", 2).insert("they", 3);
    ///
    /// let they: Vec<_> = trie.find("they").values().copied().collect();
    /// assert_eq!(they, vec![2, 3]);
    /// ```
    pub fn insert<K>(&mut self, key: &K, value: V) -> &mut Self
    where
        K: TrieKey<S> + ?Sized,
    {
        let symbols = key.symbols();
        self.root.insert(&symbols, value, self.config.compresses());
        self
    }

    /// Returns a view holding exactly the values stored at `key`.
    ///
    /// Longer keys sharing the prefix are not part of the result; use
    /// [`find_prefix`](Self::find_prefix) for those.
    pub fn find<K>(&self, key: &K) -> PrefixView<'_, S, V>
    where
        K: TrieKey<S> + ?Sized,
    {
        self.as_view().find(key)
    }

    /// Returns a view of everything stored under `prefix`, with keys
    /// relative to the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use multitrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("their", 4).insert("they're", 5);
    ///
    /// let view = trie.find_prefix("the");
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains_key("ir"));
    /// ```
    pub fn find_prefix<K>(&self, prefix: &K) -> PrefixView<'_, S, V>
    where
        K: TrieKey<S> + ?Sized,
    {
        self.as_view().find_prefix(prefix)
    }

    /// Returns `true` if at least one value is stored exactly at `key`.
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: TrieKey<S> + ?Sized,
    {
        self.root
            .get(&key.symbols())
            .map_or(false, |values| !values.is_empty())
    }

    /// Removes every value stored exactly at `key`.
    pub fn delete<K>(&mut self, key: &K) -> &mut Self
    where
        K: TrieKey<S> + ?Sized,
    {
        self.root.delete(&key.symbols());
        self
    }

    /// Removes `value` under every key that holds it.
    pub fn delete_value(&mut self, value: &V) -> &mut Self {
        self.root.delete_value(value);
        self
    }

    /// Removes `value` from `key` only.
    pub fn delete_pair<K>(&mut self, key: &K, value: &V) -> &mut Self
    where
        K: TrieKey<S> + ?Sized,
    {
        self.root.delete_pair(&key.symbols(), value);
        self
    }

    /// Removes every value whose key starts with `prefix`.
    ///
    /// An empty prefix clears the trie.
    pub fn delete_prefix<K>(&mut self, prefix: &K) -> &mut Self
    where
        K: TrieKey<S> + ?Sized,
    {
        self.root.delete_prefix(&prefix.symbols());
        self
    }
}

impl<S, V> Default for Trie<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> fmt::Debug for Trie<S, V>
where
    S: fmt::Debug + Clone,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Two tries are equal when they store the same pairs, whatever their shape
impl<S, V> PartialEq for Trie<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: HashSet<_> = self.iter().collect();
        other.iter().all(|pair| mine.contains(&pair))
    }
}

impl<S, V> Eq for Trie<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq,
{
}

impl<S, V, K> Extend<(K, V)> for Trie<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    K: TrieKey<S>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<S, V, K> FromIterator<(K, V)> for Trie<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    K: TrieKey<S>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, S: Clone, V> IntoIterator for &'a Trie<S, V> {
    type Item = (Vec<S>, &'a V);
    type IntoIter = Iter<'a, S, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
