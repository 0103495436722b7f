//! Node implementation for the path-compressed trie.
//!
//! A `TrieNode` owns the values stored exactly at its position plus a `Body`
//! that is either a compressed chain of symbols or a map of real children.
//! Each child is exclusively owned by its parent, so a trie is a plain tree.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::util::prefix_match;
use crate::Error;

/// The shape of the subtree below a node.
#[derive(Debug, Clone)]
pub(crate) enum Body<S, V> {
    /// A collapsed chain of single-child nodes. `key` is never empty and
    /// `values` is never empty; they are attached at the end of the chain.
    Compressed { key: Vec<S>, values: IndexSet<V> },
    /// Real children keyed by the next symbol. A fresh leaf has none.
    Expanded { children: IndexMap<S, TrieNode<S, V>> },
}

impl<S, V> Default for Body<S, V> {
    fn default() -> Self {
        Body::Expanded {
            children: IndexMap::new(),
        }
    }
}

/// A single node of the trie.
///
/// Nodes are not built directly by users; they are reached through
/// [`Trie`](crate::Trie) and [`PrefixView`](crate::PrefixView).
#[derive(Debug, Clone)]
pub struct TrieNode<S, V> {
    /// Values stored at this node's own position
    pub(crate) values: IndexSet<V>,

    /// Compressed chain or real children
    pub(crate) body: Body<S, V>,
}

impl<S, V> Default for TrieNode<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> TrieNode<S, V> {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            values: IndexSet::new(),
            body: Body::default(),
        }
    }

    /// Creates a leaf node holding `values` at its own position
    pub(crate) fn with_values(values: IndexSet<V>) -> Self {
        TrieNode {
            values,
            body: Body::default(),
        }
    }

    /// Creates a node whose only content is a compressed chain.
    /// An empty chain puts the values at the node itself.
    pub(crate) fn with_chain(key: Vec<S>, values: IndexSet<V>) -> Self {
        if key.is_empty() {
            return Self::with_values(values);
        }
        TrieNode {
            values: IndexSet::new(),
            body: Body::Compressed { key, values },
        }
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let below = match &self.body {
            Body::Compressed { values, .. } => values.len(),
            Body::Expanded { children } => children.values().map(TrieNode::subtree_size).sum(),
        };
        self.values.len() + below
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn num_nodes(&self) -> usize {
        match &self.body {
            Body::Compressed { .. } => 1,
            Body::Expanded { children } => {
                1 + children.values().map(TrieNode::num_nodes).sum::<usize>()
            }
        }
    }

    /// Returns whether this node has no values and no children.
    /// Such a node is pruned from its parent.
    pub fn is_vacant(&self) -> bool {
        self.values.is_empty()
            && matches!(&self.body, Body::Expanded { children } if children.is_empty())
    }

    /// Returns whether this node holds a compressed chain
    pub fn is_compressed(&self) -> bool {
        matches!(self.body, Body::Compressed { .. })
    }

    /// Drops everything stored in this subtree
    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.body = Body::default();
    }

    /// Checks the structural invariants of this subtree.
    pub(crate) fn validate(&self, depth: usize) -> Result<(), Error> {
        match &self.body {
            Body::Compressed { key, values } => {
                if key.is_empty() {
                    return Err(Error::EmptyCompressedKey { depth });
                }
                if values.is_empty() {
                    return Err(Error::EmptyCompressedValues { depth });
                }
                Ok(())
            }
            Body::Expanded { children } => {
                for child in children.values() {
                    if child.is_vacant() {
                        return Err(Error::VacantChild { depth: depth + 1 });
                    }
                    child.validate(depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl<S, V> TrieNode<S, V>
where
    S: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Inserts `value` at `key`, relative to this node.
    pub(crate) fn insert(&mut self, key: &[S], value: V, compress: bool) {
        if let Body::Compressed { key: chain, values } = &mut self.body {
            if chain.as_slice() == key {
                values.insert(value);
                return;
            }
            self.expand();
        }

        if key.is_empty() {
            self.values.insert(value);
            return;
        }

        if compress && self.is_vacant() {
            trace!(len = key.len(), "compressing chain");
            let mut values = IndexSet::new();
            values.insert(value);
            self.body = Body::Compressed {
                key: key.to_vec(),
                values,
            };
            return;
        }

        if let Body::Expanded { children } = &mut self.body {
            children
                .entry(key[0].clone())
                .or_insert_with(TrieNode::new)
                .insert(&key[1..], value, compress);
        }
    }

    /// Materializes a compressed chain into a real child holding its tail.
    fn expand(&mut self) {
        if let Body::Compressed { key, values } = std::mem::take(&mut self.body) {
            trace!(len = key.len(), "expanding compressed chain");
            let mut symbols = key.into_iter();
            let mut children = IndexMap::new();
            if let Some(first) = symbols.next() {
                children.insert(first, TrieNode::with_chain(symbols.collect(), values));
            }
            self.body = Body::Expanded { children };
        }
    }

    /// Returns the values stored exactly at `key`, if any path leads there.
    pub(crate) fn get(&self, key: &[S]) -> Option<&IndexSet<V>> {
        let mut current = self;
        let mut remaining = key;

        loop {
            if remaining.is_empty() {
                return Some(&current.values);
            }
            match &current.body {
                Body::Compressed { key: chain, values } => {
                    return if chain.as_slice() == remaining {
                        Some(values)
                    } else {
                        None
                    };
                }
                Body::Expanded { children } => {
                    current = children.get(&remaining[0])?;
                    remaining = &remaining[1..];
                }
            }
        }
    }

    /// Walks down `prefix` and returns what lies below it.
    ///
    /// A prefix ending on a real node borrows that node. A prefix ending
    /// inside a compressed chain produces a new node re-based on the rest of
    /// the chain. `None` means nothing is stored under the prefix.
    pub(crate) fn descend(&self, prefix: &[S]) -> Option<Descent<'_, S, V>> {
        let mut current = self;
        let mut remaining = prefix;

        loop {
            if remaining.is_empty() {
                return Some(Descent::Node(current));
            }
            match &current.body {
                Body::Compressed { key: chain, values } => {
                    let matched = prefix_match(remaining, 0, chain);
                    if matched < remaining.len() {
                        return None;
                    }
                    return Some(Descent::Rebased(TrieNode::with_chain(
                        chain[matched..].to_vec(),
                        values.clone(),
                    )));
                }
                Body::Expanded { children } => {
                    current = children.get(&remaining[0])?;
                    remaining = &remaining[1..];
                }
            }
        }
    }

    /// Removes every value stored exactly at `key`.
    pub(crate) fn delete(&mut self, key: &[S]) {
        if key.is_empty() {
            self.values.clear();
            return;
        }
        match &mut self.body {
            Body::Compressed { key: chain, .. } => {
                if chain.as_slice() == key {
                    self.body = Body::default();
                }
            }
            Body::Expanded { children } => {
                if let Some(child) = children.get_mut(&key[0]) {
                    child.delete(&key[1..]);
                }
                prune_child(children, &key[0]);
            }
        }
    }

    /// Removes `value` wherever it occurs in this subtree.
    pub(crate) fn delete_value(&mut self, value: &V) {
        self.values.shift_remove(value);
        match &mut self.body {
            Body::Compressed { values, .. } => {
                values.shift_remove(value);
                if values.is_empty() {
                    self.body = Body::default();
                }
            }
            Body::Expanded { children } => {
                for child in children.values_mut() {
                    child.delete_value(value);
                }
                children.retain(|_, child| {
                    if child.is_vacant() {
                        trace!("pruning vacant child");
                        false
                    } else {
                        true
                    }
                });
            }
        }
    }

    /// Removes `value` from the values stored exactly at `key`.
    pub(crate) fn delete_pair(&mut self, key: &[S], value: &V) {
        if key.is_empty() {
            self.values.shift_remove(value);
            return;
        }
        match &mut self.body {
            Body::Compressed { key: chain, values } => {
                if chain.as_slice() == key {
                    values.shift_remove(value);
                    if values.is_empty() {
                        self.body = Body::default();
                    }
                }
            }
            Body::Expanded { children } => {
                if let Some(child) = children.get_mut(&key[0]) {
                    child.delete_pair(&key[1..], value);
                }
                prune_child(children, &key[0]);
            }
        }
    }

    /// Removes every value whose key starts with `prefix`.
    pub(crate) fn delete_prefix(&mut self, prefix: &[S]) {
        if prefix.is_empty() {
            self.clear();
            return;
        }
        match &mut self.body {
            Body::Compressed { key: chain, .. } => {
                if chain.starts_with(prefix) {
                    self.body = Body::default();
                }
            }
            Body::Expanded { children } => {
                if let Some(child) = children.get_mut(&prefix[0]) {
                    child.delete_prefix(&prefix[1..]);
                }
                prune_child(children, &prefix[0]);
            }
        }
    }
}

/// Removes the child under `symbol` if it no longer holds anything.
fn prune_child<S: Hash + Eq, V>(children: &mut IndexMap<S, TrieNode<S, V>>, symbol: &S) {
    if children.get(symbol).map_or(false, TrieNode::is_vacant) {
        trace!("pruning vacant child");
        children.shift_remove(symbol);
    }
}

/// The outcome of walking a prefix down a node.
pub(crate) enum Descent<'a, S, V> {
    /// The prefix ends on an existing node
    Node(&'a TrieNode<S, V>),
    /// The prefix ends inside a compressed chain
    Rebased(TrieNode<S, V>),
}
