//! Lazy traversals over a trie or a view.
//!
//! All iterators walk the subtree depth-first: the values at a node, then the
//! values at the end of its compressed chain, then each child in insertion
//! order. Keys are rebuilt from the symbols followed since the starting node.

use std::collections::VecDeque;

use indexmap::{set, IndexSet};

use crate::node::{Body, TrieNode};
use crate::util::join_path;

/// Yields every non-empty value set along with the key it is stored at.
struct Groups<'a, S, V> {
    /// Nodes still to visit, with the key leading to each of them
    stack: Vec<(&'a TrieNode<S, V>, Vec<S>)>,

    /// Groups found at the last visited node, not handed out yet
    pending: VecDeque<(Vec<S>, &'a IndexSet<V>)>,
}

impl<'a, S: Clone, V> Groups<'a, S, V> {
    fn new(root: &'a TrieNode<S, V>) -> Self {
        Groups {
            stack: vec![(root, Vec::new())],
            pending: VecDeque::new(),
        }
    }
}

impl<'a, S: Clone, V> Iterator for Groups<'a, S, V> {
    type Item = (Vec<S>, &'a IndexSet<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(group) = self.pending.pop_front() {
                return Some(group);
            }

            let (node, path) = self.stack.pop()?;
            match &node.body {
                Body::Compressed { key, values } => {
                    if !node.values.is_empty() {
                        self.pending.push_back((path.clone(), &node.values));
                    }
                    self.pending.push_back((join_path(&path, key), values));
                }
                Body::Expanded { children } => {
                    // Reversed so the first child is popped first
                    for (symbol, child) in children.iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(symbol.clone());
                        self.stack.push((child, child_path));
                    }
                    if !node.values.is_empty() {
                        self.pending.push_back((path, &node.values));
                    }
                }
            }
        }
    }
}

/// An iterator over the (key, value) pairs below a node.
///
/// Created by [`Trie::iter`](crate::Trie::iter) and
/// [`PrefixView::iter`](crate::PrefixView::iter).
pub struct Iter<'a, S, V> {
    groups: Groups<'a, S, V>,
    current: Option<(Vec<S>, set::Iter<'a, V>)>,
}

impl<'a, S: Clone, V> Iter<'a, S, V> {
    pub(crate) fn new(root: &'a TrieNode<S, V>) -> Self {
        Iter {
            groups: Groups::new(root),
            current: None,
        }
    }
}

impl<'a, S: Clone, V> Iterator for Iter<'a, S, V> {
    type Item = (Vec<S>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((key.clone(), value));
                }
            }
            let (key, values) = self.groups.next()?;
            self.current = Some((key, values.iter()));
        }
    }
}

/// An iterator over the keys below a node. Each key is yielded once.
pub struct Keys<'a, S, V> {
    groups: Groups<'a, S, V>,
}

impl<'a, S: Clone, V> Keys<'a, S, V> {
    pub(crate) fn new(root: &'a TrieNode<S, V>) -> Self {
        Keys {
            groups: Groups::new(root),
        }
    }
}

impl<'a, S: Clone, V> Iterator for Keys<'a, S, V> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.groups.next().map(|(key, _)| key)
    }
}

/// An iterator over the values below a node.
pub struct Values<'a, S, V> {
    groups: Groups<'a, S, V>,
    current: Option<set::Iter<'a, V>>,
}

impl<'a, S: Clone, V> Values<'a, S, V> {
    pub(crate) fn new(root: &'a TrieNode<S, V>) -> Self {
        Values {
            groups: Groups::new(root),
            current: None,
        }
    }
}

impl<'a, S: Clone, V> Iterator for Values<'a, S, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(|values| values.next()) {
                return Some(value);
            }
            let (_, values) = self.groups.next()?;
            self.current = Some(values.iter());
        }
    }
}
