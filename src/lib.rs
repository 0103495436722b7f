//! # Multitrie
//!
//! A path-compressed trie mapping keys to sets of values.
//!
//! Keys are finite sequences of symbols: a `&str` is its `char`s, while any
//! slice, `Vec` or array of hashable symbols works as is. Each key holds a set
//! of values, so distinct values can share a key.
//!
//! ## Features
//!
//! - **Multi-valued keys**: inserting never overwrites, duplicates are stored once
//! - **Path compression**: sparse single-child chains collapse into one node
//! - **Prefix views**: `find` and `find_prefix` return sub-tries that can be queried further
//! - **Targeted deletion**: by key, by value, by (key, value) pair or by prefix
//!
//! ## Example
//!
//! ```rust
//! use multitrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("the", 1)
//!     .insert("they", 2)
//!     .insert("they", 3)
//!     .insert("their", 4)
//!     .insert("they're", 5);
//!
//! assert_eq!(trie.find_prefix("th").len(), 5);
//! assert_eq!(trie.find("they").len(), 2);
//! assert!(trie.find_prefix("th").find_prefix("at").is_empty());
//!
//! trie.delete("they");
//! assert!(trie.find("they").is_empty());
//! assert!(trie.contains_key("their"));
//! ```

mod iter;
mod key;
pub mod node;
mod prefix_view;
mod trie;
mod util;

// Re-export public types
pub use crate::iter::{Iter, Keys, Values};
pub use crate::key::TrieKey;
pub use crate::node::TrieNode;
pub use crate::prefix_view::PrefixView;
pub use crate::trie::{Trie, TrieConfig};

/// Structural problems reported by [`Trie::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A compressed chain has no symbols
    #[error("compressed chain at depth {depth} has an empty key")]
    EmptyCompressedKey { depth: usize },
    /// A compressed chain holds no values
    #[error("compressed chain at depth {depth} holds no values")]
    EmptyCompressedValues { depth: usize },
    /// A child was left in place with nothing below it
    #[error("child at depth {depth} holds no values and no children")]
    VacantChild { depth: usize },
}
