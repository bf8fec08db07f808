//! Lei Trie Implementation
//!
//! This module provides a plain, uncompressed prefix tree. Each edge carries one
//! symbol, each node owns its children in symbol order, and a terminal flag marks
//! the nodes whose root path spells a stored word.
//!
//! # Example
//!
//! ```
//! use lei_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("car");
//! trie.insert("card");
//!
//! assert!(trie.search("car"));
//! assert!(!trie.search("ca"));
//! assert!(trie.contains_prefix("ca"));
//! assert_eq!(trie.iter().collect::<Vec<_>>(), vec!["car", "card"]);
//! ```

mod iter;
mod key;
mod node;

use std::collections::btree_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::config::{try_get_global_config, trie::TrieConfig};
pub use iter::Words;
pub use key::TrieKey;
use node::TrieNode;

/// Lei Trie stores a set of words as paths of symbol-labelled edges.
///
/// Key features:
/// * Exact lookup and prefix checks in time proportional to the input length
/// * Lazy, restartable enumeration in ascending lexicographic order
/// * Generic over the word type: `str` by default, or any `[T]` with ordered symbols
///
/// There is no removal; nodes are created along insertion paths and live as long
/// as the trie.
pub struct Trie<K: ?Sized + TrieKey = str> {
    /// The root node of the trie, spelling the empty word
    root: TrieNode<K::Symbol>,

    /// Configuration options
    config: TrieConfig,

    _key: PhantomData<fn(&K)>,
}

impl<K: ?Sized + TrieKey> Trie<K> {
    /// Creates a new empty `Trie`.
    ///
    /// Uses the `trie` section of the global configuration when it has been
    /// initialized, otherwise the defaults.
    pub fn new() -> Self {
        let config = try_get_global_config()
            .map(|global| global.get().trie.clone())
            .unwrap_or_default();
        Self::with_config(config)
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            _key: PhantomData,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the word's path are created, then the final node is
    /// marked terminal. Inserting the same word again leaves the trie unchanged;
    /// inserting the empty word marks the root.
    pub fn insert(&mut self, word: &K) {
        let mut node = &mut self.root;
        let mut depth = 0usize;
        let mut created = 0usize;

        for symbol in word.symbols() {
            node = match node.children.entry(symbol) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created += 1;
                    entry.insert(TrieNode::new())
                }
            };
            depth += 1;
        }

        let was_terminal = node.is_terminal;
        node.is_terminal = true;

        if self.config.trace_inserts {
            trace!(depth, created, new_word = !was_terminal, "Inserted word");
        }
    }

    /// Checks if a word was inserted into the trie.
    ///
    /// A path that only exists because longer words pass through it does not
    /// count.
    pub fn search(&self, word: &K) -> bool {
        self.find_node(word).is_some_and(|node| node.is_terminal)
    }

    /// Membership test; same as [`search`](Self::search).
    pub fn contains(&self, word: &K) -> bool {
        self.search(word)
    }

    /// Checks if `prefix` is the empty word, a stored word, or a prefix of a
    /// stored word.
    pub fn contains_prefix(&self, prefix: &K) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Alias for [`contains_prefix`](Self::contains_prefix).
    pub fn starts_with(&self, prefix: &K) -> bool {
        self.contains_prefix(prefix)
    }

    /// Returns the number of distinct words in the trie.
    ///
    /// This walks every node on each call, so it's an O(n) operation in the
    /// number of nodes.
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    /// Alias for [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Checks if the trie holds no words.
    ///
    /// Every node lies on the path of some stored word, so only the root needs
    /// inspecting.
    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && self.root.children.is_empty()
    }

    /// Returns a lazy iterator over all stored words in lexicographic order.
    pub fn iter(&self) -> Words<'_, K> {
        Words::new(&self.root, Vec::new())
    }

    /// Returns a lazy iterator over the stored words starting with `prefix`,
    /// in lexicographic order.
    ///
    /// Yields `prefix` itself first when it was inserted as a word. An absent
    /// prefix yields nothing.
    pub fn iter_with_prefix(&self, prefix: &K) -> Words<'_, K> {
        let mut node = &self.root;
        let mut path = Vec::new();

        for symbol in prefix.symbols() {
            match node.children.get(&symbol) {
                Some(child) => node = child,
                None => {
                    trace!(matched = path.len(), "Prefix not present");
                    return Words::empty();
                }
            }
            path.push(symbol);
        }

        Words::new(node, path)
    }

    /// Walks the path spelled by `word`, returning the node it ends on.
    fn find_node(&self, word: &K) -> Option<&TrieNode<K::Symbol>> {
        let mut node = &self.root;
        for symbol in word.symbols() {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }
}

impl<K: ?Sized + TrieKey> Default for Trie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized + TrieKey> Clone for Trie<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            config: self.config.clone(),
            _key: PhantomData,
        }
    }
}

/// Two tries are equal when they store the same words.
impl<K: ?Sized + TrieKey> PartialEq for Trie<K> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<K: ?Sized + TrieKey> Eq for Trie<K> {}

impl<K: ?Sized + TrieKey> fmt::Debug for Trie<K>
where
    K::Owned: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K: ?Sized + TrieKey> IntoIterator for &'a Trie<K> {
    type Item = K::Owned;
    type IntoIter = Words<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'w, K: ?Sized + TrieKey + 'w> Extend<&'w K> for Trie<K> {
    fn extend<I: IntoIterator<Item = &'w K>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'w, K: ?Sized + TrieKey + 'w> FromIterator<&'w K> for Trie<K> {
    fn from_iter<I: IntoIterator<Item = &'w K>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
