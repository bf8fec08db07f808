//! Lazy lexicographic enumeration over stored words.

use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;

use super::key::TrieKey;
use super::node::TrieNode;

type Frame<'a, S> = btree_map::Iter<'a, S, TrieNode<S>>;

/// Iterator over the words of a [`Trie`](super::Trie) in ascending
/// lexicographic order.
///
/// Created by [`Trie::iter`](super::Trie::iter) and
/// [`Trie::iter_with_prefix`](super::Trie::iter_with_prefix). The traversal is
/// depth-first and driven entirely by `next`: a terminal node is yielded before
/// any of its descendants, and each frame on the stack is the ordered child
/// iterator of one node on the current path.
pub struct Words<'a, K: ?Sized + TrieKey> {
    /// Start node whose own terminal flag has not been inspected yet.
    start: Option<&'a TrieNode<K::Symbol>>,

    /// One child iterator per node on the current path.
    stack: Vec<Frame<'a, K::Symbol>>,

    /// Symbols from the root to the node on top of the stack.
    path: Vec<K::Symbol>,
}

impl<'a, K: ?Sized + TrieKey> Words<'a, K> {
    /// Starts an enumeration at `node`, with `path` spelling the way to it.
    pub(super) fn new(node: &'a TrieNode<K::Symbol>, path: Vec<K::Symbol>) -> Self {
        Self {
            start: Some(node),
            stack: Vec::new(),
            path,
        }
    }

    /// An enumeration that yields nothing.
    pub(super) fn empty() -> Self {
        Self {
            start: None,
            stack: Vec::new(),
            path: Vec::new(),
        }
    }
}

impl<K: ?Sized + TrieKey> Iterator for Words<'_, K> {
    type Item = K::Owned;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.start.take() {
            self.stack.push(node.children.iter());
            if node.is_terminal {
                return Some(K::from_symbols(&self.path));
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some((symbol, child)) => {
                    self.path.push(symbol.clone());
                    self.stack.push(child.children.iter());
                    if child.is_terminal {
                        return Some(K::from_symbols(&self.path));
                    }
                }
                None => {
                    self.stack.pop();
                    // The start frame has no edge symbol of its own.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl<K: ?Sized + TrieKey> FusedIterator for Words<'_, K> {}

impl<K: ?Sized + TrieKey> fmt::Debug for Words<'_, K>
where
    K::Symbol: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("path", &self.path)
            .field("depth", &self.stack.len())
            .finish()
    }
}
