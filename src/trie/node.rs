//! Node implementation for the Lei Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node exclusively
//! owns its children, keyed by the symbol on the connecting edge.
//!
//! Tree depth equals the longest stored word, so every whole-tree walk here
//! (counting, cloning, comparing, dropping) keeps its own work stack on the
//! heap instead of recursing.

use std::collections::{btree_map, BTreeMap};
use std::mem;

/// A node in the Lei Trie.
///
/// The path from the root to a node spells a word; the node is terminal when
/// that word was explicitly inserted.
pub struct TrieNode<S> {
    /// Map of symbols to child nodes, ordered by symbol
    pub children: BTreeMap<S, TrieNode<S>>,

    /// Whether this node represents the end of a stored word
    pub is_terminal: bool,
}

impl<S: Ord> TrieNode<S> {
    /// Creates a new empty, non-terminal trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Counts the terminal nodes in the subtree rooted at this node.
    pub fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += usize::from(node.is_terminal);
            pending.extend(node.children.values());
        }

        count
    }
}

impl<S: Ord> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node being copied whose children are still being visited.
struct CloneFrame<'a, S> {
    is_terminal: bool,
    pending: btree_map::Iter<'a, S, TrieNode<S>>,
    copied: BTreeMap<S, TrieNode<S>>,
}

impl<'a, S> CloneFrame<'a, S> {
    fn new(node: &'a TrieNode<S>) -> Self {
        Self {
            is_terminal: node.is_terminal,
            pending: node.children.iter(),
            copied: BTreeMap::new(),
        }
    }

    fn finish(self) -> TrieNode<S> {
        TrieNode {
            children: self.copied,
            is_terminal: self.is_terminal,
        }
    }
}

impl<S: Ord + Clone> Clone for TrieNode<S> {
    fn clone(&self) -> Self {
        let mut root = CloneFrame::new(self);
        let mut stack: Vec<(&S, CloneFrame<'_, S>)> = Vec::new();

        loop {
            let top = match stack.last_mut() {
                Some((_, frame)) => frame,
                None => &mut root,
            };
            if let Some((symbol, child)) = top.pending.next() {
                stack.push((symbol, CloneFrame::new(child)));
                continue;
            }

            // Every child of the top frame is copied; attach it to its parent.
            let Some((symbol, frame)) = stack.pop() else {
                return root.finish();
            };
            let parent = match stack.last_mut() {
                Some((_, parent)) => parent,
                None => &mut root,
            };
            parent.copied.insert(symbol.clone(), frame.finish());
        }
    }
}

impl<S: Ord> PartialEq for TrieNode<S> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((left, right)) = pending.pop() {
            if left.is_terminal != right.is_terminal || left.children.len() != right.children.len() {
                return false;
            }
            for ((left_symbol, left_child), (right_symbol, right_child)) in
                left.children.iter().zip(&right.children)
            {
                if left_symbol != right_symbol {
                    return false;
                }
                pending.push((left_child, right_child));
            }
        }

        true
    }
}

impl<S: Ord> Eq for TrieNode<S> {}

impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        // Detach grandchildren before each child drops, so no drop nests.
        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(children) = pending.pop() {
            for (_, mut child) in children {
                if !child.children.is_empty() {
                    pending.push(mem::take(&mut child.children));
                }
            }
        }
    }
}
