// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Each node owns its children outright, so the trie is a plain tree: no
//! sharing, no back-references, and dropping the root drops everything.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A node in the Niihau Trie.
///
/// The path from the root to a node spells a prefix. Terminal nodes mark the
/// end of a stored word.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with explicit stacks, and
/// `Debug` prints only this node, so none of them recurse per level.
#[derive(Default)]
pub(crate) struct TrieNode {
    /// Child nodes keyed by the next symbol, in symbol order
    pub(crate) children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node is a complete stored word
    pub(crate) is_terminal: bool,

    /// Number of insertions whose path passes through or ends at this node
    pub(crate) word_count: usize,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `symbol`, if any.
    pub(crate) fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Returns the child reached by `symbol`, creating it when missing.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> &mut TrieNode {
        self.children.entry(symbol).or_default()
    }

    /// Copies this node without its children.
    fn detached(&self) -> TrieNode {
        TrieNode {
            children: BTreeMap::new(),
            is_terminal: self.is_terminal,
            word_count: self.word_count,
        }
    }

    /// Counts the nodes in the subtree rooted here, including this one.
    pub(crate) fn subtree_node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }

    /// Counts the terminal nodes in the subtree rooted here, including this one.
    pub(crate) fn subtree_terminal_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if node.is_terminal {
                count += 1;
            }
            pending.extend(node.children.values());
        }
        count
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Each frame holds a parent's copy, its remaining children and the
        // symbol under which the node being built will be attached.
        let mut open: Vec<(btree_map::Iter<'_, char, TrieNode>, TrieNode, char)> = Vec::new();
        let mut pending = self.children.iter();
        let mut current = self.detached();

        loop {
            match pending.next() {
                Some((&symbol, child)) => {
                    let parent_pending = std::mem::replace(&mut pending, child.children.iter());
                    let parent = std::mem::replace(&mut current, child.detached());
                    open.push((parent_pending, parent, symbol));
                }
                None => match open.pop() {
                    Some((parent_pending, parent, symbol)) => {
                        let finished = std::mem::replace(&mut current, parent);
                        current.children.insert(symbol, finished);
                        pending = parent_pending;
                    }
                    None => return current,
                },
            }
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.is_terminal != right.is_terminal
                || left.word_count != right.word_count
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for ((left_symbol, left_child), (right_symbol, right_child)) in
                left.children.iter().zip(right.children.iter())
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

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.keys())
            .field("is_terminal", &self.is_terminal)
            .field("word_count", &self.word_count)
            .field("subtree_nodes", &self.subtree_node_count())
            .finish()
    }
}

// Dismantled iteratively so that very deep tries never exhaust the stack on drop.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
