// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy enumeration of stored words.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over the words stored beneath a node, in lexicographic order.
///
/// Created by [`NiihauTrie::words`](super::NiihauTrie::words) and
/// [`NiihauTrie::words_starting_with`](super::NiihauTrie::words_starting_with).
/// Each pending entry carries its own copy of the word spelled so far, so no
/// shared buffer is rewound between branches.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    pending: Vec<(String, &'a TrieNode)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(prefix: String, start: &'a TrieNode) -> Self {
        Self {
            pending: vec![(prefix, start)],
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((word, node)) = self.pending.pop() {
            // Pushed in reverse so the smallest symbol comes off the stack first
            for (&symbol, child) in node.children.iter().rev() {
                let mut extended = String::with_capacity(word.len() + symbol.len_utf8());
                extended.push_str(&word);
                extended.push(symbol);
                self.pending.push((extended, child));
            }

            if node.is_terminal {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}
