// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Compact text encoding of a trie.
//!
//! The encoding is a depth-first walk that needs no parentheses or lengths:
//!
//! ```text
//! Subtree     := Terminator? (SYMBOL Subtree)* CloseMarker
//! Terminator  := "]"    emitted iff the node is terminal, before any children
//! CloseMarker := ">"    emitted once per node, after all of its children
//! ```
//!
//! Both control symbols are reserved and can never be stored in a word. Every
//! node, the root and leaves included, contributes exactly one `>`, so the
//! empty trie encodes as `">"` and a trie holding only `""` as `"]>"`.
//!
//! Both directions run on explicit stacks, so arbitrarily deep tries never
//! exhaust the call stack.

use super::error::DecodeError;
use super::node::TrieNode;

/// Marks a terminal node. Emitted before the node's children.
pub const TERMINATOR: char = ']';

/// Closes a node. Emitted after the node's children.
pub const CLOSE_MARKER: char = '>';

/// Returns true if `symbol` is reserved by the encoding.
pub fn is_reserved(symbol: char) -> bool {
    symbol == TERMINATOR || symbol == CLOSE_MARKER
}

/// Finds the first reserved symbol in `word`, with its `char` index.
pub(crate) fn find_reserved(word: &str) -> Option<(usize, char)> {
    word.chars().enumerate().find(|&(_, symbol)| is_reserved(symbol))
}

enum Step<'a> {
    Enter(Option<char>, &'a TrieNode),
    Close,
}

/// Encodes the subtree rooted at `root`.
pub(crate) fn encode(root: &TrieNode) -> String {
    let mut out = String::new();
    let mut steps = vec![Step::Enter(None, root)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(symbol, node) => {
                if let Some(symbol) = symbol {
                    out.push(symbol);
                }
                if node.is_terminal {
                    out.push(TERMINATOR);
                }
                steps.push(Step::Close);
                // Reversed so the smallest symbol is popped first
                for (&symbol, child) in node.children.iter().rev() {
                    steps.push(Step::Enter(Some(symbol), child));
                }
            }
            Step::Close => out.push(CLOSE_MARKER),
        }
    }

    out
}

/// A node whose subtree is still being read, with the symbol that leads to
/// the child currently open beneath it.
struct Frame {
    symbol: char,
    node: TrieNode,
}

/// Decodes a serialized trie in a single left-to-right scan.
///
/// Each node's `word_count` is set to the number of terminal nodes in its
/// subtree, so the returned root's count is the number of stored words.
/// Nothing is returned unless the whole input is one well-formed root subtree.
pub(crate) fn decode(serialized: &str, max_depth: Option<usize>) -> Result<TrieNode, DecodeError> {
    let symbols: Vec<char> = serialized.chars().collect();
    if symbols.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut open: Vec<Frame> = Vec::new();
    let mut node = TrieNode::new();
    let mut cursor = read_terminator(&symbols, 0, &mut node);

    loop {
        match symbols.get(cursor).copied() {
            None => return Err(DecodeError::UnexpectedEnd { position: cursor }),
            Some(CLOSE_MARKER) => {
                cursor += 1;
                if node.is_terminal {
                    node.word_count += 1;
                }

                match open.pop() {
                    Some(Frame { symbol, node: mut parent }) => {
                        parent.word_count += node.word_count;
                        parent.children.insert(symbol, node);
                        node = parent;
                    }
                    None if cursor < symbols.len() => {
                        return Err(DecodeError::TrailingInput { position: cursor });
                    }
                    None => return Ok(node),
                }
            }
            Some(TERMINATOR) => {
                return Err(DecodeError::UnexpectedTerminator { position: cursor });
            }
            Some(symbol) => {
                if node.children.contains_key(&symbol) {
                    return Err(DecodeError::DuplicateChild {
                        symbol,
                        position: cursor,
                    });
                }
                if let Some(max_depth) = max_depth {
                    if open.len() >= max_depth {
                        return Err(DecodeError::TooDeep {
                            max_depth,
                            position: cursor,
                        });
                    }
                }

                let parent = std::mem::take(&mut node);
                open.push(Frame { symbol, node: parent });
                cursor = read_terminator(&symbols, cursor + 1, &mut node);
            }
        }
    }
}

/// Consumes an optional leading terminator for the subtree starting at `cursor`.
fn read_terminator(symbols: &[char], cursor: usize, node: &mut TrieNode) -> usize {
    if symbols.get(cursor) == Some(&TERMINATOR) {
        node.is_terminal = true;
        cursor + 1
    } else {
        cursor
    }
}
