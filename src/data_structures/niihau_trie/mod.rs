// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! A prefix tree over sequences of `char` symbols with exact-match lookup,
//! prefix counting, lexicographic enumeration and a compact, self-delimiting
//! text serialization that round-trips exactly.
//!
//! # Example
//!
//! ```
//! use niihau_trie::data_structures::niihau_trie::NiihauTrie;
//!
//! let trie = NiihauTrie::from_words(["chat", "chip", "chips"]).unwrap();
//!
//! assert!(trie.find_word("chip"));
//! assert!(!trie.find_word("ch"));
//! assert_eq!(trie.words_with_prefix("ch", false), 3);
//! assert_eq!(trie.words_with_prefix("chip", true), 2);
//!
//! let serialized = trie.serialize();
//! let restored = NiihauTrie::from_serialized_trie(&serialized).unwrap();
//! assert_eq!(restored.to_list_of_words(), vec!["chat", "chip", "chips"]);
//! ```
//!
//! # Counting
//!
//! Every insertion adds one to the count of each node on its path, the root
//! and the final node included. A node's count is therefore the number of
//! insertions that pass through or end at it. Decoding cannot see repeated
//! insertions, so it counts each terminal node once; for tries built from
//! distinct words both paths agree.
//!
//! # Ordering
//!
//! Children are kept in symbol order, so enumeration is lexicographic by
//! `char` and the serialized form of a given word set is deterministic.

mod codec;
mod config;
mod error;
mod iter;
mod node;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use codec::{is_reserved, CLOSE_MARKER, TERMINATOR};
pub use config::NiihauTrieConfig;
pub use error::{DecodeError, NiihauTrieError};
pub use iter::Words;
use node::TrieNode;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is a prefix tree that stores words and counts how many
/// insertions share each prefix.
///
/// Key features:
/// * Exact-match lookup and prefix counting in O(length of the query)
/// * Lazy, lexicographic enumeration of stored words
/// * Compact text serialization using two reserved control symbols
/// * Iterative traversals, safe for arbitrarily long words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NiihauTrie {
    /// The root node of the trie, representing the empty prefix
    root: TrieNode,

    /// Number of insertions, duplicates included
    total_words: usize,

    /// Configuration options
    config: NiihauTrieConfig,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            total_words: 0,
            config,
        }
    }

    /// Builds a trie by inserting each word in order.
    ///
    /// # Returns
    ///
    /// * `Ok(NiihauTrie)` - The populated trie.
    /// * `Err(NiihauTrieError)` - If any word is rejected by [`insert_word`](Self::insert_word).
    pub fn from_words<I, W>(words: I) -> NiihauTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::from_words_with_config(words, NiihauTrieConfig::default())
    }

    /// Builds a trie with the given configuration by inserting each word in order.
    pub fn from_words_with_config<I, W>(words: I, config: NiihauTrieConfig) -> NiihauTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        trie.insert_words(words)?;
        tracing::debug!(total_words = trie.total_words, "Built trie from word list");
        Ok(trie)
    }

    /// Inserts a word into the trie.
    ///
    /// Nodes are created for symbols not yet on the path. Every node on the
    /// path, including the root and the final node, has its count raised by
    /// one, and the final node is marked terminal. Duplicate words and the
    /// empty word are accepted; the empty word marks the root itself.
    ///
    /// The word is validated before the trie is touched, so a rejected word
    /// leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was inserted.
    /// * `Err(NiihauTrieError::InvalidSymbol)` - The word contains `]` or `>`.
    /// * `Err(NiihauTrieError::WordTooLong)` - The word exceeds the configured maximum depth.
    pub fn insert_word<W>(&mut self, word: W) -> NiihauTrieResult<()>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        self.validate_word(word)?;

        let mut node = &mut self.root;
        node.word_count += 1;
        for symbol in word.chars() {
            node = node.child_or_insert(symbol);
            node.word_count += 1;
        }
        node.is_terminal = true;
        self.total_words += 1;

        Ok(())
    }

    /// Inserts every word in order, stopping at the first rejected word.
    ///
    /// Words inserted before the rejected one remain in the trie.
    pub fn insert_words<I, W>(&mut self, words: I) -> NiihauTrieResult<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        for word in words {
            self.insert_word(word)?;
        }
        Ok(())
    }

    fn validate_word(&self, word: &str) -> NiihauTrieResult<()> {
        if let Some((position, symbol)) = codec::find_reserved(word) {
            tracing::debug!(word, %symbol, position, "Rejected word containing reserved symbol");
            return Err(NiihauTrieError::InvalidSymbol {
                word: word.to_string(),
                symbol,
                position,
            });
        }

        if let Some(max_depth) = self.config.max_depth {
            let length = word.chars().count();
            if length > max_depth {
                tracing::debug!(length, max_depth, "Rejected word exceeding maximum depth");
                return Err(NiihauTrieError::WordTooLong { length, max_depth });
            }
        }

        Ok(())
    }

    /// Returns true if `word` was inserted into the trie.
    pub fn find_word<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.words_with_prefix(word, true) > 0
    }

    /// Counts the insertions whose word starts with `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look up.
    /// * `prefix_should_be_word` - When true, only count if `prefix` is itself a stored word.
    ///
    /// # Returns
    ///
    /// The count stored at the node reached by `prefix`, or `0` when the path
    /// does not exist or `prefix_should_be_word` is set and the node is not terminal.
    pub fn words_with_prefix<P>(&self, prefix: P, prefix_should_be_word: bool) -> usize
    where
        P: AsRef<str>,
    {
        match self.node_at(prefix.as_ref()) {
            Some(node) if !prefix_should_be_word || node.is_terminal => node.word_count,
            _ => 0,
        }
    }

    fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, symbol| node.child(symbol))
    }

    /// Returns every stored word in lexicographic order.
    ///
    /// Each distinct word appears exactly once, however many times it was inserted.
    pub fn to_list_of_words(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Returns a lazy iterator over every stored word in lexicographic order.
    ///
    /// Each call starts a fresh traversal.
    pub fn words(&self) -> Words<'_> {
        Words::new(String::new(), &self.root)
    }

    /// Returns a lazy iterator over the stored words that start with `prefix`.
    ///
    /// The iterator is empty when no stored word has the prefix.
    pub fn words_starting_with<P>(&self, prefix: P) -> Words<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.node_at(prefix) {
            Some(node) => Words::new(prefix.to_string(), node),
            None => Words::empty(),
        }
    }

    /// Serializes the trie into its compact text form.
    ///
    /// The empty trie serializes as `">"`. Equal word sets always produce the
    /// same string.
    pub fn serialize(&self) -> String {
        let serialized = codec::encode(&self.root);
        tracing::trace!(length = serialized.len(), "Serialized trie");
        serialized
    }

    /// Reconstructs a trie from the output of [`serialize`](Self::serialize).
    ///
    /// # Returns
    ///
    /// * `Ok(NiihauTrie)` - The reconstructed trie. Its `total_words` is the
    ///   number of distinct stored words.
    /// * `Err(NiihauTrieError::Decode)` - If the input is not exactly one
    ///   well-formed root subtree. No partial trie is returned.
    pub fn from_serialized_trie(serialized: &str) -> NiihauTrieResult<Self> {
        Self::deserialize_with_config(serialized, NiihauTrieConfig::default())
    }

    /// Reconstructs a trie, enforcing the configured maximum depth while decoding.
    pub fn deserialize_with_config(serialized: &str, config: NiihauTrieConfig) -> NiihauTrieResult<Self> {
        let root = codec::decode(serialized, config.max_depth).map_err(|e| {
            tracing::debug!(error = %e, "Rejected serialized trie");
            e
        })?;

        let total_words = root.word_count;
        tracing::debug!(total_words, "Decoded serialized trie");

        Ok(Self {
            root,
            total_words,
            config,
        })
    }

    /// Returns the number of insertions, duplicates included.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Returns the number of distinct stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.subtree_terminal_count()
    }

    /// Returns true if no word is stored.
    ///
    /// Checked against [`total_words`](Self::total_words), which is zero exactly
    /// when there is no terminal node: insertion bumps it with every word and
    /// decoding sets it to the terminal count. Non-terminal branches such as
    /// the one in `"a>>"` do not make a trie non-empty.
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Returns the number of nodes in the trie, the root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_node_count()
    }

    /// Removes every word, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.total_words = 0;
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NiihauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for NiihauTrie {
    type Err = NiihauTrieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_serialized_trie(s)
    }
}

impl<'a> IntoIterator for &'a NiihauTrie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

// Embedded in other formats as its compact string, so JSON and TOML carry the same wire form.
impl Serialize for NiihauTrie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&NiihauTrie::serialize(self))
    }
}

impl<'de> Deserialize<'de> for NiihauTrie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serialized = String::deserialize(deserializer)?;
        NiihauTrie::from_serialized_trie(&serialized).map_err(serde::de::Error::custom)
    }
}
