// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for Niihau Trie.
//!
//! Absence of a word or prefix is not an error; lookups report it as `false`
//! or `0`. Errors are raised only for words the serialization format cannot
//! represent and for serialized input that is structurally invalid.

/// Errors raised while decoding a serialized trie.
///
/// Positions are 0-based indices into the input's `char` sequence.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contained no symbols at all.
    #[error("Serialized trie is empty")]
    Empty,

    /// The input ended before every open subtree was closed.
    #[error("Unexpected end of input at position {position}: subtree not closed")]
    UnexpectedEnd {
        /// Position one past the last symbol read.
        position: usize,
    },

    /// A terminator appeared anywhere other than the start of a subtree.
    #[error("Unexpected terminator ']' at position {position}")]
    UnexpectedTerminator {
        /// Position of the misplaced terminator.
        position: usize,
    },

    /// A node listed the same child symbol more than once.
    #[error("Duplicate child symbol '{symbol}' at position {position}")]
    DuplicateChild {
        /// The repeated symbol.
        symbol: char,
        /// Position of the second occurrence.
        position: usize,
    },

    /// Symbols remained after the root subtree was closed.
    #[error("Trailing input at position {position} after the root subtree closed")]
    TrailingInput {
        /// Position of the first extra symbol.
        position: usize,
    },

    /// Subtrees were nested deeper than the configured maximum depth.
    #[error("Nesting at position {position} exceeds maximum trie depth of {max_depth}")]
    TooDeep {
        /// The configured maximum depth.
        max_depth: usize,
        /// Position of the symbol that opened the offending subtree.
        position: usize,
    },
}

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NiihauTrieError {
    /// A word contained one of the reserved serialization control symbols.
    #[error("Word '{word}' contains reserved symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The rejected word.
        word: String,
        /// The reserved symbol found in the word.
        symbol: char,
        /// Position of the symbol within the word's `char` sequence.
        position: usize,
    },

    /// A word is longer than the configured maximum depth.
    #[error("Word of length {length} exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// Length of the rejected word in symbols.
        length: usize,
        /// The configured maximum depth.
        max_depth: usize,
    },

    /// The serialized form could not be decoded.
    #[error("Failed to decode serialized trie: {0}")]
    Decode(#[from] DecodeError),
}
