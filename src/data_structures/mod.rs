//! Data structures for the Niihau Trie crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Iterative traversals so input depth never exhausts the call stack
//! - Explicit, typed errors for every rejected input

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{
    DecodeError, NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult, Words,
};
