// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Niihau Trie.

use serde::{Deserialize, Serialize};

/// Configuration options for the Niihau Trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiihauTrieConfig {
    /// Maximum word length, and maximum nesting accepted when decoding.
    /// `None` leaves depth unbounded.
    pub max_depth: Option<usize>,
}

impl NiihauTrieConfig {
    /// Create a new default configuration (unbounded depth).
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the depth of the trie.
    ///
    /// Words longer than `max_depth` symbols are rejected on insertion, and
    /// serialized input nesting deeper than `max_depth` is rejected on decode.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        if max_depth == 0 {
            panic!("Maximum depth must be greater than 0");
        }
        self.max_depth = Some(max_depth);
        self
    }

    /// Get the configured maximum depth, if any.
    pub fn get_max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
