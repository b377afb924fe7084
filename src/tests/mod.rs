//! Test modules for the Niihau Trie crate.
//!
//! This module contains crate-internal tests that span components:
//! - Configuration loading and validation
//! - Error aggregation and reporting
//! - Property-based tests of the trie using proptest

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, serialized_noise_strategy, unicode_word_strategy, word_set_strategy,
    word_strategy, TestFixture,
};
