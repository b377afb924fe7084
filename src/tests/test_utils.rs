//! Test utilities and fixtures for the Niihau Trie crate.
//!
//! Reusable proptest strategies and a fixture for tests that touch the
//! filesystem or environment.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::collections::BTreeSet;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum number of words in a generated word set.
const MAX_WORD_COUNT: usize = 40;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate words over a small alphabet so that prefixes are shared often.
pub fn word_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex(&format!("[a-d]{{0,{MAX_WORD_LENGTH}}}"))
        .expect("valid regex")
        .boxed()
}

/// Generate words from any `char` other than the reserved control symbols.
pub fn unicode_word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(
        proptest::char::any().prop_filter("reserved symbol", |c| *c != ']' && *c != '>'),
        0..MAX_WORD_LENGTH,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
    .boxed()
}

/// Generate a set of distinct words.
pub fn word_set_strategy() -> BoxedStrategy<BTreeSet<String>> {
    prop_oneof![
        proptest::collection::btree_set(word_strategy(), 0..MAX_WORD_COUNT),
        proptest::collection::btree_set(unicode_word_strategy(), 0..MAX_WORD_COUNT),
    ]
    .boxed()
}

/// Generate arbitrary text that leans heavily on the control symbols.
pub fn serialized_noise_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(prop_oneof![Just(']'), Just('>'), Just('a'), Just('b')], 0..40)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Test fixture for tests that need files and environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_test_dir()?;
        Ok(Self {
            temp_dir,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name into the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        // Clean up any environment variables we set
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
