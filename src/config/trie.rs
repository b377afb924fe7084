//! Trie configuration module.
//!
//! Validation for the `[trie]` section, which maps onto [`NiihauTrieConfig`].

use super::{ConfigResult, Validate};
use crate::data_structures::niihau_trie::NiihauTrieConfig;
use crate::error::config::ConfigError;

impl Validate for NiihauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
