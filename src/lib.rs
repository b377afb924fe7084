//! Niihau Trie Library
//!
//! A prefix tree over sequences of characters supporting word insertion,
//! exact-match lookup, prefix-count queries, enumeration of stored words, and
//! a compact text serialization that round-trips exactly.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] holds the trie, its codec and its errors
//! - [`config`] loads and validates layered configuration
//! - [`error`] aggregates component errors and routes reports through `tracing`
//!
//! # Example
//!
//! ```
//! use niihau_trie::NiihauTrie;
//!
//! let mut trie = NiihauTrie::new();
//! trie.insert_word("chip").unwrap();
//! trie.insert_word("chips").unwrap();
//!
//! assert_eq!(trie.serialize(), "chip]s]>>>>>>");
//! assert!(NiihauTrie::from_serialized_trie("chip]s]>>>>>").is_err());
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;
use std::sync::Arc;

pub use data_structures::niihau_trie::{
    DecodeError, NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult, Words,
};
pub use error::{NiihauError, NiihauResult};

/// Version information for the Niihau Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global tracing subscriber described by `log`.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(log: &config::LogConfig) -> NiihauResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `NIIHAU__*` environment
/// variables, installs logging and the tracing error reporter, and publishes
/// the configuration globally.
pub fn init(config_path: Option<&Path>) -> NiihauResult<&'static config::NiihauConfig> {
    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    let loaded = loader.load().map_err(|e| {
        let context = error::ErrorContext::new(e.into(), "config")
            .with_details(format!("config path: {config_path:?}"));
        error::report_error(&context);
        context.error
    })?;

    init_logging(&loaded.log)?;
    error::set_error_reporter(Arc::new(error::TracingErrorReporter));

    config::init_global_config(loaded);
    Ok(config::get_global_config())
}
