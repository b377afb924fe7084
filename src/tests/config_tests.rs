//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LogConfig, NiihauConfig, Validate};
use crate::data_structures::niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = NiihauConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.max_depth, None);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = NiihauConfig::default();

    config.log.level = "verbose".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

    config.log = LogConfig::default();
    config.trie.max_depth = Some(0);
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange { .. })));
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [trie]
    max_depth = 8

    [log]
    level = "debug"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.max_depth, Some(8));
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(!config.log.json);
    assert!(config.log.source_location);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_file_test.json", r#"{ "log": { "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert!(config.log.json);
    assert_eq!(config.trie, NiihauTrieConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [trie]
    max_depth = 8
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__MAX_DEPTH", "16");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "warn");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.max_depth, Some(16));
    assert_eq!(config.log.level, "warn");
}

/// Test that a loaded configuration constrains the trie it builds.
#[test]
fn test_loaded_config_drives_trie() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_trie_test.toml", "[trie]\nmax_depth = 3\n")
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_TRIE").load().unwrap();
    let mut trie = NiihauTrie::with_config(config.trie);

    assert!(trie.insert_word("abc").is_ok());
    assert!(matches!(
        trie.insert_word("abcd"),
        Err(NiihauTrieError::WordTooLong { length: 4, max_depth: 3 })
    ));
}

/// Test that loading errors are classified.
#[test]
fn test_load_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let yaml = fixture.create_file("config.yaml", "log:\n  json: true\n").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&yaml), "TEST_YAML").load(),
        Err(ConfigError::ParseError(_))
    ));

    let invalid = fixture
        .create_file("invalid.toml", "[trie\nmax_depth = eight\"\n")
        .unwrap();
    assert!(ConfigLoader::new(Some(&invalid), "TEST_INVALID").load().is_err());

    let bad_level = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"verbose\"\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&bad_level), "TEST_BAD_LEVEL").load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&std::path::Path>, "TEST_NO_FILE")
        .load()
        .unwrap();
    assert_eq!(config, NiihauConfig::default());
}

/// Test that the rendered TOML loads back to the same configuration.
#[test]
fn test_toml_rendering_round_trips() {
    let mut config = NiihauConfig::default();
    config.trie.max_depth = Some(64);
    config.log.json = true;

    let rendered = config.to_toml_string().unwrap();
    assert!(rendered.contains("max_depth = 64"));

    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("rendered.toml", rendered).unwrap();
    let loaded = ConfigLoader::new(Some(&path), "TEST_RENDERED").load().unwrap();
    assert_eq!(loaded, config);
}
