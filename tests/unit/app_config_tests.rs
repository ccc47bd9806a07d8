/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;

use crate::common;
use m2align::alignment::MergePolicy;
use m2align::app_config::{Config, LogLevel};
use m2align::conversion::Mode;
use m2align::language_utils::CorpusLanguage;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.language, CorpusLanguage::English);
    assert_eq!(config.conversion.mode, Mode::Auto);
    assert_eq!(config.conversion.merge, MergePolicy::Rules);
    assert!(!config.conversion.max_edits);
    assert!(!config.conversion.old_cats);
    assert!(!config.conversion.levenshtein);
    assert!(config.conversion.transpositions);
    assert!(!config.conversion.annotate);
    assert!(config.resources.word_list.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a saved configuration loads back unchanged
#[test]
fn test_save_thenFromFile_shouldPreserveSettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = common::create_test_config(temp_dir.path(), Mode::Gold)?;
    config.language = CorpusLanguage::German;
    config.conversion.merge = MergePolicy::AllSplit;
    config.conversion.annotate = true;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.language, CorpusLanguage::German);
    assert_eq!(loaded.conversion, config.conversion);
    assert_eq!(loaded.resources, config.resources);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    assert!(loaded.validate().is_ok());

    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let mut config = common::create_test_config(temp_dir.path(), Mode::Auto)?;
    assert!(config.validate().is_ok());

    config.conversion.output_suffix = "a/b".to_string();
    assert!(config.validate().is_err());

    config.conversion.output_suffix = "converted".to_string();
    config.resources.tag_map = Some(temp_dir.path().join("missing.tsv"));
    assert!(config.validate().is_err());

    Ok(())
}

/// Test that unknown values are rejected when parsing
#[test]
fn test_from_file_withUnknownMergePolicy_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"conversion": {"merge": "sometimes"}}"#)?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test that an empty object gives the default configuration
#[test]
fn test_from_file_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{}")?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.conversion, Config::default().conversion);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}
