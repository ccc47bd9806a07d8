/*!
 * Integration tests for the controller lifecycle
 */

use anyhow::Result;
use std::path::PathBuf;

use crate::common;
use m2align::app_config::Config;
use m2align::app_controller::Controller;
use m2align::conversion::Mode;
use m2align::file_utils::FileManager;
use m2align::language_utils::CorpusLanguage;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    assert_eq!(controller.config().language, CorpusLanguage::English);
    assert_eq!(controller.converter().options().mode, Mode::Auto);
    Ok(())
}

/// Test that an unreadable lexicon is reported when the controller is built
#[test]
fn test_controller_withMissingLexicon_shouldFail() {
    let mut config = Config::default();
    config.resources.lexicon = Some(PathBuf::from("/nonexistent/lexicon.tsv"));

    let error = Controller::with_config(config).unwrap_err();
    assert!(format!("{:#}", error).contains("lexicon"));
}

/// Test that existing output is kept unless overwriting is forced
#[test]
fn test_run_withExistingOutput_shouldRequireForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_corpus(temp_dir.path(), "dev.m2")?;
    let output = common::create_test_file(temp_dir.path(), "dev.out.m2", "previous")?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;

    let skipped = controller.run(input.clone(), output.clone(), false)?;
    assert!(skipped.is_none());
    assert_eq!(FileManager::read_to_string(&output)?, "previous");

    let forced = controller.run(input, output.clone(), true)?;
    assert_eq!(forced.map(|stats| stats.records), Some(2));
    assert!(FileManager::read_to_string(&output)?.starts_with("S It are correct ."));

    Ok(())
}

/// Test that a missing input file is an error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(temp_dir.path().join("absent.m2"), temp_dir.path().join("out.m2"), false);
    assert!(result.is_err());
    Ok(())
}

/// Test folder conversion into a separate output directory
#[test]
fn test_run_folder_withTwoCorpora_shouldConvertBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("corpus");
    let output_dir = temp_dir.path().join("converted");
    FileManager::ensure_dir(&input_dir)?;
    common::create_test_corpus(&input_dir, "train.m2")?;
    common::create_test_corpus(&input_dir, "dev.m2")?;
    common::create_test_file(&input_dir, "README.txt", "not a corpus")?;

    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;
    let totals = controller.run_folder(input_dir, output_dir.clone(), false)?;

    assert_eq!(totals.records, 4);
    assert!(FileManager::file_exists(output_dir.join("train.converted.m2")));
    assert!(FileManager::file_exists(output_dir.join("dev.converted.m2")));
    Ok(())
}

/// Test that one malformed corpus aborts the whole folder run
#[test]
fn test_run_folder_withMalformedCorpus_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("corpus");
    let output_dir = temp_dir.path().join("converted");
    FileManager::ensure_dir(&input_dir)?;
    common::create_test_file(&input_dir, "bad.m2", "S It are\nA 0 9|||R:OTHER|||is|||REQUIRED|||-NONE-|||0\n")?;
    common::create_test_corpus(&input_dir, "good.m2")?;

    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;
    let error = controller.run_folder(input_dir, output_dir.clone(), false).unwrap_err();

    let message = format!("{:#}", error);
    assert!(message.contains("bad.m2"));
    assert!(message.contains("Line 2"));
    assert!(!FileManager::file_exists(output_dir.join("bad.converted.m2")));
    Ok(())
}

/// Test that outputs written next to their inputs are not converted again
#[test]
fn test_run_folder_inPlace_shouldSkipPreviousOutputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let corpus_dir = temp_dir.path().join("corpus");
    FileManager::ensure_dir(&corpus_dir)?;
    common::create_test_corpus(&corpus_dir, "dev.m2")?;

    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;
    let first = controller.run_folder(corpus_dir.clone(), corpus_dir.clone(), false)?;
    let second = controller.run_folder(corpus_dir.clone(), corpus_dir.clone(), false)?;

    assert_eq!(first.records, 2);
    // dev.converted.m2 exists now and is neither re-read nor overwritten
    assert_eq!(second.records, 0);
    assert_eq!(FileManager::find_files(&corpus_dir, "m2")?.len(), 2);
    Ok(())
}

/// Test that a folder without corpora is an error
#[test]
fn test_run_folder_withoutM2Files_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "notes.txt", "")?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.run_folder(temp_dir.path().to_path_buf(), temp_dir.path().join("out"), false).is_err());
    Ok(())
}
