/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;

use crate::common;
use m2align::file_utils::FileManager;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.m2", "S x")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.m2"));
}

/// Test that generate_output_path inserts the suffix before the extension
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/fce.dev.m2"),
        Path::new("/tmp/output"),
        "converted",
    );

    assert_eq!(output_path, Path::new("/tmp/output/fce.dev.converted.m2"));
}

/// Test that find_files matches the extension case-insensitively and recursively
#[test]
fn test_find_files_withNestedFiles_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("nested");
    FileManager::ensure_dir(&nested)?;

    common::create_test_file(temp_dir.path(), "b.m2", "")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "")?;
    common::create_test_file(&nested, "a.M2", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".m2")?;
    assert_eq!(files.len(), 2);
    assert!(files.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e.eq_ignore_ascii_case("m2"))));

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("deep").join("result.m2");

    FileManager::write_to_file(&target, "S done\n\n")?;

    assert_eq!(FileManager::read_to_string(&target)?, "S done\n\n");
    Ok(())
}

/// Test that read_to_string names the missing file
#[test]
fn test_read_to_string_withMissingFile_shouldReportPath() {
    let error = FileManager::read_to_string("missing_corpus.m2").unwrap_err();
    assert!(error.to_string().contains("missing_corpus.m2"));
}
