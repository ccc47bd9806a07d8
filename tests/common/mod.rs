/*!
 * Common test utilities for the m2align test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use m2align::app_config::Config;
use m2align::conversion::Mode;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Two-record English corpus: one subject-verb agreement error, one correct sentence
pub const SAMPLE_CORPUS: &str = "S It are correct .
A 1 2|||R:OTHER|||is|||REQUIRED|||-NONE-|||0

S It is correct .
A -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||0
";

/// Lexicon covering the words of the sample corpora
pub const SAMPLE_LEXICON: &str = "# word\ttag\tlemma
It\tPRP\tit
He\tPRP\the
are\tVBP\tbe
is\tVBZ\tbe
was\tVBD\tbe
has\tVBZ\thave
eaten\tVBN\teat
eating\tVBG\teat
correct\tJJ\tcorrect
";

/// Creates a sample M2 corpus file
pub fn create_test_corpus(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_CORPUS)
}

/// Configuration using the sample lexicon written into `dir`
pub fn create_test_config(dir: &Path, mode: Mode) -> Result<Config> {
    let lexicon = create_test_file(dir, "lexicon.tsv", SAMPLE_LEXICON)?;
    let mut config = Config::default();
    config.resources.lexicon = Some(lexicon);
    config.conversion.mode = mode;
    Ok(config)
}
