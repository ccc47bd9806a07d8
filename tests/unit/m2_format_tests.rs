/*!
 * Tests for reading and writing M2 corpora
 */

use m2align::errors::M2Error;
use m2align::m2::{Edit, NOOP, RecordBlocks, parse_corpus};

use crate::common::SAMPLE_CORPUS;

/// Test that a canonical corpus is written back unchanged
#[test]
fn test_parse_corpus_withCanonicalCorpus_shouldRoundTrip() {
    let records = parse_corpus(SAMPLE_CORPUS).unwrap();
    assert_eq!(records.len(), 2);

    let written: String = records.iter().map(ToString::to_string).collect();
    assert_eq!(written, format!("{}\n", SAMPLE_CORPUS));
}

/// Test that Windows line endings and extra blank lines are tolerated
#[test]
fn test_parse_corpus_withCrLfAndBlankRuns_shouldReadAllRecords() {
    let corpus = "S a cat\r\nA 1 2|||R:NOUN|||dog|||REQUIRED|||-NONE-|||0\r\n\r\n\r\nS fine\r\n";
    let records = parse_corpus(corpus).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].annotators["0"].corrected, vec!["a", "dog"]);
    assert!(records[1].annotators.is_empty());
    assert_eq!(records[1].to_string(), "S fine\n\n");
}

/// Test that the block reader reports where each record starts
#[test]
fn test_record_blocks_withSampleCorpus_shouldReportStartLines() {
    let starts: Vec<usize> = RecordBlocks::new(SAMPLE_CORPUS).map(|(line, _)| line).collect();
    assert_eq!(starts, vec![1, 4]);
}

/// Test that every annotator keeps its own corrected sentence
#[test]
fn test_parse_corpus_withTwoAnnotators_shouldRebuildEachCorrection() {
    let corpus = "S She go to school .
A 1 2|||R:VERB:SVA|||goes|||REQUIRED|||-NONE-|||0
A 1 2|||R:VERB:TENSE|||went|||REQUIRED|||-NONE-|||1
A 3 3|||M:DET|||the|||REQUIRED|||-NONE-|||1
";
    let records = parse_corpus(corpus).unwrap();
    let record = &records[0];

    assert_eq!(record.annotators["0"].corrected.join(" "), "She goes to school .");
    assert_eq!(record.annotators["1"].corrected.join(" "), "She went to the school .");
    assert_eq!(record.edit_count(), 3);
}

/// Test that the first malformed record stops parsing with its line number
#[test]
fn test_parse_corpus_withBadSpan_shouldReportLine() {
    let corpus = "S fine .\n\nS a cat\nA 2 1|||R:NOUN|||dog|||REQUIRED|||-NONE-|||0\n";
    let error = parse_corpus(corpus).unwrap_err();

    assert!(matches!(error, M2Error::MalformedEdit { line: 4, .. }));
}

/// Test that stray lines inside a record are rejected
#[test]
fn test_parse_corpus_withUnknownLine_shouldFail() {
    let corpus = "S a cat\nX something\n";
    let error = parse_corpus(corpus).unwrap_err();

    assert!(matches!(error, M2Error::UnexpectedLine { line: 2, .. }));
}

/// Test the written form of reserved edits
#[test]
fn test_edit_noop_shouldUseReservedSpan() {
    let edit = Edit::noop("2");
    assert_eq!(edit.category, NOOP);
    assert_eq!(edit.to_string(), "A -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||2");
    assert!(!edit.is_applied());
}
