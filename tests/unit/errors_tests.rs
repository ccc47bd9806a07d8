/*!
 * Tests for error types and conversions
 */

use m2align::errors::{AlignmentError, AppError, M2Error, ResourceError};

#[test]
fn test_m2Error_malformedEdit_shouldDisplayLineAndReason() {
    let error = M2Error::MalformedEdit {
        line: 12,
        reason: "expected 6 fields".to_string(),
        content: "A 0 1|||R:NOUN".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Line 12"));
    assert!(display.contains("expected 6 fields"));
    assert!(display.contains("A 0 1|||R:NOUN"));
}

#[test]
fn test_m2Error_spanOutOfBounds_shouldDisplaySpanAndLength() {
    let error = M2Error::SpanOutOfBounds {
        line: 3,
        start: 4,
        end: 9,
        len: 5,
    };
    let display = format!("{}", error);
    assert!(display.contains("4..9"));
    assert!(display.contains("5 tokens"));
}

#[test]
fn test_resourceError_invalidEntry_shouldDisplayKind() {
    let error = ResourceError::InvalidEntry {
        kind: "tag map",
        line: 2,
        content: "NN".to_string(),
    };
    assert_eq!(format!("{}", error), "Invalid tag map entry at line 2: NN");
}

#[test]
fn test_appError_fromM2Error_shouldWrapMessage() {
    let error: AppError = M2Error::MissingSentence {
        line: 1,
        content: "A 0 1".to_string(),
    }
    .into();

    assert!(matches!(error, AppError::M2(_)));
    assert!(format!("{}", error).starts_with("M2 error: Line 1"));
}

#[test]
fn test_appError_fromAlignmentError_shouldWrapMessage() {
    let error: AppError = AlignmentError::Partition("gap at 3".to_string()).into();
    assert!(matches!(error, AppError::Alignment(_)));
    assert!(format!("{}", error).contains("gap at 3"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "corpus.m2 missing");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(format!("{}", error).contains("corpus.m2 missing"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(format!("{}", error), "Unknown error: something odd");
}
