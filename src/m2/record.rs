/*!
 * M2 records: one original sentence plus per-annotator corrections.
 */

use std::collections::BTreeMap;
use std::fmt;

use super::edit::{EDIT_PREFIX, Edit};
use crate::errors::M2Error;

/// Prefix of the original sentence line
pub const SENTENCE_PREFIX: &str = "S";

/// Prefix of the annotated original sentence line
pub const ORIGINAL_ANNOTATION_PREFIX: &str = "O";

/// Prefix of an annotated corrected sentence line
pub const CORRECTED_ANNOTATION_PREFIX: &str = "C";

/// Corrected sentence and edits of one annotator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatorEntry {
    /// Corrected tokens obtained by applying the edits
    pub corrected: Vec<String>,
    /// Token annotation of the corrected sentence, written as a `C` line
    pub annotation: Option<String>,
    /// Edits in output order
    pub edits: Vec<Edit>,
}

impl AnnotatorEntry {
    pub fn new(corrected: Vec<String>) -> Self {
        Self {
            corrected,
            annotation: None,
            edits: Vec::new(),
        }
    }

    /// The annotator proposed no correction
    pub fn is_noop(&self) -> bool {
        self.edits.first().is_some_and(Edit::is_noop)
    }
}

/// One blank-line-delimited M2 block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Original tokens
    pub original: Vec<String>,
    /// Token annotation of the original sentence, written as an `O` line
    pub annotation: Option<String>,
    /// Entries keyed by annotator id, iterated in ascending order
    pub annotators: BTreeMap<String, AnnotatorEntry>,
}

impl Record {
    pub fn new(original: Vec<String>) -> Self {
        Self {
            original,
            annotation: None,
            annotators: BTreeMap::new(),
        }
    }

    /// Parse one record block
    ///
    /// # Arguments
    /// * `block` - Record lines without the terminating blank line
    /// * `first_line` - 1-based line number of the block's first line
    ///
    /// # Returns
    /// * `Result<Record, M2Error>` - The record with corrected sentences rebuilt
    pub fn parse(block: &str, first_line: usize) -> Result<Self, M2Error> {
        let mut lines = block
            .lines()
            .enumerate()
            .map(|(i, line)| (first_line + i, line.trim_end_matches('\r')));

        let (line_no, first) = lines.next().ok_or(M2Error::MissingSentence {
            line: first_line,
            content: String::new(),
        })?;
        let original = parse_sentence(first).ok_or_else(|| M2Error::MissingSentence {
            line: line_no,
            content: first.to_string(),
        })?;

        let mut grouped: BTreeMap<String, Vec<(usize, Edit)>> = BTreeMap::new();
        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            match line.split(' ').next().unwrap_or_default() {
                EDIT_PREFIX => {
                    let edit = Edit::parse(line, line_no)?;
                    grouped.entry(edit.annotator.clone()).or_default().push((line_no, edit));
                }
                // Annotation lines are regenerated on output
                ORIGINAL_ANNOTATION_PREFIX | CORRECTED_ANNOTATION_PREFIX => continue,
                _ => {
                    return Err(M2Error::UnexpectedLine {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
            }
        }

        let mut record = Self::new(original);
        for (annotator, mut edits) in grouped {
            // Stable: by start, then by end
            edits.sort_by_key(|(_, edit)| sort_key(edit).0);
            edits.sort_by_key(|(_, edit)| sort_key(edit).1);
            let entry = apply_edits(&record.original, edits)?;
            record.annotators.insert(annotator, entry);
        }

        Ok(record)
    }

    /// Number of edit lines over all annotators
    pub fn edit_count(&self) -> usize {
        self.annotators.values().map(|entry| entry.edits.len()).sum()
    }

    pub fn has_edits(&self) -> bool {
        !self.annotators.is_empty()
    }
}

/// Tokens of an `S` line, None when the line is not a sentence line
fn parse_sentence(line: &str) -> Option<Vec<String>> {
    if line == SENTENCE_PREFIX {
        return Some(Vec::new());
    }
    let rest = line.strip_prefix(SENTENCE_PREFIX)?.strip_prefix(' ')?;
    Some(rest.split_whitespace().map(str::to_string).collect())
}

/// (start, end) with `-1` for unplaced edits
fn sort_key(edit: &Edit) -> (i64, i64) {
    edit.orig
        .map(|(start, end)| (start as i64, end as i64))
        .unwrap_or((-1, -1))
}

/// Apply sorted edits to the original with a running offset
fn apply_edits(original: &[String], edits: Vec<(usize, Edit)>) -> Result<AnnotatorEntry, M2Error> {
    let mut entry = AnnotatorEntry::new(original.to_vec());
    let mut offset: i64 = 0;

    for (line_no, mut edit) in edits {
        let placed = edit.orig.filter(|_| edit.is_applied());
        if let Some((start, end)) = placed {
            let out_of_bounds = || M2Error::SpanOutOfBounds {
                line: line_no,
                start: start as i64,
                end: end as i64,
                len: original.len(),
            };
            if end > original.len() {
                return Err(out_of_bounds());
            }

            let cor_start = start as i64 + offset;
            let cor_end = end as i64 + offset;
            // Overlapping edits can push the shifted span outside the corrected sentence
            if cor_start < 0 || cor_end > entry.corrected.len() as i64 {
                return Err(out_of_bounds());
            }

            let tokens: Vec<String> = edit.correction_tokens().into_iter().map(str::to_string).collect();
            let inserted = tokens.len();
            entry
                .corrected
                .splice(cor_start as usize..cor_end as usize, tokens);
            edit.cor = Some((cor_start as usize, cor_start as usize + inserted));
            offset += inserted as i64 - (end - start) as i64;
        }
        entry.edits.push(edit);
    }

    Ok(entry)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", SENTENCE_PREFIX, self.original.join(" "))?;

        let mut original_written = false;
        for entry in self.annotators.values() {
            if let Some(corrected) = &entry.annotation {
                // The original is annotated once, before the first annotated coder
                if !original_written {
                    if let Some(original) = &self.annotation {
                        writeln!(f, "{} {}", ORIGINAL_ANNOTATION_PREFIX, original)?;
                    }
                    original_written = true;
                }
                writeln!(f, "{} {}", CORRECTED_ANNOTATION_PREFIX, corrected)?;
            }
            for edit in &entry.edits {
                writeln!(f, "{}", edit)?;
            }
        }

        writeln!(f)
    }
}
