/*!
 * Edits and the M2 edit-line grammar.
 *
 * `A <start> <end>|||<category>|||<correction>|||REQUIRED|||-NONE-|||<annotator>`
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::alignment::EditSpan;
use crate::errors::M2Error;

/// Prefix of an edit line
pub const EDIT_PREFIX: &str = "A";

/// Field separator inside an edit line
pub const FIELD_SEPARATOR: &str = "|||";

/// Annotator proposed no correction
pub const NOOP: &str = "noop";

/// Legacy "uncorrected error" category
pub const UM: &str = "Um";

/// Unknown / uncorrected error
pub const UNK: &str = "UNK";

/// Correction text used by empty reserved edits
pub const NONE_CORRECTION: &str = "-NONE-";

/// Two whitespace-separated integers, possibly negative
static SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s+(-?\d+)\s*$").expect("Invalid span regex"));

/// One token-range replacement made by one annotator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    // @field: Half-open range in the original, None for `-1 -1`
    pub orig: Option<(usize, usize)>,

    // @field: Half-open range in the corrected sentence, None when not applied
    pub cor: Option<(usize, usize)>,

    // @field: Error category
    pub category: String,

    // @field: Replacement text, space-joined tokens
    pub correction: String,

    // @field: Annotator id
    pub annotator: String,
}

impl Edit {
    /// Edit over an aligned span
    pub fn from_span(span: EditSpan, category: &str, correction: &str, annotator: &str) -> Self {
        Self {
            orig: Some((span.orig_start, span.orig_end)),
            cor: Some((span.cor_start, span.cor_end)),
            category: category.to_string(),
            correction: correction.to_string(),
            annotator: annotator.to_string(),
        }
    }

    /// The `-1 -1|||noop|||-NONE-` edit of an annotator with no corrections
    pub fn noop(annotator: &str) -> Self {
        Self {
            orig: None,
            cor: None,
            category: NOOP.to_string(),
            correction: NONE_CORRECTION.to_string(),
            annotator: annotator.to_string(),
        }
    }

    /// Parse one `A ...` line
    ///
    /// # Arguments
    /// * `line` - The raw line, with its `A ` prefix
    /// * `line_no` - 1-based line number for error reporting
    ///
    /// # Returns
    /// * `Result<Edit, M2Error>` - The edit, with no corrected span yet
    pub fn parse(line: &str, line_no: usize) -> Result<Self, M2Error> {
        let malformed = |reason: &str| M2Error::MalformedEdit {
            line: line_no,
            reason: reason.to_string(),
            content: line.to_string(),
        };

        let body = line
            .strip_prefix(EDIT_PREFIX)
            .filter(|rest| rest.starts_with(' '))
            .ok_or_else(|| malformed("missing edit prefix"))?;

        let fields: Vec<&str> = body[1..].split(FIELD_SEPARATOR).collect();
        if fields.len() != 6 {
            return Err(malformed(&format!("expected 6 fields, found {}", fields.len())));
        }

        let captures = SPAN_REGEX
            .captures(fields[0])
            .ok_or_else(|| malformed("span is not two integers"))?;
        let start: i64 = captures[1].parse().map_err(|_| malformed("span start is not a number"))?;
        let end: i64 = captures[2].parse().map_err(|_| malformed("span end is not a number"))?;

        let category = fields[1].trim().to_string();
        let orig = if start == -1 && end == -1 {
            if !is_reserved(&category) {
                return Err(malformed("only noop, Um and UNK edits may use the -1 -1 span"));
            }
            None
        } else if start < 0 || end < start {
            return Err(malformed(&format!("invalid span {} {}", start, end)));
        } else {
            Some((start as usize, end as usize))
        };

        Ok(Self {
            orig,
            cor: None,
            category,
            correction: fields[2].to_string(),
            annotator: fields[5].trim().to_string(),
        })
    }

    pub fn is_noop(&self) -> bool {
        self.category == NOOP
    }

    /// `noop`, `Um` or `UNK`
    pub fn is_reserved(&self) -> bool {
        is_reserved(&self.category)
    }

    /// Whether the edit contributes to the corrected sentence
    pub fn is_applied(&self) -> bool {
        self.orig.is_some() && self.category != NOOP && self.category != UM
    }

    /// Corrected tokens carried by the edit
    pub fn correction_tokens(&self) -> Vec<&str> {
        if self.correction == NONE_CORRECTION {
            return Vec::new();
        }
        self.correction.split_whitespace().collect()
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Span pair for alignment-side consumers, None for unplaced edits
    pub fn span(&self) -> Option<EditSpan> {
        match (self.orig, self.cor) {
            (Some((os, oe)), Some((cs, ce))) => Some(EditSpan::new(os, oe, cs, ce)),
            _ => None,
        }
    }
}

/// Whether a category is a sentinel that bypasses classification
pub fn is_reserved(category: &str) -> bool {
    matches!(category, NOOP | UM | UNK)
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (start, end) = match self.orig {
            Some((start, end)) => (start as i64, end as i64),
            None => (-1, -1),
        };
        write!(
            f,
            "{} {} {}|||{}|||{}|||REQUIRED|||-NONE-|||{}",
            EDIT_PREFIX, start, end, self.category, self.correction, self.annotator
        )
    }
}
