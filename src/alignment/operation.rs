/*!
 * Alignment operations and merged edit spans.
 */

use std::fmt;

use crate::errors::AlignmentError;

/// Kind of one alignment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Identical surface text
    Match,
    /// One original token replaced by one corrected token
    Substitution,
    /// Corrected token with no original counterpart
    Insertion,
    /// Original token with no corrected counterpart
    Deletion,
    /// Block of `n` tokens reordered on the corrected side
    Transposition(usize),
}

impl OpKind {
    /// Kinds compare by family, so every transposition length is one family
    pub fn same_family(&self, other: &OpKind) -> bool {
        matches!(
            (self, other),
            (OpKind::Transposition(_), OpKind::Transposition(_))
        ) || self == other
    }

    pub fn is_match(&self) -> bool {
        matches!(self, OpKind::Match)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpKind::Match => write!(f, "M"),
            OpKind::Substitution => write!(f, "S"),
            OpKind::Insertion => write!(f, "I"),
            OpKind::Deletion => write!(f, "D"),
            OpKind::Transposition(n) => write!(f, "T{}", n),
        }
    }
}

/// One alignment step over half-open token ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOp {
    pub kind: OpKind,
    pub orig_start: usize,
    pub orig_end: usize,
    pub cor_start: usize,
    pub cor_end: usize,
}

impl AlignOp {
    pub fn new(kind: OpKind, orig_start: usize, orig_end: usize, cor_start: usize, cor_end: usize) -> Self {
        Self {
            kind,
            orig_start,
            orig_end,
            cor_start,
            cor_end,
        }
    }

    pub fn span(&self) -> EditSpan {
        EditSpan::new(self.orig_start, self.orig_end, self.cor_start, self.cor_end)
    }
}

/// A merged, non-match region of the alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditSpan {
    pub orig_start: usize,
    pub orig_end: usize,
    pub cor_start: usize,
    pub cor_end: usize,
}

impl EditSpan {
    pub fn new(orig_start: usize, orig_end: usize, cor_start: usize, cor_end: usize) -> Self {
        Self {
            orig_start,
            orig_end,
            cor_start,
            cor_end,
        }
    }

    /// Both sides empty
    pub fn is_empty(&self) -> bool {
        self.orig_start == self.orig_end && self.cor_start == self.cor_end
    }
}

/// Result of aligning two sentences
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Operations in sentence order
    pub ops: Vec<AlignOp>,
    /// Total cost of the chosen path
    pub cost: f64,
}

impl Alignment {
    /// Compact kind string, e.g. `MSSDI`
    pub fn signature(&self) -> String {
        self.ops.iter().map(|op| op.kind.to_string()).collect()
    }

    /// Check that the operations partition both sequences exactly
    pub fn validate(&self, orig_len: usize, cor_len: usize) -> Result<(), AlignmentError> {
        let mut orig_pos = 0;
        let mut cor_pos = 0;

        for op in &self.ops {
            if op.orig_start != orig_pos || op.cor_start != cor_pos {
                return Err(AlignmentError::Partition(format!(
                    "operation {} starts at ({}, {}) but the previous one ended at ({}, {})",
                    op.kind, op.orig_start, op.cor_start, orig_pos, cor_pos
                )));
            }
            let orig_width = op.orig_end.saturating_sub(op.orig_start);
            let cor_width = op.cor_end.saturating_sub(op.cor_start);
            let well_formed = match op.kind {
                OpKind::Match | OpKind::Substitution => orig_width >= 1 && cor_width >= 1,
                OpKind::Insertion => orig_width == 0 && cor_width >= 1,
                OpKind::Deletion => orig_width >= 1 && cor_width == 0,
                OpKind::Transposition(n) => n >= 2 && orig_width == n && cor_width == n,
            };
            if !well_formed || op.orig_end < op.orig_start || op.cor_end < op.cor_start {
                return Err(AlignmentError::Partition(format!(
                    "operation {} has invalid widths ({}, {})",
                    op.kind, orig_width, cor_width
                )));
            }
            orig_pos = op.orig_end;
            cor_pos = op.cor_end;
        }

        if orig_pos != orig_len || cor_pos != cor_len {
            return Err(AlignmentError::Partition(format!(
                "alignment covers ({}, {}) of ({}, {}) tokens",
                orig_pos, cor_pos, orig_len, cor_len
            )));
        }
        Ok(())
    }
}
