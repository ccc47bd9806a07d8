/*!
 * Alignment matrix builder.
 *
 * Fills an `(n+1) x (m+1)` cost matrix over two annotated sentences, keeps
 * the winning operation of every cell and backtracks from `(n, m)` to
 * `(0, 0)`. Identical tokens are always matched; otherwise the first minimum
 * of transposition, substitution, insertion and deletion wins.
 */

use log::trace;

use super::cost::{INDEL_COST, LEVENSHTEIN_SUB_COST, substitution_cost};
use super::operation::{AlignOp, Alignment, OpKind};
use crate::annotation::{Sentence, Stemmer};

/// Cost model and options for one alignment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignerOptions {
    /// Plain Levenshtein costs, no linguistic weighting
    pub levenshtein: bool,
    /// Detect reordered token blocks (linguistic mode only)
    pub transpositions: bool,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            levenshtein: false,
            transpositions: true,
        }
    }
}

/// Edit-distance aligner over annotated sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    options: AlignerOptions,
}

impl Aligner {
    pub fn new(options: AlignerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AlignerOptions {
        self.options
    }

    /// Align `orig` to `cor`
    ///
    /// # Arguments
    /// * `orig` - Annotated original sentence
    /// * `cor` - Annotated corrected sentence
    /// * `stemmer` - Stemmer used by the linguistic substitution cost
    ///
    /// # Returns
    /// * `Alignment` - Operations in sentence order plus the path cost
    pub fn align(&self, orig: &Sentence, cor: &Sentence, stemmer: &dyn Stemmer) -> Alignment {
        let n = orig.len();
        let m = cor.len();

        // One side empty: the whole other side is a single operation
        if n == 0 && m == 0 {
            return Alignment { ops: Vec::new(), cost: 0.0 };
        }
        if n == 0 {
            return Alignment {
                ops: vec![AlignOp::new(OpKind::Insertion, 0, 0, 0, m)],
                cost: m as f64 * INDEL_COST,
            };
        }
        if m == 0 {
            return Alignment {
                ops: vec![AlignOp::new(OpKind::Deletion, 0, n, 0, 0)],
                cost: n as f64 * INDEL_COST,
            };
        }

        let (cost_matrix, op_matrix) = self.build_matrices(orig, cor, stemmer);
        let ops = backtrack(&op_matrix, n, m);
        let cost = cost_matrix[n][m];
        trace!("Aligned {} x {} tokens at cost {:.3}", n, m, cost);

        Alignment { ops, cost }
    }

    fn build_matrices(
        &self,
        orig: &Sentence,
        cor: &Sentence,
        stemmer: &dyn Stemmer,
    ) -> (Vec<Vec<f64>>, Vec<Vec<OpKind>>) {
        let o = orig.tokens();
        let c = cor.tokens();
        let n = o.len();
        let m = c.len();
        let o_low: Vec<String> = o.iter().map(|t| t.lower()).collect();
        let c_low: Vec<String> = c.iter().map(|t| t.lower()).collect();

        let mut cost = vec![vec![0.0_f64; m + 1]; n + 1];
        // Row and column zero only hold deletions and insertions
        let mut ops = vec![vec![OpKind::Match; m + 1]; n + 1];

        for i in 1..=n {
            cost[i][0] = cost[i - 1][0] + INDEL_COST;
            ops[i][0] = OpKind::Deletion;
        }
        for j in 1..=m {
            cost[0][j] = cost[0][j - 1] + INDEL_COST;
            ops[0][j] = OpKind::Insertion;
        }

        for i in 0..n {
            for j in 0..m {
                if o[i].text() == c[j].text() {
                    cost[i + 1][j + 1] = cost[i][j];
                    ops[i + 1][j + 1] = OpKind::Match;
                    continue;
                }

                let del_cost = cost[i][j + 1] + INDEL_COST;
                let ins_cost = cost[i + 1][j] + INDEL_COST;
                let mut trans = None;

                let sub_cost = if self.options.levenshtein {
                    cost[i][j] + LEVENSHTEIN_SUB_COST
                } else {
                    if self.options.transpositions {
                        trans = find_transposition(&cost, &o_low, &c_low, i, j);
                    }
                    cost[i][j] + substitution_cost(&o[i], &c[j], stemmer)
                };

                // Priority order on ties: transposition, substitution, insertion, deletion
                let mut best = (f64::INFINITY, OpKind::Match);
                let candidates = [
                    trans.map(|(k, t_cost)| (t_cost, OpKind::Transposition(k))),
                    Some((sub_cost, OpKind::Substitution)),
                    Some((ins_cost, OpKind::Insertion)),
                    Some((del_cost, OpKind::Deletion)),
                ];
                for (candidate_cost, kind) in candidates.into_iter().flatten() {
                    if candidate_cost < best.0 {
                        best = (candidate_cost, kind);
                    }
                }

                cost[i + 1][j + 1] = best.0;
                ops[i + 1][j + 1] = best.1;
            }
        }

        (cost, ops)
    }
}

/// Look back along the diagonal for a reordered block ending at `(i, j)`
///
/// Returns the block width and the cost of aligning it as one transposition.
fn find_transposition(
    cost: &[Vec<f64>],
    o_low: &[String],
    c_low: &[String],
    i: usize,
    j: usize,
) -> Option<(usize, f64)> {
    let mut k = 1;
    while i >= k && j >= k && cost[i - k + 1][j - k + 1] != cost[i - k][j - k] {
        let mut orig_block: Vec<&String> = o_low[i - k..=i].iter().collect();
        let mut cor_block: Vec<&String> = c_low[j - k..=j].iter().collect();
        orig_block.sort();
        cor_block.sort();
        if orig_block == cor_block {
            return Some((k + 1, cost[i - k][j - k] + k as f64));
        }
        k += 1;
    }
    None
}

/// Walk the operation matrix from the bottom-right corner back to the origin
fn backtrack(op_matrix: &[Vec<OpKind>], n: usize, m: usize) -> Vec<AlignOp> {
    let mut i = n;
    let mut j = m;
    let mut seq = Vec::new();

    while i + j != 0 {
        let kind = if i == 0 {
            OpKind::Insertion
        } else if j == 0 {
            OpKind::Deletion
        } else {
            op_matrix[i][j]
        };

        match kind {
            OpKind::Match | OpKind::Substitution => {
                seq.push(AlignOp::new(kind, i - 1, i, j - 1, j));
                i -= 1;
                j -= 1;
            }
            OpKind::Deletion => {
                seq.push(AlignOp::new(kind, i - 1, i, j, j));
                i -= 1;
            }
            OpKind::Insertion => {
                seq.push(AlignOp::new(kind, i, i, j - 1, j));
                j -= 1;
            }
            OpKind::Transposition(k) => {
                seq.push(AlignOp::new(kind, i - k, i, j - k, j));
                i -= k;
                j -= k;
            }
        }
    }

    seq.reverse();
    seq
}
