/*!
 * Substitution costs for the alignment matrix.
 *
 * Related words (same lemma, same stem, same or open-class POS, similar
 * spelling) are cheaper to substitute than unrelated ones, and every
 * substitution stays cheaper than a deletion plus an insertion.
 */

use crate::annotation::{Stemmer, Token};

/// Cost of inserting or deleting one token
pub const INDEL_COST: f64 = 1.0;

/// Substitution cost in Levenshtein mode
pub const LEVENSHTEIN_SUB_COST: f64 = 1.0;

/// Lemma component when the lemmas differ
pub const LEMMA_MISMATCH_COST: f64 = 0.499;

/// Lemma component when lemmas differ but the stems agree
pub const STEM_MATCH_COST: f64 = 0.25;

/// POS component when both tags are open class but differ
pub const OPEN_POS_COST: f64 = 0.25;

/// POS component for any other tag mismatch
pub const POS_MISMATCH_COST: f64 = 0.5;

/// Content-word coarse tags
pub const OPEN_POS: [&str; 4] = ["ADJ", "ADV", "NOUN", "VERB"];

pub fn is_open_pos(pos: &str) -> bool {
    OPEN_POS.contains(&pos)
}

/// Linguistically weighted cost of replacing `orig` by `cor`
pub fn substitution_cost(orig: &Token, cor: &Token, stemmer: &dyn Stemmer) -> f64 {
    if orig.lower() == cor.lower() {
        return 0.0;
    }

    let lemma_cost = if orig.lemma() == cor.lemma() {
        0.0
    } else if stemmer.stem(orig.text()) == stemmer.stem(cor.text()) {
        STEM_MATCH_COST
    } else {
        LEMMA_MISMATCH_COST
    };

    let pos_cost = if orig.pos() == cor.pos() {
        0.0
    } else if is_open_pos(orig.pos()) && is_open_pos(cor.pos()) {
        OPEN_POS_COST
    } else {
        POS_MISMATCH_COST
    };

    lemma_cost + pos_cost + char_cost(orig.text(), cor.text())
}

/// 1 - normalised character similarity
pub fn char_cost(a: &str, b: &str) -> f64 {
    1.0 - char_similarity(a, b)
}

/// Normalised Levenshtein similarity in [0, 1]
pub fn char_similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }

    1.0 - (levenshtein_distance(a, b) as f64 / max_len as f64)
}

/// Character-level edit distance with unit costs
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Keep the row over the shorter word
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + usize::from(lc != sc));
            diagonal = above;
        }
    }
    row[short.len()]
}
