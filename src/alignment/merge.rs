/*!
 * Operation merger.
 *
 * Turns the raw alignment into edit spans. Matches are dropped; the
 * remaining operations are split or merged according to a `MergePolicy`.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::cost::{char_cost, is_open_pos};
use super::operation::{AlignOp, EditSpan, OpKind};
use crate::annotation::{Sentence, Token};

/// Characters ignored when comparing joined spans (`sub - way` vs `subway`)
static JOINER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"['\-\s]").expect("Invalid joiner regex"));

/// Strategy for combining adjacent non-match operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Linguistic merging heuristics
    #[default]
    Rules,
    /// One edit per non-match operation, e.g. MSSDI -> M, S, S, D, I
    AllSplit,
    /// Merge every run of non-matches, e.g. MSSDI -> M, SSDI
    AllMerge,
    /// Merge runs of the same kind, e.g. MSSDI -> M, SS, D, I
    AllEqual,
}

impl MergePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::AllSplit => "all-split",
            Self::AllMerge => "all-merge",
            Self::AllEqual => "all-equal",
        }
    }
}

impl std::fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for MergePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rules" => Ok(Self::Rules),
            "all-split" => Ok(Self::AllSplit),
            "all-merge" => Ok(Self::AllMerge),
            "all-equal" => Ok(Self::AllEqual),
            _ => Err(anyhow::anyhow!("Invalid merge policy: {}", s)),
        }
    }
}

/// Merges alignment operations into edit spans for one sentence pair
pub struct Merger<'a> {
    orig: &'a Sentence,
    cor: &'a Sentence,
}

impl<'a> Merger<'a> {
    pub fn new(orig: &'a Sentence, cor: &'a Sentence) -> Self {
        Self { orig, cor }
    }

    /// Apply `policy` to an operation sequence in sentence order
    pub fn merge(&self, ops: &[AlignOp], policy: MergePolicy) -> Vec<EditSpan> {
        match policy {
            MergePolicy::AllSplit => ops
                .iter()
                .filter(|op| !op.kind.is_match())
                .map(AlignOp::span)
                .collect(),
            MergePolicy::AllMerge => group_runs(ops, |a, b| a.is_match() == b.is_match())
                .into_iter()
                .filter(|run| !run[0].kind.is_match())
                .flat_map(merge_all)
                .collect(),
            MergePolicy::AllEqual => group_runs(ops, |a, b| a.same_family(b))
                .into_iter()
                .filter(|run| !run[0].kind.is_match())
                .flat_map(merge_all)
                .collect(),
            MergePolicy::Rules => self.merge_by_rules(ops),
        }
    }

    fn merge_by_rules(&self, ops: &[AlignOp]) -> Vec<EditSpan> {
        let class = |kind: &OpKind| match kind {
            OpKind::Match => 0,
            OpKind::Transposition(_) => 1,
            _ => 2,
        };

        let mut spans = Vec::new();
        for run in group_runs(ops, |a, b| class(a) == class(b)) {
            match run[0].kind {
                OpKind::Match => {}
                // Reorderings are never merged with their neighbours
                OpKind::Transposition(_) => spans.extend(run.iter().map(AlignOp::span)),
                _ => spans.extend(self.process(run)),
            }
        }
        spans
    }

    /// Recursive rule-based merging of one run of S/I/D operations
    fn process(&self, ops: &[AlignOp]) -> Vec<EditSpan> {
        if ops.len() <= 1 {
            return split_all(ops);
        }
        let kinds: Vec<OpKind> = ops.iter().map(|op| op.kind).collect();
        if kinds.iter().all(|k| *k == OpKind::Deletion) || kinds.iter().all(|k| *k == OpKind::Insertion) {
            return merge_all(ops);
        }

        let mut content = false;
        for (start, end) in combinations_longest_first(ops.len()) {
            if !kinds[start..=end].contains(&OpKind::Substitution) {
                continue;
            }
            let s = self.orig.slice(ops[start].orig_start, ops[end].orig_end);
            let t = self.cor.slice(ops[start].cor_start, ops[end].cor_end);
            let (Some(s_last), Some(t_last)) = (s.last(), t.last()) else {
                continue;
            };

            // Possessive suffixes merge with the previous token: [friends -> friend 's]
            if s_last.tag() == "POS" || t_last.tag() == "POS" {
                return self.merge_pair_at(ops, end);
            }

            // Case changes
            if s_last.lower() == t_last.lower() {
                // Leading insertion or deletion before a capitalised word: [Cat -> The big cat]
                if start == 0
                    && ((s.len() == 1 && starts_uppercase(&t[0])) || (t.len() == 1 && starts_uppercase(&s[0])))
                {
                    let mut spans = merge_all(&ops[start..=end]);
                    spans.extend(self.process(&ops[end + 1..]));
                    return spans;
                }
                // Merge with previous punctuation: [, we -> . We], [we -> . We]
                if (s.len() > 1 && is_punct(&s[s.len() - 2])) || (t.len() > 1 && is_punct(&t[t.len() - 2])) {
                    return self.merge_pair_at(ops, end);
                }
            }

            // Whitespace and hyphens: [bestfriend -> best friend], [sub - way -> subway]
            if joined(s) == joined(t) {
                return self.merge_range(ops, start, end);
            }

            // Same POS or infinitive/phrasal verbs: [to eat -> eating], [watch -> look at]
            let mut pos_set: Vec<&str> = s.iter().chain(t.iter()).map(Token::pos).collect();
            pos_set.sort_unstable();
            pos_set.dedup();
            if (pos_set.len() == 1 && s.len() != t.len()) || pos_set == ["PART", "VERB"] {
                return self.merge_range(ops, start, end);
            }

            // Parallel multi-word units: [has eaten -> was eating], [a apple -> an apple]
            if kinds[start..=end].iter().all(|k| *k == OpKind::Substitution) && is_unit(s) && is_unit(t) {
                let s_pos: Vec<&str> = s.iter().map(Token::pos).collect();
                let t_pos: Vec<&str> = t.iter().map(Token::pos).collect();
                if s_pos == t_pos {
                    return self.merge_range(ops, start, end);
                }
            }

            // Split rules take effect on the smallest chunks
            if end - start < 2 {
                // Split adjacent substitutions
                if s.len() == 2 && t.len() == 2 {
                    return self.split_after(ops, start);
                }
                // Similar substitutions at either end
                if (kinds[start] == OpKind::Substitution && char_cost(s[0].text(), t[0].text()) < 0.25)
                    || (kinds[end] == OpKind::Substitution && char_cost(s_last.text(), t_last.text()) < 0.25)
                {
                    return self.split_after(ops, start);
                }
                // Split final determiners
                let last = kinds[kinds.len() - 1];
                if end == ops.len() - 1
                    && ((matches!(last, OpKind::Deletion | OpKind::Substitution) && s_last.pos() == "DET")
                        || (matches!(last, OpKind::Insertion | OpKind::Substitution) && t_last.pos() == "DET"))
                {
                    let mut spans = self.process(&ops[..ops.len() - 1]);
                    spans.push(ops[ops.len() - 1].span());
                    return spans;
                }
                if pos_set.iter().any(|p| is_open_pos(p)) {
                    content = true;
                }
            }
        }

        // Merge sequences that involve content words
        if content {
            merge_all(ops)
        } else {
            split_all(ops)
        }
    }

    /// process(..end-1) + merge(end-1..=end) + process(end+1..)
    fn merge_pair_at(&self, ops: &[AlignOp], end: usize) -> Vec<EditSpan> {
        let mut spans = self.process(&ops[..end - 1]);
        spans.extend(merge_all(&ops[end - 1..=end]));
        spans.extend(self.process(&ops[end + 1..]));
        spans
    }

    /// process(..start) + merge(start..=end) + process(end+1..)
    fn merge_range(&self, ops: &[AlignOp], start: usize, end: usize) -> Vec<EditSpan> {
        let mut spans = self.process(&ops[..start]);
        spans.extend(merge_all(&ops[start..=end]));
        spans.extend(self.process(&ops[end + 1..]));
        spans
    }

    /// process(..=start) + process(start+1..)
    fn split_after(&self, ops: &[AlignOp], start: usize) -> Vec<EditSpan> {
        let mut spans = self.process(&ops[..=start]);
        spans.extend(self.process(&ops[start + 1..]));
        spans
    }
}

/// Consecutive runs whose neighbours satisfy `same`
fn group_runs<F>(ops: &[AlignOp], same: F) -> Vec<&[AlignOp]>
where
    F: Fn(&OpKind, &OpKind) -> bool,
{
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=ops.len() {
        if i == ops.len() || !same(&ops[i - 1].kind, &ops[i].kind) {
            if start < i {
                runs.push(&ops[start..i]);
            }
            start = i;
        }
    }
    runs
}

/// Every (start, end) pair with start < end, widest first, ties in lexical order
fn combinations_longest_first(len: usize) -> Vec<(usize, usize)> {
    let mut combos: Vec<(usize, usize)> = (0..len)
        .flat_map(|start| (start + 1..len).map(move |end| (start, end)))
        .collect();
    combos.sort_by_key(|(start, end)| std::cmp::Reverse(end - start));
    combos
}

/// One span covering every operation, nothing for an empty slice
fn merge_all(ops: &[AlignOp]) -> Vec<EditSpan> {
    match (ops.first(), ops.last()) {
        (Some(first), Some(last)) => vec![EditSpan::new(
            first.orig_start,
            last.orig_end,
            first.cor_start,
            last.cor_end,
        )],
        _ => Vec::new(),
    }
}

fn split_all(ops: &[AlignOp]) -> Vec<EditSpan> {
    ops.iter().map(AlignOp::span).collect()
}

fn starts_uppercase(token: &Token) -> bool {
    token.text().chars().next().is_some_and(char::is_uppercase)
}

fn is_punct(token: &Token) -> bool {
    if token.pos() == "PUNCT" {
        return true;
    }
    let mut chars = token.text().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

/// Lower-cased concatenation without apostrophes, hyphens or spaces
fn joined(tokens: &[Token]) -> String {
    let text: String = tokens.iter().map(Token::lower).collect();
    JOINER_REGEX.replace_all(&text, "").into_owned()
}

/// Determiner + noun, or a chain of verbs
fn is_unit(tokens: &[Token]) -> bool {
    let pos: Vec<&str> = tokens.iter().map(Token::pos).collect();
    match pos.as_slice() {
        ["DET", "NOUN"] => true,
        [first, _, ..] => *first == "VERB" && pos.iter().all(|p| *p == "VERB"),
        _ => false,
    }
}
