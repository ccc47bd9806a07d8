/*!
 * Token-list predicates used by every rule cascade.
 */

use crate::alignment::cost::char_similarity;
use crate::annotation::Token;
use crate::resources::Resources;

/// Coarse tags too uninformative to become a category
pub const RARE_POS: [&str; 4] = ["INTJ", "NUM", "SYM", "X"];

/// Clitic contractions
pub const CONTRACTIONS: [&str; 7] = ["'d", "'ll", "'m", "n't", "'re", "'s", "'ve"];

/// Dependency labels that identify a coarse category on their own
const DEP_CATEGORIES: [(&str, &str); 7] = [
    ("acomp", "ADJ"),
    ("amod", "ADJ"),
    ("advmod", "ADV"),
    ("det", "DET"),
    ("prep", "PREP"),
    ("prt", "PART"),
    ("punct", "PUNCT"),
];

/// Surface strings, coarse tags (through the tag map) and dependency labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditInfo<'a> {
    pub words: Vec<&'a str>,
    pub pos: Vec<&'a str>,
    pub deps: Vec<&'a str>,
}

impl<'a> EditInfo<'a> {
    pub fn new(tokens: &'a [Token], resources: &'a Resources) -> Self {
        Self {
            words: tokens.iter().map(Token::text).collect(),
            pos: tokens.iter().map(|t| resources.coarse_tag(t.tag())).collect(),
            deps: tokens.iter().map(Token::dep).collect(),
        }
    }
}

pub fn is_rare_pos(pos: &str) -> bool {
    RARE_POS.contains(&pos)
}

pub fn is_contraction(word: &str) -> bool {
    CONTRACTIONS.contains(&word.to_lowercase().as_str())
}

pub fn is_aux_dep(dep: &str) -> bool {
    dep.starts_with("aux")
}

/// Category implied by a dependency label, if any
pub fn dep_category(dep: &str) -> Option<&'static str> {
    DEP_CATEGORIES
        .iter()
        .find(|(label, _)| *label == dep)
        .map(|(_, category)| *category)
}

/// Sorted, deduplicated union of two tag lists
pub fn tag_set<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<&'a str> {
    let mut set: Vec<&str> = a.iter().chain(b.iter()).copied().collect();
    set.sort_unstable();
    set.dedup();
    set
}

/// Every item is one of `allowed`; false for an empty list
pub fn all_in(items: &[&str], allowed: &[&str]) -> bool {
    !items.is_empty() && items.iter().all(|item| allowed.contains(item))
}

/// Only case or whitespace differs
pub fn only_orth_change(orig: &[&str], cor: &[&str]) -> bool {
    let join = |words: &[&str]| words.concat().to_lowercase();
    join(orig) == join(cor)
}

/// Same lower-cased words in a different order
pub fn exact_reordering(orig: &[&str], cor: &[&str]) -> bool {
    let sorted = |words: &[&str]| {
        let mut lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        lowered.sort();
        lowered
    };
    sorted(orig) == sorted(cor)
}

pub fn same_lemma(a: &Token, b: &Token) -> bool {
    a.lemma().to_lowercase() == b.lemma().to_lowercase()
}

pub fn same_stem(a: &Token, b: &Token, resources: &Resources) -> bool {
    resources.stem(a.text()) == resources.stem(b.text())
}

/// Alphabetic word missing from the word list
pub fn is_misspelled(word: &str, resources: &Resources) -> bool {
    word.chars().all(char::is_alphabetic) && !word.is_empty() && resources.word_list.is_unknown(word)
}

/// Shared character ratio for spelling decisions
pub fn looks_like_spelling(orig: &str, cor: &str) -> bool {
    char_similarity(orig, cor) > 0.5
}
