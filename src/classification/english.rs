/*!
 * English error categories.
 *
 * Rules are checked in order and the first match wins. Coarse tags come from
 * the PTB tag map, fine tags (`VBZ`, `POS`, ...) from the tokens themselves.
 */

use super::shared::{
    EditInfo, all_in, dep_category, exact_reordering, is_aux_dep, is_contraction, is_misspelled, is_rare_pos,
    looks_like_spelling, only_orth_change, same_lemma, same_stem, tag_set,
};
use super::{CategoryRules, EditTokens, OTHER};
use crate::alignment::cost::is_open_pos;
use crate::annotation::{Sentence, Token};
use crate::resources::Resources;

/// Auxiliary clitics and their full forms
const AUX_CONTRACTIONS: [(&str, &str); 3] = [("ca", "can"), ("sha", "shall"), ("wo", "will")];

/// Present forms of "be"
const BE_PRESENT: [&str; 3] = ["am", "is", "are"];

const AUX_DEPS: [&str; 2] = ["aux", "auxpass"];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRules;

impl CategoryRules for EnglishRules {
    fn one_sided(&self, tokens: &[Token], _sentence: &Sentence, resources: &Resources) -> String {
        let info = EditInfo::new(tokens, resources);

        if let [token] = tokens {
            // Possessive suffix: ' -> 's
            if token.tag() == "POS" {
                return "NOUN:POSS".to_string();
            }
            if is_contraction(token.text()) {
                return "CONTR".to_string();
            }
            // Infinitival "to" belongs to the verb form
            if token.lower() == "to" && token.pos() == "PART" && token.dep() != "prep" {
                return "VERB:FORM".to_string();
            }
        }

        if all_in(&info.deps, &AUX_DEPS) {
            return "VERB:TENSE".to_string();
        }

        let pos_set = tag_set(&info.pos, &[]);
        if let [pos] = pos_set.as_slice() {
            if !is_rare_pos(pos) {
                return pos.to_string();
            }
        }

        let dep_set = tag_set(&info.deps, &[]);
        if let [dep] = dep_set.as_slice() {
            if let Some(category) = dep_category(dep) {
                return category.to_string();
            }
        }

        // To-infinitives and phrasal verbs
        if pos_set == ["PART", "VERB"] {
            return "VERB".to_string();
        }

        OTHER.to_string()
    }

    fn two_sided(&self, edit: &EditTokens<'_>, resources: &Resources) -> String {
        let orig = EditInfo::new(edit.orig, resources);
        let cor = EditInfo::new(edit.cor, resources);

        if only_orth_change(&orig.words, &cor.words) {
            return "ORTH".to_string();
        }
        if exact_reordering(&orig.words, &cor.words) {
            return "WO".to_string();
        }

        match (edit.orig, edit.cor) {
            ([o], [c]) => one_to_one(edit, o, c, &orig, &cor, resources),
            _ => many_to_many(edit, &orig, &cor),
        }
    }
}

fn one_to_one(
    edit: &EditTokens<'_>,
    o: &Token,
    c: &Token,
    orig: &EditInfo<'_>,
    cor: &EditInfo<'_>,
    resources: &Resources,
) -> String {
    let (o_pos, c_pos) = (orig.pos[0], cor.pos[0]);
    let (o_dep, c_dep) = (orig.deps[0], cor.deps[0]);
    let (o_low, c_low) = (o.lower(), c.lower());

    // Special cases
    if o.tag() == "POS" || c.tag() == "POS" {
        return "NOUN:POSS".to_string();
    }
    if (is_contraction(&o_low) || is_contraction(&c_low)) && o_pos == c_pos {
        return "CONTR".to_string();
    }
    let is_aux_pair = AUX_CONTRACTIONS
        .iter()
        .any(|(short, long)| (o_low == *short && c_low == *long) || (o_low == *long && c_low == *short));
    if is_aux_pair {
        return "CONTR".to_string();
    }
    if AUX_CONTRACTIONS
        .iter()
        .any(|(short, _)| o_low == *short || c_low == *short)
    {
        return "VERB:TENSE".to_string();
    }
    let pair = tag_set(&[o_low.as_str()], &[c_low.as_str()]);
    if pair == ["was", "were"] {
        return "VERB:SVA".to_string();
    }
    if pair.len() == 2 && all_in(&pair, &BE_PRESENT) {
        return "VERB:SVA".to_string();
    }

    // Spelling takes precedence over POS
    if is_misspelled(o.text(), resources) {
        if same_lemma(o, c) {
            if o_pos == c_pos && (o_pos == "NOUN" || o_pos == "VERB") {
                return format!("{}:INFL", o_pos);
            }
            return "MORPH".to_string();
        }
        if looks_like_spelling(o.text(), c.text()) {
            return "SPELL".to_string();
        }
        if o_pos == c_pos && !is_rare_pos(o_pos) {
            return o_pos.to_string();
        }
        return OTHER.to_string();
    }

    // Inflection: same lemma on open classes
    if same_lemma(o, c) && is_open_pos(o_pos) && is_open_pos(c_pos) {
        if o_pos == c_pos {
            match o_pos {
                "ADJ" => return "ADJ:FORM".to_string(),
                "NOUN" => return "NOUN:NUM".to_string(),
                "VERB" => {
                    if let Some(category) = verb_inflection(edit, o, c) {
                        return category.to_string();
                    }
                }
                _ => {}
            }
        }
        if all_in(&[o_dep, c_dep], &["acomp", "amod"]) {
            return "ADJ:FORM".to_string();
        }
        // Adjective to plural noun: musical -> musicals
        if o_pos == "ADJ" && c.tag() == "NNS" {
            return "NOUN:NUM".to_string();
        }
        return match c.tag() {
            "VBG" | "VBN" => "VERB:FORM",
            "VBD" => "VERB:TENSE",
            "VBZ" => "VERB:SVA",
            _ => "MORPH",
        }
        .to_string();
    }

    // Derivational morphology
    if same_stem(o, c, resources) && is_open_pos(o_pos) && is_open_pos(c_pos) {
        return "MORPH".to_string();
    }

    // General
    if is_aux_dep(o_dep) && is_aux_dep(c_dep) {
        return "VERB:TENSE".to_string();
    }
    if o_pos == c_pos && !is_rare_pos(o_pos) {
        return o_pos.to_string();
    }
    if o_dep == c_dep {
        if let Some(category) = dep_category(o_dep) {
            return category.to_string();
        }
    }
    let pos_set = tag_set(&orig.pos, &cor.pos);
    if pos_set == ["PART", "PREP"] {
        return "PART".to_string();
    }
    if pos_set == ["DET", "PRON"] {
        match c_dep {
            "nsubj" | "nsubjpass" | "dobj" | "pobj" => return "PRON".to_string(),
            "poss" => return "DET".to_string(),
            _ => {}
        }
    }

    OTHER.to_string()
}

/// Verb errors between two forms of the same lemma
fn verb_inflection(edit: &EditTokens<'_>, o: &Token, c: &Token) -> Option<&'static str> {
    // Main verbs after an auxiliary cannot carry tense or agreement
    if preceded_by_aux(edit, o, c) {
        return Some("VERB:FORM");
    }
    let either = |tags: &[&str]| tags.contains(&o.tag()) || tags.contains(&c.tag());
    if either(&["VBG", "VBN"]) {
        return Some("VERB:FORM");
    }
    if either(&["VBD"]) {
        return Some("VERB:TENSE");
    }
    if either(&["VBZ"]) {
        return Some("VERB:SVA");
    }
    if is_aux_dep(o.dep()) && is_aux_dep(c.dep()) {
        return Some("VERB:TENSE");
    }
    None
}

/// Whether both tokens are governed by an auxiliary on their side
///
/// For auxiliaries themselves, true when neither is the first auxiliary of its head.
fn preceded_by_aux(edit: &EditTokens<'_>, o: &Token, c: &Token) -> bool {
    let first_aux = |sentence: &Sentence, head: usize| {
        sentence
            .children(head)
            .find(|child| is_aux_dep(child.dep()))
            .map(|child| child.text().to_string())
    };

    if is_aux_dep(o.dep()) && is_aux_dep(c.dep()) {
        let Some(o_first) = first_aux(edit.orig_sentence, o.head()) else {
            return false;
        };
        if o_first == o.text() {
            return false;
        }
        return first_aux(edit.cor_sentence, c.head()).is_some_and(|c_first| c_first != c.text());
    }

    let has_aux_child = |sentence: &Sentence, token: &Token| {
        sentence
            .children(token.index())
            .any(|child| child.dep() == "aux" || child.dep() == "auxpass")
    };
    has_aux_child(edit.orig_sentence, o) && has_aux_child(edit.cor_sentence, c)
}

fn many_to_many(edit: &EditTokens<'_>, orig: &EditInfo<'_>, cor: &EditInfo<'_>) -> String {
    let (Some(o_first), Some(o_last), Some(c_first), Some(c_last)) =
        (edit.orig.first(), edit.orig.last(), edit.cor.first(), edit.cor.last())
    else {
        return OTHER.to_string();
    };

    let deps = tag_set(&orig.deps, &cor.deps);
    if all_in(&deps, &AUX_DEPS) {
        return "VERB:TENSE".to_string();
    }

    let pos_set = tag_set(&orig.pos, &cor.pos);
    if let [pos] = pos_set.as_slice() {
        // Final verbs with the same lemma: eat -> has eaten
        if *pos == "VERB" && same_lemma(o_last, c_last) {
            return "VERB:TENSE".to_string();
        }
        if !is_rare_pos(pos) {
            return pos.to_string();
        }
    }

    if let [dep] = deps.as_slice() {
        if let Some(category) = dep_category(dep) {
            return category.to_string();
        }
    }

    // Infinitives, gerunds and phrasal verbs: to eat -> eating
    if pos_set == ["PART", "VERB"] {
        if same_lemma(o_last, c_last) {
            return "VERB:FORM".to_string();
        }
        return "VERB".to_string();
    }

    // Possessive nouns: friends -> friend 's
    if (orig.pos == ["NOUN", "PART"] || cor.pos == ["NOUN", "PART"]) && same_lemma(o_first, c_first) {
        return "NOUN:POSS".to_string();
    }

    // Periphrastic comparison: more free -> freer
    let is_degree = |word: &str| matches!(word.to_lowercase().as_str(), "more" | "most");
    if (is_degree(o_first.text()) || is_degree(c_first.text()))
        && same_lemma(o_last, c_last)
        && orig.words.len() <= 2
        && cor.words.len() <= 2
    {
        return "ADJ:FORM".to_string();
    }

    OTHER.to_string()
}
