/*!
 * German error categories over STTS tags.
 */

use super::shared::{
    EditInfo, exact_reordering, is_misspelled, is_rare_pos, looks_like_spelling, only_orth_change, same_lemma,
    same_stem, tag_set,
};
use super::{CategoryRules, EditTokens, OTHER};
use crate::alignment::cost::is_open_pos;
use crate::annotation::{Sentence, Token};
use crate::resources::Resources;

/// Coarse tags whose same-lemma changes are inflection errors
const INFLECTING_POS: [&str; 5] = ["ADJ", "DET", "NOUN", "PRON", "VERB"];

#[derive(Debug, Clone, Copy, Default)]
pub struct GermanRules;

impl CategoryRules for GermanRules {
    fn one_sided(&self, tokens: &[Token], _sentence: &Sentence, resources: &Resources) -> String {
        let info = EditInfo::new(tokens, resources);

        if let [token] = tokens {
            // Infinitival "zu"
            if token.tag() == "PTKZU" {
                return "VERB:FORM".to_string();
            }
        }

        let pos_set = tag_set(&info.pos, &[]);
        if let [pos] = pos_set.as_slice() {
            if !is_rare_pos(pos) {
                return pos.to_string();
            }
        }
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
            ([o], [c]) => one_to_one(o, c, orig.pos[0], cor.pos[0], resources),
            _ => many_to_many(edit, &orig, &cor),
        }
    }
}

fn one_to_one(o: &Token, c: &Token, o_pos: &str, c_pos: &str, resources: &Resources) -> String {
    if is_misspelled(o.text(), resources) && !same_lemma(o, c) && looks_like_spelling(o.text(), c.text()) {
        return "SPELL".to_string();
    }

    // Inflection: der -> den, Haus -> Hauses
    if same_lemma(o, c) && o_pos == c_pos && INFLECTING_POS.contains(&o_pos) {
        return format!("{}:FORM", o_pos);
    }
    if o.tag() == "PTKZU" || c.tag() == "PTKZU" {
        return "VERB:FORM".to_string();
    }
    if same_stem(o, c, resources) && is_open_pos(o_pos) && is_open_pos(c_pos) {
        return "MORPH".to_string();
    }
    if o_pos == c_pos && !is_rare_pos(o_pos) {
        return o_pos.to_string();
    }

    OTHER.to_string()
}

fn many_to_many(edit: &EditTokens<'_>, orig: &EditInfo<'_>, cor: &EditInfo<'_>) -> String {
    let (Some(o_last), Some(c_last)) = (edit.orig.last(), edit.cor.last()) else {
        return OTHER.to_string();
    };

    let pos_set = tag_set(&orig.pos, &cor.pos);
    if let [pos] = pos_set.as_slice() {
        // Verb chains ending in the same verb: ging -> ist gegangen
        if *pos == "VERB" && same_lemma(o_last, c_last) {
            return "VERB:TENSE".to_string();
        }
        if !is_rare_pos(pos) {
            return pos.to_string();
        }
    }
    if pos_set == ["PART", "VERB"] {
        if same_lemma(o_last, c_last) {
            return "VERB:FORM".to_string();
        }
        return "VERB".to_string();
    }

    OTHER.to_string()
}
