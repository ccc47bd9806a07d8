/*!
 * Error-type classification.
 *
 * A `Classifier` owns the rule cascade of one language, chosen once at
 * startup. The operation prefix (`M:`, `U:`, `R:`) and the handling of
 * case-only trailing tokens are common to every language; the cascades only
 * decide the part after the prefix.
 */

pub mod english;
pub mod german;
pub mod shared;

use std::fmt::Debug;

use log::trace;

pub use english::EnglishRules;
pub use german::GermanRules;

use crate::alignment::EditSpan;
use crate::annotation::{Sentence, Token};
use crate::language_utils::CorpusLanguage;
use crate::m2::edit::{Edit, UM, UNK, is_reserved};
use crate::resources::Resources;

/// Catch-all category of every cascade
pub const OTHER: &str = "OTHER";

/// The tokens of one edit together with the sentences they come from
#[derive(Debug, Clone, Copy)]
pub struct EditTokens<'a> {
    pub orig_sentence: &'a Sentence,
    pub cor_sentence: &'a Sentence,
    pub orig: &'a [Token],
    pub cor: &'a [Token],
}

impl<'a> EditTokens<'a> {
    pub fn new(orig_sentence: &'a Sentence, cor_sentence: &'a Sentence, span: EditSpan) -> Self {
        Self {
            orig_sentence,
            cor_sentence,
            orig: orig_sentence.slice(span.orig_start, span.orig_end),
            cor: cor_sentence.slice(span.cor_start, span.cor_end),
        }
    }

    /// Same edit with the last token removed from both sides
    fn without_last(&self) -> Self {
        Self {
            orig: &self.orig[..self.orig.len().saturating_sub(1)],
            cor: &self.cor[..self.cor.len().saturating_sub(1)],
            ..*self
        }
    }
}

/// Language-specific category cascade
pub trait CategoryRules: Send + Sync + Debug {
    /// Category of tokens that only exist on one side (missing or unnecessary)
    fn one_sided(&self, tokens: &[Token], sentence: &Sentence, resources: &Resources) -> String;

    /// Category of a replacement with tokens on both sides
    fn two_sided(&self, edit: &EditTokens<'_>, resources: &Resources) -> String;
}

/// Assigns exactly one category to every edit
#[derive(Debug)]
pub struct Classifier {
    rules: Box<dyn CategoryRules>,
}

impl Classifier {
    pub fn new(rules: Box<dyn CategoryRules>) -> Self {
        Self { rules }
    }

    /// Built-in cascade for a language
    pub fn for_language(language: CorpusLanguage) -> Self {
        match language {
            CorpusLanguage::English => Self::new(Box::new(EnglishRules)),
            CorpusLanguage::German => Self::new(Box::new(GermanRules)),
        }
    }

    /// Category of an aligned span
    pub fn classify(&self, span: EditSpan, orig: &Sentence, cor: &Sentence, resources: &Resources) -> String {
        let category = self.classify_tokens(&EditTokens::new(orig, cor, span), resources);
        trace!("Classified {:?} as {}", span, category);
        category
    }

    /// Reclassify an edit, leaving reserved categories alone
    ///
    /// `Um` becomes `UNK` unless `legacy` is set; `noop` and `UNK` pass through.
    pub fn reclassify(&self, edit: Edit, orig: &Sentence, cor: &Sentence, resources: &Resources, legacy: bool) -> Edit {
        if let Some(category) = reserved_category(&edit.category, legacy) {
            return edit.with_category(&category);
        }
        match edit.span() {
            Some(span) => {
                let category = self.classify(span, orig, cor, resources);
                edit.with_category(&category)
            }
            None => edit.with_category(UNK),
        }
    }

    fn classify_tokens(&self, edit: &EditTokens<'_>, resources: &Resources) -> String {
        match (edit.orig.is_empty(), edit.cor.is_empty()) {
            // Detected but not corrected
            (true, true) => UNK.to_string(),
            (true, false) => format!("M:{}", self.rules.one_sided(edit.cor, edit.cor_sentence, resources)),
            (false, true) => format!("U:{}", self.rules.one_sided(edit.orig, edit.orig_sentence, resources)),
            (false, false) => {
                let same_text = edit.orig.iter().map(Token::text).eq(edit.cor.iter().map(Token::text));
                if same_text {
                    return UNK.to_string();
                }

                // Case changes on a trailing token are ignored: [Doctor -> The doctor]
                let last_equal = match (edit.orig.last(), edit.cor.last()) {
                    (Some(o), Some(c)) => o.lower() == c.lower(),
                    _ => false,
                };
                if last_equal && (edit.orig.len() > 1 || edit.cor.len() > 1) {
                    return self.classify_tokens(&edit.without_last(), resources);
                }

                format!("R:{}", self.rules.two_sided(edit, resources))
            }
        }
    }
}

/// Final category of a reserved edit, None for ordinary categories
pub fn reserved_category(category: &str, legacy: bool) -> Option<String> {
    if !is_reserved(category) {
        return None;
    }
    if category == UM && !legacy {
        return Some(UNK.to_string());
    }
    Some(category.to_string())
}
