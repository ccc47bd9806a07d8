/*!
 * Stemming capability.
 *
 * The alignment cost and the classifier only need `stem(word)`; any stemmer
 * can be plugged in through the `Stemmer` trait. `SuffixStemmer` is the
 * light built-in implementation.
 */

use std::fmt::Debug;

use crate::language_utils::CorpusLanguage;

/// Surface → stem function
pub trait Stemmer: Send + Sync + Debug {
    /// Stem of `word`; words sharing a stem are derivational variants
    fn stem(&self, word: &str) -> String;
}

const ENGLISH_SUFFIXES: &[&str] = &[
    "ational", "ization", "fulness", "ousness", "iveness", "ement", "ments", "ation", "ness",
    "ment", "able", "ible", "ance", "ence", "ship", "less", "ical", "ing", "ity", "ive", "ous",
    "ful", "ies", "ied", "est", "ize", "ise", "ly", "ed", "er", "es", "al", "s", "y", "e",
];

const GERMAN_SUFFIXES: &[&str] = &[
    "ungen", "heit", "keit", "lich", "isch", "ung", "ern", "end", "est", "em", "en", "er", "es",
    "st", "e", "n", "s", "t",
];

/// Longest-suffix stripping stemmer
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: Vec<&'static str>,
    min_stem: usize,
}

impl SuffixStemmer {
    /// Stemmer with the suffix inventory of a corpus language
    pub fn for_language(language: CorpusLanguage) -> Self {
        let suffixes = match language {
            CorpusLanguage::English => ENGLISH_SUFFIXES,
            CorpusLanguage::German => GERMAN_SUFFIXES,
        };
        let mut suffixes = suffixes.to_vec();
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        Self {
            suffixes,
            min_stem: 3,
        }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let len = lower.chars().count();

        for suffix in &self.suffixes {
            if lower.ends_with(suffix) && len - suffix.chars().count() >= self.min_stem {
                return lower[..lower.len() - suffix.len()].to_string();
            }
        }
        lower
    }
}
