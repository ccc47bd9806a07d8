/*!
 * Annotation capability.
 *
 * Tokenisation, tagging, lemmatisation and parsing are external services.
 * The engine only sees them through the `Annotator` trait, which turns a
 * tokenised sentence into immutable annotated tokens. `LexiconAnnotator` is
 * the built-in implementation backed by a tagged word list.
 */

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::token::{Sentence, Token};
use crate::errors::ResourceError;
use crate::language_utils::CorpusLanguage;
use crate::resources::TagMap;

/// Matches tokens made only of punctuation characters
static PUNCT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:punct:]]+$").expect("Invalid punctuation regex")
});

/// Matches numbers such as 3, 3.5 or 1,000
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+([.,][0-9]+)*$").expect("Invalid number regex")
});

/// Sentence annotation service
pub trait Annotator: Send + Sync + Debug {
    /// Annotate one tokenised sentence
    ///
    /// # Arguments
    /// * `words` - The surface tokens, in order
    ///
    /// # Returns
    /// * `Sentence` - One token per word, indices matching positions
    fn annotate(&self, words: &[String]) -> Sentence;
}

/// Features stored for one lexicon word
#[derive(Debug, Clone)]
struct LexiconEntry {
    tag: String,
    lemma: String,
    dep: Option<String>,
}

/// Annotator backed by a `word<TAB>tag<TAB>lemma[<TAB>dep]` lexicon
#[derive(Debug, Clone)]
pub struct LexiconAnnotator {
    language: CorpusLanguage,
    entries: HashMap<String, LexiconEntry>,
    tag_map: TagMap,
}

impl LexiconAnnotator {
    /// Annotator with an empty lexicon; every word goes through the fallback tagger
    pub fn new(language: CorpusLanguage, tag_map: TagMap) -> Self {
        Self {
            language,
            entries: HashMap::new(),
            tag_map,
        }
    }

    /// Load a lexicon file
    pub fn load<P: AsRef<Path>>(
        path: P,
        language: CorpusLanguage,
        tag_map: TagMap,
    ) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Unreadable {
            kind: "lexicon",
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, language, tag_map)
    }

    /// Parse lexicon text; blank lines and `#` comments are ignored
    pub fn parse(content: &str, language: CorpusLanguage, tag_map: TagMap) -> Result<Self, ResourceError> {
        let mut annotator = Self::new(language, tag_map);

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim_end();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split('\t').collect();
            if fields.len() < 3 || fields[..3].iter().any(|f| f.is_empty()) {
                return Err(ResourceError::InvalidEntry {
                    kind: "lexicon",
                    line: i + 1,
                    content: line.to_string(),
                });
            }
            annotator.entries.insert(
                fields[0].to_string(),
                LexiconEntry {
                    tag: fields[1].to_string(),
                    lemma: fields[2].to_string(),
                    dep: fields.get(3).map(|d| d.to_string()),
                },
            );
        }

        debug!("Loaded lexicon with {} entries", annotator.entries.len());
        Ok(annotator)
    }

    /// Add or replace a lexicon word
    pub fn insert(&mut self, word: &str, tag: &str, lemma: &str) {
        self.entries.insert(
            word.to_string(),
            LexiconEntry {
                tag: tag.to_string(),
                lemma: lemma.to_string(),
                dep: None,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
    }

    // @returns: Fallback fine tag for a word missing from the lexicon
    fn guess_tag(&self, word: &str, index: usize) -> &'static str {
        if PUNCT_REGEX.is_match(word) {
            return self.punctuation_tag(word);
        }
        if NUMBER_REGEX.is_match(word) {
            return match self.language {
                CorpusLanguage::English => "CD",
                CorpusLanguage::German => "CARD",
            };
        }

        let lower = word.to_lowercase();
        let capitalised = word.chars().next().is_some_and(char::is_uppercase);
        match self.language {
            CorpusLanguage::English => {
                if capitalised && index > 0 {
                    "NNP"
                } else if lower.ends_with("ing") && lower.len() > 4 {
                    "VBG"
                } else if lower.ends_with("ed") && lower.len() > 3 {
                    "VBD"
                } else if lower.ends_with("ly") && lower.len() > 3 {
                    "RB"
                } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
                    "NNS"
                } else {
                    "NN"
                }
            }
            CorpusLanguage::German => {
                if capitalised {
                    "NN"
                } else {
                    "XY"
                }
            }
        }
    }

    fn punctuation_tag(&self, word: &str) -> &'static str {
        match self.language {
            CorpusLanguage::English => match word {
                "," => ",",
                "." | "!" | "?" | "..." => ".",
                ":" | ";" | "-" | "--" => ":",
                "(" | "[" | "{" => "-LRB-",
                ")" | "]" | "}" => "-RRB-",
                "``" | "\"" => "``",
                "''" | "'" => "''",
                "$" => "$",
                "#" => "#",
                _ => "SYM",
            },
            CorpusLanguage::German => match word {
                "," => "$,",
                "." | "!" | "?" | ":" | ";" | "..." => "$.",
                _ => "$(",
            },
        }
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, words: &[String]) -> Sentence {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let (tag, lemma, dep) = match self.lookup(word) {
                    Some(entry) => (entry.tag.clone(), entry.lemma.clone(), entry.dep.clone()),
                    None => (self.guess_tag(word, index).to_string(), word.to_lowercase(), None),
                };
                let pos = self.tag_map.coarse(&tag).to_string();
                let token = Token::new(index, word, &tag, &pos, &lemma);
                match dep {
                    Some(dep) => token.with_dependency(&dep, index),
                    None => token,
                }
            })
            .collect();

        Sentence::new(tokens)
    }
}
